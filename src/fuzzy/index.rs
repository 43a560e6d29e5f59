// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in matcher.
//!
//! Scores follow the usual bitap convention: 0.0 is perfect, 1.0 is a
//! complete miss, and a field matches when its score is within `threshold`.
//!
//! ```text
//! score = errors / pattern_len                      (ignore_location)
//! score = errors / pattern_len + |start - location| / distance
//! ```
//!
//! Per field, exact occurrences are tried first; every occurrence becomes a
//! span. Only when none qualifies does the approximate window search run, with
//! an error budget of `floor(threshold * pattern_len)`. A document's score is
//! its best field score.

use super::levenshtein::{approximate_windows, select_windows};
use super::Matcher;
use crate::config::MatchOptions;
use crate::types::{CorpusDocument, FieldMatch, MatchResult};
use crate::utils::fold_chars;

/// Fuzzy index over a corpus. Field text is case-folded once at build time.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    docs: Vec<CorpusDocument>,
    /// `folded[doc][key]`: comparison form of each searched field, `None`
    /// when the document has no such field
    folded: Vec<Vec<Option<Vec<char>>>>,
    options: MatchOptions,
}

/// Spans and score for one field of one document.
struct FieldHit {
    score: f64,
    spans: Vec<(usize, usize)>,
}

impl FuzzyIndex {
    fn compute_score(&self, errors: usize, start: usize, pattern_len: usize) -> f64 {
        let accuracy = errors as f64 / pattern_len as f64;
        if self.options.ignore_location {
            return accuracy;
        }
        let proximity = start.abs_diff(self.options.location);
        if self.options.distance == 0 {
            return if proximity == 0 { accuracy } else { 1.0 };
        }
        accuracy + proximity as f64 / self.options.distance as f64
    }

    fn search_field(&self, pattern: &[char], text: &[char]) -> Option<FieldHit> {
        let m = pattern.len();
        let threshold = self.options.threshold;

        let exact: Vec<usize> = if text.len() >= m {
            text.windows(m)
                .enumerate()
                .filter(|(_, w)| *w == pattern)
                .map(|(start, _)| start)
                .collect()
        } else {
            Vec::new()
        };

        let exact_score = exact
            .iter()
            .map(|&start| self.compute_score(0, start, m))
            .fold(f64::INFINITY, f64::min);

        let hit = if exact_score <= threshold {
            FieldHit {
                score: exact_score,
                spans: exact.iter().map(|&start| (start, start + m - 1)).collect(),
            }
        } else {
            let max_errors = (threshold * m as f64).floor() as usize;
            if max_errors == 0 {
                return None;
            }
            let accepted: Vec<_> = approximate_windows(pattern, text, max_errors)
                .into_iter()
                .filter(|w| self.compute_score(w.errors, w.start, m) <= threshold)
                .collect();
            let windows = select_windows(accepted, m, self.options.find_all_matches);
            let score = windows
                .iter()
                .map(|w| self.compute_score(w.errors, w.start, m))
                .fold(f64::INFINITY, f64::min);
            FieldHit {
                score,
                spans: windows.iter().map(|w| (w.start, w.end)).collect(),
            }
        };

        let min_len = self.options.min_match_char_length;
        let spans: Vec<(usize, usize)> = hit
            .spans
            .into_iter()
            .filter(|&(start, end)| end + 1 - start >= min_len)
            .collect();

        if spans.is_empty() {
            None
        } else {
            Some(FieldHit {
                score: hit.score,
                spans,
            })
        }
    }
}

impl Matcher for FuzzyIndex {
    fn build(corpus: Vec<CorpusDocument>, options: &MatchOptions) -> Self {
        let folded = corpus
            .iter()
            .map(|doc| {
                options
                    .keys
                    .iter()
                    .map(|key| {
                        doc.field(key)
                            .map(|value| fold_chars(value, options.is_case_sensitive))
                    })
                    .collect()
            })
            .collect();

        Self {
            docs: corpus,
            folded,
            options: options.clone(),
        }
    }

    fn search(&self, pattern: &str) -> Vec<MatchResult> {
        let pattern = fold_chars(pattern, self.options.is_case_sensitive);
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<(f64, MatchResult)> = Vec::new();

        for (ref_index, (doc, fields)) in self.docs.iter().zip(&self.folded).enumerate() {
            let mut best = f64::INFINITY;
            let mut matches = Vec::new();

            for (key, text) in self.options.keys.iter().zip(fields) {
                let Some(text) = text else { continue };
                let Some(hit) = self.search_field(&pattern, text) else {
                    continue;
                };
                best = best.min(hit.score);
                if self.options.include_matches {
                    matches.push(FieldMatch {
                        key: key.clone(),
                        value: doc.field(key).unwrap_or_default().to_string(),
                        indices: hit.spans,
                    });
                }
            }

            if best.is_finite() {
                results.push((
                    best,
                    MatchResult {
                        item: doc.clone(),
                        ref_index,
                        score: self.options.include_score.then_some(best),
                        matches,
                    },
                ));
            }
        }

        if self.options.should_sort {
            // Stable: equal scores keep corpus order
            results.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        }

        results.into_iter().map(|(_, r)| r).collect()
    }

    fn len(&self) -> usize {
        self.docs.len()
    }
}
