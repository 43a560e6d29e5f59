// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match engine adapter: one matcher per page, created on load.
//!
//! The adapter owns configuration resolution and the matcher's lifetime.
//! Ranking is the matcher's business. Before `init` every query answers with
//! an empty list; that is the "still loading" state, not an error.

use crate::config::{MatchOptions, RawMatchOptions};
use crate::fuzzy::{FuzzyIndex, Matcher};
use crate::types::{CorpusDocument, MatchResult};

/// Holds the page's matcher once the corpus has arrived.
#[derive(Debug)]
pub struct MatchEngine<M: Matcher = FuzzyIndex> {
    matcher: Option<M>,
    options: Option<MatchOptions>,
}

impl<M: Matcher> Default for MatchEngine<M> {
    fn default() -> Self {
        Self {
            matcher: None,
            options: None,
        }
    }
}

impl<M: Matcher> MatchEngine<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build (or rebuild) the matcher over `corpus`.
    ///
    /// `raw == None` selects the strict built-in options.
    pub fn init(&mut self, corpus: Vec<CorpusDocument>, raw: Option<&RawMatchOptions>) {
        let options = MatchOptions::resolve(raw);
        tracing::debug!(?options, docs = corpus.len(), "building match engine");
        self.matcher = Some(M::build(corpus, &options));
        self.options = Some(options);
    }

    pub fn is_ready(&self) -> bool {
        self.matcher.is_some()
    }

    /// Options the current matcher was built with.
    pub fn options(&self) -> Option<&MatchOptions> {
        self.options.as_ref()
    }

    /// Number of documents indexed, 0 before init.
    pub fn doc_count(&self) -> usize {
        self.matcher.as_ref().map_or(0, |m| m.len())
    }

    /// Ranked matches for `text`; empty until `init` has run.
    pub fn query(&self, text: &str) -> Vec<MatchResult> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };
        let results = matcher.search(text);
        tracing::debug!(query = text, hits = results.len(), "query");
        results
    }
}
