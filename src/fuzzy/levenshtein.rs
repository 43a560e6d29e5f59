// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring search by edit distance.
//!
//! Plain Levenshtein compares two whole strings. Here the pattern must match
//! *somewhere inside* the text, so row 0 of the DP is all zeros (a match may
//! start at any text position for free). This is Sellers' algorithm. Alongside
//! each cell we carry the text position where the best alignment started, so
//! every accepted end position comes with its span.
//!
//! The early exit from the whole-string version survives in a weaker form:
//! a pattern of `m` characters needs at least `m - k` text characters to match
//! with `k` errors, so shorter texts are rejected before allocating anything.

/// An accepted alignment of the pattern inside the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First text character of the match (inclusive)
    pub start: usize,
    /// Last text character of the match (inclusive)
    pub end: usize,
    /// Edit distance between the pattern and `text[start..=end]`
    pub errors: usize,
}

/// Every end position where `pattern` matches `text` with at most
/// `max_errors` edits, one window per end position, in text order.
///
/// Empty alignments (pattern deleted entirely) are never reported.
pub fn approximate_windows(pattern: &[char], text: &[char], max_errors: usize) -> Vec<Window> {
    let m = pattern.len();
    if m == 0 || text.len() + max_errors < m {
        return Vec::new();
    }

    // Column j of the DP: cost[i] = best edit distance of pattern[..i] against
    // a substring of text ending just before j; origin[i] = where it started.
    let mut cost: Vec<usize> = (0..=m).collect();
    let mut origin: Vec<usize> = vec![0; m + 1];
    let mut windows = Vec::new();

    for (j, &tc) in text.iter().enumerate() {
        // Row 0: free start at j + 1
        let mut diag_cost = cost[0];
        let mut diag_origin = origin[0];
        cost[0] = 0;
        origin[0] = j + 1;

        for i in 1..=m {
            let (up_cost, up_origin) = (cost[i], origin[i]);
            let sub = diag_cost + usize::from(pattern[i - 1] != tc);
            let skip_text = up_cost + 1; // text char inserted
            let skip_pattern = cost[i - 1] + 1; // pattern char deleted

            let (best, from) = if sub <= skip_text && sub <= skip_pattern {
                (sub, diag_origin)
            } else if skip_pattern <= skip_text {
                (skip_pattern, origin[i - 1])
            } else {
                (skip_text, up_origin)
            };

            diag_cost = up_cost;
            diag_origin = up_origin;
            cost[i] = best;
            origin[i] = from;
        }

        // origin == j + 1 means every pattern char was deleted: empty match
        if cost[m] <= max_errors && origin[m] <= j {
            windows.push(Window {
                start: origin[m],
                end: j,
                errors: cost[m],
            });
        }
    }

    windows
}

/// Pick the best non-overlapping windows.
///
/// Fewest errors wins, then the earliest start, then the window whose length
/// is closest to the pattern's. With `all == false` only the single best
/// window is returned. Output is in text order.
pub fn select_windows(mut candidates: Vec<Window>, pattern_len: usize, all: bool) -> Vec<Window> {
    candidates.sort_by_key(|w| (w.errors, w.start, (w.end + 1 - w.start).abs_diff(pattern_len)));
    let mut chosen: Vec<Window> = Vec::new();
    for w in candidates {
        if chosen.iter().all(|c| w.end < c.start || w.start > c.end) {
            chosen.push(w);
            if !all {
                break;
            }
        }
    }
    chosen.sort_by_key(|w| w.start);
    chosen
}
