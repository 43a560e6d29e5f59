// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the capability the widget searches with.
//!
//! The widget only needs "given a query, return ranked documents with
//! per-field spans". That contract is the [`Matcher`] trait. [`FuzzyIndex`]
//! is the built-in implementation: exact occurrences first, then approximate
//! substring windows bounded by the threshold.

mod index;
mod levenshtein;

pub use index::FuzzyIndex;

use crate::config::MatchOptions;
use crate::types::{CorpusDocument, MatchResult};

/// A fuzzy search engine built over a fixed corpus.
pub trait Matcher {
    /// Build an index over `corpus` with already-resolved options.
    fn build(corpus: Vec<CorpusDocument>, options: &MatchOptions) -> Self
    where
        Self: Sized;

    /// Rank documents against `pattern`. Must not panic on any input.
    fn search(&self, pattern: &str) -> Vec<MatchResult>;

    /// Number of indexed documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
