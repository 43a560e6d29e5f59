// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn match spans into readable excerpts.
//!
//! Only spans exactly as long as the query become snippets. A fuzzy span that
//! is one character longer or shorter than what the user typed would draw the
//! highlight box around the wrong text, so it is skipped, even if that leaves
//! a matching field with no excerpt at all.

use crate::types::{MatchResult, Snippet};
use crate::utils::{char_len, char_slice};

/// Snippets shown per result at most.
pub const MAX_SNIPPETS: usize = 4;

/// Characters of context on each side of a highlighted span.
pub const CONTEXT_CHARS: usize = 50;

/// Excerpts for one result, in field order then span order.
///
/// `query_len` is the character length of the trimmed query. Title matches
/// never produce snippets since the title is already shown.
pub fn extract(result: &MatchResult, query_len: usize) -> Vec<Snippet> {
    let mut snippets = Vec::new();

    for field in result.matches.iter().filter(|m| !m.is_title()) {
        let value_len = char_len(&field.value);
        for &(start, end) in &field.indices {
            if snippets.len() >= MAX_SNIPPETS {
                return snippets;
            }
            if end < start || end >= value_len || end - start + 1 != query_len {
                continue;
            }
            snippets.push(Snippet {
                before: char_slice(&field.value, start.saturating_sub(CONTEXT_CHARS), start),
                matched: char_slice(&field.value, start, end + 1),
                after: char_slice(&field.value, end + 1, end + 1 + CONTEXT_CHARS),
            });
        }
    }

    snippets
}
