// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through the widget.
//!
//! A query moves through these types in one direction:
//!
//! ```text
//! CorpusDocument ──▶ MatchResult ──▶ Snippet ──▶ ResultEntry (render.rs)
//!                    (FieldMatch)
//! ```
//!
//! # Invariants
//!
//! - **FieldMatch**: every `(start, end)` in `indices` satisfies
//!   `start <= end < value.chars().count()`. Offsets are character offsets,
//!   inclusive on both ends, NOT byte offsets.
//!
//! - **Snippet**: `matched.chars().count()` equals the query length that
//!   produced it, and `before`/`after` hold at most 50 characters each.
//!
//! - **MatchResult**: `ref_index` is the position of `item` in the corpus it
//!   was matched against. Ties in score keep corpus order.

use serde::{Deserialize, Serialize};

/// Field name that never contributes highlight snippets.
pub const TITLE_FIELD: &str = "title";

/// One searchable page, as produced by the site generator's `index.json`.
///
/// Missing fields deserialize as empty strings so a sparse corpus (e.g. no
/// summaries) still loads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
}

impl CorpusDocument {
    /// Look up a field by the name used in `MatchOptions::keys`.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "permalink" => Some(&self.permalink),
            "summary" => Some(&self.summary),
            "content" => Some(&self.content),
            _ => None,
        }
    }
}

/// Matched spans within one field of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// Field name (`title`, `content`, ...)
    pub key: String,
    /// Full field text the offsets index into
    pub value: String,
    /// Inclusive `(start, end)` character offsets, in text order
    pub indices: Vec<(usize, usize)>,
}

impl FieldMatch {
    pub fn is_title(&self) -> bool {
        self.key == TITLE_FIELD
    }
}

/// A ranked hit for one query. Replaced wholesale by the next query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub item: CorpusDocument,
    /// Position of `item` in the loaded corpus
    pub ref_index: usize,
    /// 0.0 is a perfect match, 1.0 a complete mismatch. `None` when scores
    /// were not requested.
    pub score: Option<f64>,
    /// Per-field spans. Empty when matches were not requested.
    pub matches: Vec<FieldMatch>,
}

/// Context around one highlighted span: `before` + `matched` + `after`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub before: String,
    pub matched: String,
    pub after: String,
}

/// Which element owns keyboard focus.
///
/// `ResultLink(i)` is only meaningful while a list of more than `i` results
/// is on screen; any re-render drops back to `Input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum FocusState {
    #[default]
    Input,
    ResultLink(usize),
}

impl FocusState {
    pub fn link_index(self) -> Option<usize> {
        match self {
            FocusState::Input => None,
            FocusState::ResultLink(i) => Some(i),
        }
    }
}

/// Keys the widget reacts to, named after `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Parse a DOM key name. Anything unrecognized is `Other`.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl std::str::FromStr for Key {
    type Err = std::convert::Infallible;

    /// Lenient parser used by the CLI: accepts DOM names and short forms
    /// (`down`, `up`, `right`, `esc`) in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Key::ArrowDown,
            "up" | "arrowup" => Key::ArrowUp,
            "right" | "arrowright" => Key::ArrowRight,
            "esc" | "escape" => Key::Escape,
            _ => Key::Other,
        })
    }
}
