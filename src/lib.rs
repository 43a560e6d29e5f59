// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke-driven fuzzy search for static sites.
//!
//! The site publishes its posts as a JSON array (`index.json`). This crate
//! loads it once, indexes it, and on every keystroke ranks the posts, cuts
//! highlighted snippets around each hit, and renders a result list that can
//! be walked with the arrow keys.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│  engine.rs   │────▶│ highlight.rs │
//! │ (index.json)│     │ (MatchEngine │     │  (snippets)  │
//! └─────────────┘     │  + fuzzy/)   │     └──────────────┘
//!                     └──────────────┘            │
//!                            ▲                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   nav.rs    │◀────│controller.rs │────▶│  render.rs   │
//! │ (FocusState)│     │  (events)    │     │ (ResultView) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The controller is the only stateful piece the page talks to. It never
//! touches the DOM itself: everything visible goes through [`ResultView`],
//! which the wasm binding implements over the page and [`MemoryView`]
//! implements in memory.
//!
//! # Usage
//!
//! ```
//! use fastsearch::{FocusState, Key, MemoryView, SearchController};
//!
//! let mut widget: SearchController<MemoryView> = SearchController::new(MemoryView::new());
//! widget.init(fastsearch::testing::sample_corpus(), None);
//!
//! let results = widget.on_input("rust");
//! assert!(!results.is_empty());
//!
//! widget.on_keydown(Key::ArrowDown);
//! assert_eq!(widget.focus(), FocusState::ResultLink(0));
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod loader;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod types;
pub mod utils;
pub mod view;

#[doc(hidden)]
pub mod testing;

pub use config::{MatchOptions, RawMatchOptions, WidgetConfig, DEFAULT_INDEX_URL};
pub use controller::SearchController;
pub use engine::MatchEngine;
pub use error::{ConfigError, LoadError};
pub use fuzzy::{FuzzyIndex, Matcher};
pub use highlight::{extract, CONTEXT_CHARS, MAX_SNIPPETS};
pub use loader::{load, parse_corpus, CorpusSource};
pub use nav::{NavEffect, Navigator, Transition};
pub use render::{escape_html, render, RenderedList, ResultEntry, ResultView};
pub use types::{CorpusDocument, FieldMatch, FocusState, Key, MatchResult, Snippet, TITLE_FIELD};
pub use view::{FocusedElement, MemoryView, QueuedView, ViewOp};

#[cfg(feature = "wasm")]
pub use runtime::wasm::FastSearch;
