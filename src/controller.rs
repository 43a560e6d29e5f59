// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The widget controller: keystrokes in, rendered results and focus out.
//!
//! One controller per page owns the match engine, the navigator, and the
//! view. Every event runs to completion synchronously:
//!
//! ```text
//! on_input ──▶ engine.query ──▶ render (extract per result) ──▶ navigator.on_render
//! on_keydown ──▶ navigator.handle ──▶ apply effect to view
//! ```
//!
//! Nothing here can fail. A missing corpus means empty results, keys with
//! nothing on screen do nothing.

use crate::config::RawMatchOptions;
use crate::engine::MatchEngine;
use crate::fuzzy::{FuzzyIndex, Matcher};
use crate::nav::{NavEffect, Navigator};
use crate::render::{render, RenderedList, ResultView};
use crate::types::{CorpusDocument, FocusState, Key, MatchResult};
use crate::utils::char_len;

/// Search widget state for one page session.
#[derive(Debug)]
pub struct SearchController<V: ResultView, M: Matcher = FuzzyIndex> {
    engine: MatchEngine<M>,
    navigator: Navigator,
    view: V,
}

impl<V: ResultView, M: Matcher> SearchController<V, M> {
    pub fn new(view: V) -> Self {
        Self {
            engine: MatchEngine::new(),
            navigator: Navigator::new(),
            view,
        }
    }

    /// Index a freshly loaded corpus. Until this runs, input does nothing.
    pub fn init(&mut self, corpus: Vec<CorpusDocument>, options: Option<&RawMatchOptions>) {
        self.engine.init(corpus, options);
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    pub fn engine(&self) -> &MatchEngine<M> {
        &self.engine
    }

    pub fn focus(&self) -> FocusState {
        self.navigator.state()
    }

    pub fn rendered(&self) -> RenderedList {
        self.navigator.list()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Run the pipeline for the current contents of the search box.
    ///
    /// Returns the matches that were rendered (empty before init).
    pub fn on_input(&mut self, text: &str) -> Vec<MatchResult> {
        if !self.engine.is_ready() {
            return Vec::new();
        }
        let query = text.trim();
        let results = self.engine.query(query);
        let list = render(&results, char_len(query), &mut self.view);
        self.navigator.on_render(list);
        self.view.set_focus_marker(None);
        results
    }

    /// The input's native "search" event (e.g. its clear button).
    pub fn on_search_cleared(&mut self, value: &str) {
        if value.is_empty() {
            self.reset();
        }
    }

    /// Handle a keydown anywhere on the page.
    ///
    /// Returns whether the browser's default action should be prevented.
    pub fn on_keydown(&mut self, key: Key) -> bool {
        if key != Key::Escape && !self.view.focus_within_widget() {
            return false;
        }
        let transition = self.navigator.handle(key);
        match transition.effect {
            NavEffect::None => {}
            NavEffect::FocusInput => {
                self.view.set_focus_marker(None);
                self.view.focus_input();
            }
            NavEffect::FocusLink(i) => {
                self.view.set_focus_marker(Some(i));
                self.view.focus_link(i);
            }
            NavEffect::Activate(i) => self.view.activate_link(i),
            NavEffect::Reset => self.clear_view(),
        }
        transition.prevent_default
    }

    /// Clear results and input, focus the input box. Safe to repeat.
    pub fn reset(&mut self) {
        self.navigator.reset();
        self.clear_view();
    }

    fn clear_view(&mut self) {
        self.view.clear_results();
        self.view.set_focus_marker(None);
        self.view.clear_input();
        self.view.focus_input();
    }
}
