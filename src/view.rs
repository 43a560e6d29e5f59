// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory [`ResultView`]s: [`MemoryView`] for the CLI and tests, and
//! [`QueuedView`] for hosts whose callbacks must run outside the controller.

use crate::render::{ResultEntry, ResultView};

/// Which element of the widget holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedElement {
    #[default]
    Input,
    Link(usize),
    /// Focus is somewhere else on the page
    Outside,
}

/// A headless stand-in for the page: input text, list, marker, focus.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub input: String,
    pub entries: Vec<ResultEntry>,
    /// Entry carrying the "focused" marker
    pub marker: Option<usize>,
    pub focused: FocusedElement,
    /// Permalinks followed via `activate_link`, oldest first
    pub visited: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    /// Simulate the user clicking somewhere outside the widget.
    pub fn blur(&mut self) {
        self.focused = FocusedElement::Outside;
    }
}

impl ResultView for MemoryView {
    fn clear_results(&mut self) {
        self.entries.clear();
        self.marker = None;
    }

    fn append_result(&mut self, entry: &ResultEntry) {
        self.entries.push(entry.clone());
    }

    fn set_focus_marker(&mut self, index: Option<usize>) {
        self.marker = index.filter(|&i| i < self.entries.len());
    }

    fn focus_input(&mut self) {
        self.focused = FocusedElement::Input;
    }

    fn focus_link(&mut self, index: usize) {
        if index < self.entries.len() {
            self.focused = FocusedElement::Link(index);
        }
    }

    fn activate_link(&mut self, index: usize) {
        if let Some(entry) = self.entries.get(index) {
            self.visited.push(entry.permalink.clone());
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_within_widget(&self) -> bool {
        self.focused != FocusedElement::Outside
    }
}

/// One page update requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    ClearResults,
    AppendResult(ResultEntry),
    SetFocusMarker(Option<usize>),
    FocusInput,
    FocusLink(usize),
    ActivateLink(usize),
    ClearInput,
}

/// A [`ResultView`] that records updates instead of applying them.
///
/// The owner drains the queue with [`QueuedView::take`] after releasing the
/// controller, then replays it against the real page. A page callback that
/// calls back into the widget therefore never finds the controller borrowed.
#[derive(Debug, Clone)]
pub struct QueuedView {
    ops: Vec<ViewOp>,
    focus_within: bool,
}

impl Default for QueuedView {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            focus_within: true,
        }
    }
}

impl QueuedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Containment answer for the next keydown, sampled from the page
    /// before the controller runs.
    pub fn set_focus_within(&mut self, within: bool) {
        self.focus_within = within;
    }

    /// Pending updates, oldest first. Leaves the queue empty.
    pub fn take(&mut self) -> Vec<ViewOp> {
        std::mem::take(&mut self.ops)
    }
}

impl ResultView for QueuedView {
    fn clear_results(&mut self) {
        self.ops.push(ViewOp::ClearResults);
    }

    fn append_result(&mut self, entry: &ResultEntry) {
        self.ops.push(ViewOp::AppendResult(entry.clone()));
    }

    fn set_focus_marker(&mut self, index: Option<usize>) {
        self.ops.push(ViewOp::SetFocusMarker(index));
    }

    fn focus_input(&mut self) {
        self.ops.push(ViewOp::FocusInput);
    }

    fn focus_link(&mut self, index: usize) {
        self.ops.push(ViewOp::FocusLink(index));
    }

    fn activate_link(&mut self, index: usize) {
        self.ops.push(ViewOp::ActivateLink(index));
    }

    fn clear_input(&mut self) {
        self.ops.push(ViewOp::ClearInput);
    }

    fn focus_within_widget(&self) -> bool {
        self.focus_within
    }
}
