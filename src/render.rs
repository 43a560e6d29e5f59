// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result list rendering and the document-tree boundary.
//!
//! The controller never touches the DOM directly. Everything it does to the
//! page goes through [`ResultView`], which the browser binding implements over
//! the real mount points and tests implement in memory ([`crate::MemoryView`]).
//!
//! # Markup
//!
//! ```text
//! <li class="post-entry">
//!   <header class="entry-header">Title&nbsp;»</header>
//!   <a href="/permalink/" aria-label="Title"></a>
//!   <p class="search-snippet">...before<mark>match</mark>after...</p>   × 0..4
//! </li>
//! ```
//!
//! The anchor is the focus target for keyboard navigation; the focus marker
//! goes on the enclosing `<li>`.

use crate::highlight::extract;
use crate::types::{MatchResult, Snippet};
use serde::Serialize;

/// The page elements the widget reads and writes.
///
/// Indices always refer to the most recently rendered list.
pub trait ResultView {
    /// Remove every rendered result.
    fn clear_results(&mut self);

    /// Append one result at the end of the list.
    fn append_result(&mut self, entry: &ResultEntry);

    /// Put the "focused" marker on entry `index` and remove it from all
    /// others. `None` clears every marker.
    fn set_focus_marker(&mut self, index: Option<usize>);

    /// Move keyboard focus to the search input.
    fn focus_input(&mut self);

    /// Move keyboard focus to the link of entry `index`.
    fn focus_link(&mut self, index: usize);

    /// Follow the link of entry `index`, as if clicked.
    fn activate_link(&mut self, index: usize);

    /// Empty the search input.
    fn clear_input(&mut self);

    /// Whether the element that currently has keyboard focus lies inside
    /// the search widget. Key events from elsewhere on the page are ignored.
    fn focus_within_widget(&self) -> bool;
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub title: String,
    pub permalink: String,
    /// Accessible name of the link, the document title
    pub aria_label: String,
    pub snippets: Vec<Snippet>,
}

impl ResultEntry {
    pub fn from_match(result: &MatchResult, query_len: usize) -> Self {
        Self {
            title: result.item.title.clone(),
            permalink: result.item.permalink.clone(),
            aria_label: result.item.title.clone(),
            snippets: extract(result, query_len),
        }
    }

    /// Markup for one list item. All corpus text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<li class=\"post-entry\"><header class=\"entry-header\">{}&nbsp;»</header><a href=\"{}\" aria-label=\"{}\"></a>",
            escape_html(&self.title),
            escape_html(&self.permalink),
            escape_html(&self.aria_label),
        );
        for snippet in &self.snippets {
            html.push_str(&format!(
                "<p class=\"search-snippet\">...{}<mark>{}</mark>{}...</p>",
                escape_html(&snippet.before),
                escape_html(&snippet.matched),
                escape_html(&snippet.after),
            ));
        }
        html.push_str("</li>");
        html
    }
}

/// What the navigator needs to know about the list on screen.
///
/// First and last entries are implied by `len`, so boundary checks are O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedList {
    pub len: usize,
}

impl RenderedList {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<usize> {
        (self.len > 0).then_some(0)
    }

    pub fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }
}

/// Replace the view's list with `results`, in ranking order.
pub fn render<V: ResultView + ?Sized>(
    results: &[MatchResult],
    query_len: usize,
    view: &mut V,
) -> RenderedList {
    view.clear_results();
    for result in results {
        view.append_result(&ResultEntry::from_match(result, query_len));
    }
    RenderedList { len: results.len() }
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
