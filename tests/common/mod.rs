//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fastsearch::{CorpusDocument, MemoryView, RawMatchOptions, SearchController};
use std::fs;

// Re-export canonical test utilities from fastsearch::testing
pub use fastsearch::testing::{make_doc, sample_corpus};

/// Blog-shaped corpus as a site generator would emit it.
pub const FIXTURE_INDEX: &str = "fixtures/index.json";

/// Site config carrying `[params.fuseOpts]`.
pub const FIXTURE_SITE_CONFIG: &str = "fixtures/site.toml";

pub type Widget = SearchController<MemoryView>;

pub fn load_fixture() -> Vec<CorpusDocument> {
    let text = fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture");
    fastsearch::parse_corpus(&text).expect("Invalid fixture corpus")
}

/// A widget over `docs` with the strict built-in options.
pub fn strict_widget(docs: Vec<CorpusDocument>) -> Widget {
    let mut widget: Widget = SearchController::new(MemoryView::new());
    widget.init(docs, None);
    widget
}

/// A widget over `docs` with user options.
pub fn widget_with(docs: Vec<CorpusDocument>, options: RawMatchOptions) -> Widget {
    let mut widget: Widget = SearchController::new(MemoryView::new());
    widget.init(docs, Some(&options));
    widget
}

/// `n` documents that all contain "needle" in their content.
pub fn needle_corpus(n: usize) -> Vec<CorpusDocument> {
    (0..n)
        .map(|i| make_doc(&format!("Doc {}", i), &format!("hay {} needle hay", i)))
        .collect()
}

/// Type `text` into the box the way a user would, one keystroke per char.
pub fn type_text(widget: &mut Widget, text: &str) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        widget.view_mut().input = typed.clone();
        widget.on_input(&typed);
    }
}
