//! Query → extract → render over the fixture corpus.

use crate::common::{load_fixture, make_doc, strict_widget, type_text, widget_with, Widget};
use fastsearch::{FocusState, Key, MemoryView, RawMatchOptions, SearchController};

#[test]
fn test_strict_results_keep_corpus_order() {
    let mut widget = strict_widget(load_fixture());
    widget.on_input("light");

    assert_eq!(
        widget.view().titles(),
        vec!["Photography notes", "Hiking the ridge"]
    );
    let snippets = &widget.view().entries[0].snippets;
    assert_eq!(snippets.len(), 2);
    assert!(snippets.iter().all(|s| s.matched == "light"));
}

#[test]
fn test_case_folded_match_keeps_original_text() {
    let mut widget = strict_widget(load_fixture());
    widget.on_input("RUST");

    let entry = &widget.view().entries[0];
    assert_eq!(entry.title, "Getting started with Rust");
    assert_eq!(entry.snippets[0].matched, "Rust");
    assert_eq!(entry.snippets[1].matched, "rust");
}

#[test]
fn test_snippets_capped_per_result() {
    let mut widget = strict_widget(vec![make_doc("Echo", "ab ab ab ab ab ab ab")]);
    widget.on_input("ab");
    assert_eq!(widget.view().entries[0].snippets.len(), 4);
}

#[test]
fn test_multibyte_offsets() {
    let mut widget = strict_widget(load_fixture());
    widget.on_input("café");

    assert_eq!(widget.view().titles(), vec!["Café culture"]);
    let snippets = &widget.view().entries[0].snippets;
    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].before, "Every ");
    assert_eq!(snippets[1].matched, "café");
    assert!(snippets[1].before.ends_with("The best "));
}

#[test]
fn test_fuzzy_typo_ranks_intended_post_first() {
    let options = RawMatchOptions {
        threshold: Some(0.4),
        includematches: Some(true),
        includescore: Some(true),
        ..RawMatchOptions::default()
    };
    let mut widget = widget_with(load_fixture(), options);
    let results = widget.on_input("photgraphy");

    assert!(!results.is_empty());
    assert_eq!(results[0].item.title, "Photography notes");
    assert!(results[0].score.is_some_and(|s| s > 0.0 && s <= 0.4));
    // Every span is one char longer than the query, so none is highlighted
    assert!(widget.view().entries[0].snippets.is_empty());
}

#[test]
fn test_title_only_keys_give_no_snippets() {
    let options = RawMatchOptions {
        keys: Some(vec!["title".into()]),
        includematches: Some(true),
        threshold: Some(0.0),
        ..RawMatchOptions::default()
    };
    let mut widget = widget_with(load_fixture(), options);
    widget.on_input("ridge");

    assert_eq!(widget.view().titles(), vec!["Hiking the ridge"]);
    assert!(widget.view().entries[0].snippets.is_empty());
}

#[test]
fn test_rendered_markup() {
    let mut widget = strict_widget(load_fixture());
    widget.on_input("granite");

    let html = widget.view().entries[0].to_html();
    assert!(html.starts_with("<li class=\"post-entry\">"));
    assert!(html.contains("Hiking the ridge&nbsp;»"));
    assert!(html.contains(
        "<a href=\"https://blog.example.com/posts/hiking-the-ridge/\" aria-label=\"Hiking the ridge\"></a>"
    ));
    assert!(html.contains("<mark>granite</mark>"));
}

#[test]
fn test_typing_matches_direct_query() {
    let mut typed = strict_widget(load_fixture());
    type_text(&mut typed, "morning");

    let mut direct = strict_widget(load_fixture());
    direct.on_input("morning");

    assert_eq!(typed.view().entries, direct.view().entries);
    assert_eq!(typed.focus(), FocusState::Input);
}

#[test]
fn test_queries_before_init_are_empty() {
    let mut widget: Widget = SearchController::new(MemoryView::new());
    assert!(!widget.is_ready());
    assert!(widget.on_input("rust").is_empty());
    assert!(!widget.on_keydown(Key::ArrowDown));
    assert_eq!(widget.focus(), FocusState::Input);
    assert_eq!(widget.engine().doc_count(), 0);
}

#[test]
fn test_init_again_replaces_corpus() {
    let mut widget = strict_widget(load_fixture());
    assert_eq!(widget.engine().doc_count(), 5);

    widget.init(vec![make_doc("Only", "granite and light")], None);
    widget.on_input("light");

    assert_eq!(widget.engine().doc_count(), 1);
    assert_eq!(widget.view().titles(), vec!["Only"]);
}
