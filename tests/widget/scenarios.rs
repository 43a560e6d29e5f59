//! The reference walkthroughs: one per behavior the widget promises.

use crate::common::{make_doc, needle_corpus, strict_widget};
use fastsearch::{FocusState, FocusedElement, Key};

#[test]
fn test_single_hit_single_snippet() {
    let mut widget = strict_widget(vec![make_doc("A", "hello world")]);
    let results = widget.on_input("hello");

    assert_eq!(results.len(), 1);
    let entries = &widget.view().entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].snippets.len(), 1);
    assert_eq!(entries[0].snippets[0].matched, "hello");
    assert_eq!(entries[0].snippets[0].after, " world");
}

#[test]
fn test_empty_query_has_no_results() {
    let mut widget = strict_widget(vec![make_doc("A", "hello world")]);
    assert!(widget.on_input("").is_empty());
    assert!(widget.on_input("   ").is_empty());
    assert!(widget.view().entries.is_empty());
    assert_eq!(widget.focus(), FocusState::Input);
}

#[test]
fn test_down_stops_at_last_result() {
    let mut widget = strict_widget(needle_corpus(3));
    assert_eq!(widget.on_input("needle").len(), 3);

    for _ in 0..4 {
        widget.on_keydown(Key::ArrowDown);
    }

    assert_eq!(widget.focus(), FocusState::ResultLink(2));
    assert_eq!(widget.view().marker, Some(2));
    assert_eq!(widget.view().focused, FocusedElement::Link(2));
}

#[test]
fn test_escape_mid_navigation_resets() {
    let mut widget = strict_widget(needle_corpus(3));
    widget.view_mut().input = "needle".into();
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowDown);
    widget.on_keydown(Key::ArrowDown);
    assert_eq!(widget.focus(), FocusState::ResultLink(1));

    widget.on_keydown(Key::Escape);

    assert_eq!(widget.focus(), FocusState::Input);
    assert!(widget.view().entries.is_empty());
    assert!(widget.view().input.is_empty());
    assert_eq!(widget.view().marker, None);
    assert_eq!(widget.view().focused, FocusedElement::Input);
}

#[test]
fn test_rerender_drops_link_focus() {
    let mut widget = strict_widget(needle_corpus(3));
    widget.on_input("needle");
    for _ in 0..3 {
        widget.on_keydown(Key::ArrowDown);
    }
    assert_eq!(widget.focus(), FocusState::ResultLink(2));

    // Next keystroke narrows the list to a single document
    let results = widget.on_input("0 needle");

    assert_eq!(results.len(), 1);
    assert_eq!(widget.focus(), FocusState::Input);
    assert_eq!(widget.view().marker, None);
    assert_eq!(widget.rendered().len, 1);
}
