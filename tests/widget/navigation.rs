//! Keyboard navigation through the controller, including the containment
//! check and link activation.

use crate::common::{needle_corpus, strict_widget};
use fastsearch::{FocusState, FocusedElement, Key};

#[test]
fn test_up_from_first_result_returns_to_input() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("needle");

    assert!(widget.on_keydown(Key::ArrowDown));
    assert!(widget.on_keydown(Key::ArrowUp));

    assert_eq!(widget.focus(), FocusState::Input);
    assert_eq!(widget.view().focused, FocusedElement::Input);
    assert_eq!(widget.view().marker, None);
}

#[test]
fn test_up_walks_back_through_results() {
    let mut widget = strict_widget(needle_corpus(3));
    widget.on_input("needle");
    for _ in 0..3 {
        widget.on_keydown(Key::ArrowDown);
    }

    widget.on_keydown(Key::ArrowUp);
    assert_eq!(widget.focus(), FocusState::ResultLink(1));
    assert_eq!(widget.view().marker, Some(1));

    widget.on_keydown(Key::ArrowUp);
    assert_eq!(widget.focus(), FocusState::ResultLink(0));
}

#[test]
fn test_up_from_input_is_noop() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowUp);
    assert_eq!(widget.focus(), FocusState::Input);
}

#[test]
fn test_arrows_without_results_do_nothing() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("absent");

    assert!(!widget.on_keydown(Key::ArrowDown));
    assert!(!widget.on_keydown(Key::ArrowUp));
    assert!(!widget.on_keydown(Key::ArrowRight));
    assert_eq!(widget.focus(), FocusState::Input);
}

#[test]
fn test_right_opens_focused_link() {
    let mut widget = strict_widget(needle_corpus(3));
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowDown);
    widget.on_keydown(Key::ArrowDown);

    widget.on_keydown(Key::ArrowRight);

    assert_eq!(widget.view().visited, vec!["/doc-1/".to_string()]);
    assert_eq!(widget.focus(), FocusState::ResultLink(1));
}

#[test]
fn test_right_from_input_does_not_open() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowRight);
    assert!(widget.view().visited.is_empty());
}

#[test]
fn test_keys_outside_widget_are_ignored() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("needle");
    widget.view_mut().blur();

    assert!(!widget.on_keydown(Key::ArrowDown));
    assert_eq!(widget.focus(), FocusState::Input);
    assert_eq!(widget.view().focused, FocusedElement::Outside);
}

#[test]
fn test_escape_outside_widget_still_resets() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.view_mut().input = "needle".into();
    widget.on_input("needle");
    widget.view_mut().blur();

    widget.on_keydown(Key::Escape);

    assert!(widget.view().entries.is_empty());
    assert!(widget.view().input.is_empty());
    assert_eq!(widget.view().focused, FocusedElement::Input);
}

#[test]
fn test_unrelated_keys_pass_through() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowDown);

    assert!(!widget.on_keydown(Key::Other));
    assert_eq!(widget.focus(), FocusState::ResultLink(0));
}

#[test]
fn test_reset_is_idempotent() {
    let mut widget = strict_widget(needle_corpus(3));
    widget.view_mut().input = "needle".into();
    widget.on_input("needle");
    widget.on_keydown(Key::ArrowDown);

    widget.reset();
    let once = (widget.focus(), widget.view().clone());
    widget.reset();
    let twice = (widget.focus(), widget.view().clone());

    assert_eq!(once.0, FocusState::Input);
    assert_eq!(once.0, twice.0);
    assert_eq!(once.1.entries, twice.1.entries);
    assert_eq!(once.1.input, twice.1.input);
    assert_eq!(once.1.marker, twice.1.marker);
    assert_eq!(once.1.focused, twice.1.focused);
    assert!(twice.1.entries.is_empty());
    assert!(twice.1.input.is_empty());
}

#[test]
fn test_search_cleared_only_resets_when_empty() {
    let mut widget = strict_widget(needle_corpus(2));
    widget.view_mut().input = "needle".into();
    widget.on_input("needle");

    widget.on_search_cleared("needle");
    assert_eq!(widget.view().entries.len(), 2);

    widget.on_search_cleared("");
    assert!(widget.view().entries.is_empty());
    assert_eq!(widget.focus(), FocusState::Input);
}
