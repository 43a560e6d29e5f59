// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard navigation over the input box and the result links.
//!
//! The input and the links form one vertical list: the input sits above
//! result 0. Down walks towards the last result and stops there; Up walks back
//! and leaves the list through the top into the input.
//!
//! ```text
//!            Down               Down              Down (no-op at N-1)
//!   Input ─────────▶ Link(0) ─────────▶ Link(1) ─ ··· ─▶ Link(N-1)
//!         ◀─────────         ◀─────────
//!             Up                 Up
//!
//!   Right on Link(i): follow the link      Escape anywhere: Input + reset
//! ```
//!
//! # Invariants
//!
//! - `state == ResultLink(i)` implies `i < list.len`
//! - `list.len == 0` implies `state == Input`
//! - any re-render returns to `Input`
//!
//! The navigator is the source of truth for focus. The page is updated from
//! the returned [`NavEffect`]; it is never read back.

use crate::render::RenderedList;
use crate::types::{FocusState, Key};

/// What the page must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Nothing changes
    None,
    /// Clear markers, focus the input box
    FocusInput,
    /// Mark entry `i` and focus its link
    FocusLink(usize),
    /// Follow link `i`; focus stays where it is
    Activate(usize),
    /// Clear input and results, then focus the input box
    Reset,
}

/// Result of feeding one key to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub effect: NavEffect,
    /// Whether the browser's default action (scrolling) must be suppressed
    pub prevent_default: bool,
}

impl Transition {
    const IGNORED: Transition = Transition {
        effect: NavEffect::None,
        prevent_default: false,
    };

    fn arrow(effect: NavEffect) -> Self {
        Transition {
            effect,
            prevent_default: true,
        }
    }
}

/// Focus state machine. One per widget, lives for the page session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    state: FocusState,
    list: RenderedList,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn list(&self) -> RenderedList {
        self.list
    }

    pub fn results_available(&self) -> bool {
        !self.list.is_empty()
    }

    /// A new list is on screen: old link indices are meaningless now.
    pub fn on_render(&mut self, list: RenderedList) {
        self.list = list;
        self.state = FocusState::Input;
    }

    /// Back to the initial state: no results, focus on the input.
    pub fn reset(&mut self) {
        self.on_render(RenderedList::default());
    }

    /// Apply one key press.
    pub fn handle(&mut self, key: Key) -> Transition {
        if key == Key::Escape {
            self.reset();
            return Transition {
                effect: NavEffect::Reset,
                prevent_default: false,
            };
        }
        let Some(last) = self.list.last() else {
            return Transition::IGNORED;
        };

        match (key, self.state) {
            (Key::ArrowDown, FocusState::Input) => self.enter(0),
            (Key::ArrowDown, FocusState::ResultLink(i)) if i < last => self.enter(i + 1),
            (Key::ArrowDown, FocusState::ResultLink(_)) => Transition::arrow(NavEffect::None),

            (Key::ArrowUp, FocusState::Input) => Transition::arrow(NavEffect::None),
            (Key::ArrowUp, FocusState::ResultLink(0)) => {
                self.state = FocusState::Input;
                Transition::arrow(NavEffect::FocusInput)
            }
            (Key::ArrowUp, FocusState::ResultLink(i)) => self.enter(i - 1),

            (Key::ArrowRight, FocusState::ResultLink(i)) => Transition {
                effect: NavEffect::Activate(i),
                prevent_default: false,
            },

            _ => Transition::IGNORED,
        }
    }

    fn enter(&mut self, index: usize) -> Transition {
        self.state = FocusState::ResultLink(index);
        Transition::arrow(NavEffect::FocusLink(index))
    }
}
