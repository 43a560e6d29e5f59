// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fastsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FASTSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and non-TTY output (pipes get plain text).

use fastsearch::{FocusState, Snippet};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FASTSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to `max` visible characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{border}│{reset}{content}{}{border}│{reset}", " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{border}┌{reset}{label_part}{border}{}┐{reset}",
        "─".repeat(remaining)
    );
}

/// └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{border}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One snippet as `...before[match]after...`, match underlined in color.
pub fn snippet_line(snippet: &Snippet) -> String {
    let matched = if use_colors() {
        themed(YELLOW, &[BOLD, UNDERLINE], &snippet.matched)
    } else {
        format!("[{}]", snippet.matched)
    };
    format!(
        "...{}{}{}...",
        flatten(&snippet.before),
        matched,
        flatten(&snippet.after)
    )
}

/// Newlines and tabs inside a snippet would break the box.
fn flatten(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Match score, lower is better (green = exact, red = barely within threshold)
pub fn score_value(score: Option<f64>) -> String {
    let Some(score) = score else {
        return themed(GRAY, &[], "    -");
    };
    let text = format!("{:>5.3}", score);
    if score == 0.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score < 0.2 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

pub fn focus_label(state: FocusState) -> String {
    match state {
        FocusState::Input => themed(BLUE, &[BOLD], "Input"),
        FocusState::ResultLink(i) => themed(GREEN, &[BOLD], &format!("ResultLink({})", i)),
    }
}
