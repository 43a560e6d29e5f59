//! Utility functions for string processing.
//!
//! Every offset in this crate counts Unicode scalar values, not bytes, so it
//! lines up with the character offsets the page works in.

/// Characters of `text` in `[start, end)`, clamped to the string bounds.
///
/// Never panics: out-of-range or inverted bounds produce a shorter (possibly
/// empty) slice.
pub fn char_slice(text: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}

/// Fold a string for comparison.
///
/// Lowercases per character so offsets into the folded string map 1:1 onto
/// the original. (`str::to_lowercase` can change the character count, e.g.
/// `İ` becomes two characters.)
pub fn fold_chars(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect()
    }
}

/// Character length of `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
