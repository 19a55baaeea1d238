//! Text normalization for robust needle/haystack comparison.
//!
//! Upstream extraction introduces noise that defeats naive substring search:
//! smart quotes from word processors, case drift, and arbitrary whitespace
//! (newlines, tabs, runs of spaces) from PDF text extraction. Matching is
//! always performed on the normalized form produced here.

/// Produce the canonical comparison form of a string.
///
/// - Lowercases.
/// - Replaces curly single quotes (U+2018, U+2019) with `'`.
/// - Replaces curly double quotes (U+201C, U+201D) with `"`.
/// - Collapses every whitespace run (spaces, tabs, newlines) to one space.
/// - Trims leading and trailing whitespace.
///
/// The output is never longer than the input: quote substitution is 1:1 and
/// whitespace collapse only shrinks. That monotonicity is what makes the
/// ratio-based offset back-mapping in [`crate::locate_span`] workable.
pub fn normalize_for_match(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            // Leading whitespace is dropped outright; interior runs become
            // a single space emitted lazily before the next visible char.
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match ch {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            c => {
                for lower in c.to_lowercase() {
                    out.push(lower);
                }
            }
        }
    }

    out
}
