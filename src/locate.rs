//! Best-effort span location of AI-produced excerpts in the source document.
//!
//! The analysis service hands back short excerpts ("needles") that are
//! supposed to appear in the extracted document text, but extraction and
//! model paraphrasing introduce enough noise that a literal substring search
//! frequently fails. The locator degrades gracefully:
//!
//! 1. Exact match of the normalized needle in the normalized haystack.
//! 2. Descending word-prefix search (8 words down to 3, short tokens
//!    dropped) of the normalized needle.
//! 3. No match - a valid outcome the caller renders as "no highlight".
//!
//! Offsets found in normalized space are mapped back to the raw document via
//! a length ratio. Normalization is not length-linear (whitespace collapse
//! is N:1) so the mapping is approximate; the consumer scrolls a viewer to a
//! region, not to a byte, and the widened match window absorbs the drift.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_for_match;

/// Extra characters appended past an exact match so the highlight carries
/// trailing context (the needle is often a truncated excerpt).
const EXACT_MATCH_PADDING: usize = 50;

/// Upper bound on the highlight window for an exact match.
const MAX_HIGHLIGHT_LEN: usize = 300;

/// Highlight window for a word-prefix fallback match, where the true extent
/// of the matched clause is unknown.
const FALLBACK_HIGHLIGHT_LEN: usize = 200;

/// Longest word-prefix attempted by the fallback.
const MAX_PREFIX_WORDS: usize = 8;

/// Shortest word-prefix attempted. Three meaningful words is the floor;
/// below that the search starts hitting unrelated boilerplate ("the parties
/// agree").
const MIN_PREFIX_WORDS: usize = 3;

/// Tokens at or below this length are discarded before the prefix search.
const MAX_NOISE_TOKEN_LEN: usize = 3;

/// Which strategy produced a [`MatchSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// The whole normalized needle was found verbatim.
    Exact,
    /// Only a prefix of the needle's meaningful words was found.
    WordPrefix {
        /// How many words of the prefix matched.
        words: usize,
    },
}

/// A byte range into the raw document text, for the viewer to scroll to and
/// highlight.
///
/// Always in bounds: `start + length <= document.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub length: usize,
    /// How this span was found; fallback matches are less precise.
    pub strategy: MatchStrategy,
}

impl MatchSpan {
    /// One past the last byte of the span.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Locate `needle` inside `haystack`, returning the best-effort span in the
/// raw (un-normalized) haystack.
///
/// Returns `None` when the needle cannot be traced into the document. That
/// is an expected, common outcome - never an error - and the caller must
/// degrade to an unhighlighted view.
pub fn locate_span(needle: &str, haystack: &str) -> Option<MatchSpan> {
    let norm_needle = normalize_for_match(needle);
    let norm_haystack = normalize_for_match(haystack);
    if norm_needle.is_empty() || norm_haystack.is_empty() {
        return None;
    }

    // Normalization only shrinks, so ratio >= 1. Scaling a normalized index
    // by it lands at or past the raw position, close enough for a viewer.
    let ratio = haystack.len() as f64 / norm_haystack.len() as f64;

    if let Some(idx) = norm_haystack.find(&norm_needle) {
        let start = back_map(idx, ratio, haystack.len());
        let length = (needle.len() + EXACT_MATCH_PADDING)
            .min(MAX_HIGHLIGHT_LEN)
            .min(haystack.len() - start);
        return Some(MatchSpan {
            start,
            length,
            strategy: MatchStrategy::Exact,
        });
    }

    locate_by_word_prefix(&norm_needle, &norm_haystack, ratio, haystack.len())
}

/// Fallback: search for a prefix of the needle's meaningful words, longest
/// first, so a paraphrased or truncated tail does not sink the whole match.
fn locate_by_word_prefix(
    norm_needle: &str,
    norm_haystack: &str,
    ratio: f64,
    raw_len: usize,
) -> Option<MatchSpan> {
    let words: Vec<&str> = norm_needle
        .split_whitespace()
        .filter(|w| w.len() > MAX_NOISE_TOKEN_LEN)
        .collect();
    if words.len() < MIN_PREFIX_WORDS {
        return None;
    }

    let mut count = MAX_PREFIX_WORDS.min(words.len());
    while count >= MIN_PREFIX_WORDS {
        let phrase = words[..count].join(" ");
        if let Some(idx) = norm_haystack.find(&phrase) {
            let start = back_map(idx, ratio, raw_len);
            let length = FALLBACK_HIGHLIGHT_LEN.min(raw_len - start);
            return Some(MatchSpan {
                start,
                length,
                strategy: MatchStrategy::WordPrefix { words: count },
            });
        }
        count -= 1;
    }

    None
}

/// Map an index in normalized space back into the raw haystack, clamped so
/// downstream arithmetic can never leave the document.
fn back_map(norm_idx: usize, ratio: f64, raw_len: usize) -> usize {
    let start = (norm_idx as f64 * ratio).floor() as usize;
    start.min(raw_len.saturating_sub(1))
}
