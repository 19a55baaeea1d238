//! Inline emphasis of quantities in short display strings.
//!
//! Summary cards render strings like "15% of net receipts for 5 years" and
//! emphasize the numbers a reader scans for. This module splits such a
//! string into alternating literal and key-value segments. It operates on
//! the already-short display text, not the full document, so there is no
//! offset-mapping concern here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spelled-out quantities accepted in durations ("five years",
/// "twenty-four months").
const SPELLED_NUMBER: &str = "one|two|three|four|five|six|seven|eight|nine|ten\
|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen\
|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety";

const MONTH: &str = "january|february|march|april|may|june|july|august\
|september|october|november|december";

/// Fixed-priority alternation over quantity shapes. Branch order is the
/// recognition priority: percentages, dollar amounts, durations, month-day
/// dates (either order), ordinals, comma-grouped numbers.
static KEY_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    let branches = [
        // Percentages: "15%", "2.5 %"
        r"\d+(?:\.\d+)?\s?%".to_string(),
        // Dollar amounts with optional scale suffix: "$500", "$2.5 million", "$10k"
        r"\$\s?\d+(?:,\d{3})*(?:\.\d+)?(?:\s?(?:million|billion|thousand|[kmb]))?\b".to_string(),
        // Durations, numeric or spelled out, with the "five (5) years" doubling
        format!(
            r"\b(?:\d+|(?:{s})(?:-(?:{s}))?)\s(?:\(\d+\)\s)?(?:year|month|week|day|hour)s?\b",
            s = SPELLED_NUMBER
        ),
        // Month-day pairs, either order: "January 15", "15th of January"
        format!(r"\b(?:{m})\s\d{{1,2}}(?:st|nd|rd|th)?\b", m = MONTH),
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s(?:of\s)?(?:{m})\b", m = MONTH),
        // Ordinals: "3rd", "21st"
        r"\b\d+(?:st|nd|rd|th)\b".to_string(),
        // Numbers with grouping commas: "10,000"
        r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b".to_string(),
    ];
    let pattern = format!("(?i){}", branches.join("|"));
    Regex::new(&pattern).expect("Invalid key-value regex")
});

/// One piece of a display string after key-value splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    /// Plain text rendered without emphasis.
    Literal(String),
    /// A recognized quantity to render emphasized.
    KeyValue(String),
}

impl DisplaySegment {
    /// The segment's text regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            DisplaySegment::Literal(text) | DisplaySegment::KeyValue(text) => text,
        }
    }

    pub fn is_key_value(&self) -> bool {
        matches!(self, DisplaySegment::KeyValue(_))
    }
}

/// Split a display string into alternating literal and key-value segments.
///
/// Concatenating the segment texts reproduces the input exactly. A string
/// with no recognizable quantities comes back as a single literal segment;
/// an empty string comes back empty.
pub fn split_key_values(text: &str) -> Vec<DisplaySegment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in KEY_VALUE_RE.find_iter(text) {
        if found.start() > last_end {
            segments.push(DisplaySegment::Literal(
                text[last_end..found.start()].to_string(),
            ));
        }
        segments.push(DisplaySegment::KeyValue(found.as_str().to_string()));
        last_end = found.end();
    }

    if last_end < text.len() {
        segments.push(DisplaySegment::Literal(text[last_end..].to_string()));
    }

    segments
}
