//! Associates free-text concerns with structured key terms.
//!
//! Concerns arrive as prose ("No reversion clause present") with no explicit
//! link to the key term they grew out of. The associator bridges that gap by
//! keyword overlap so a concern can borrow its term's risk level and source
//! excerpt. Many concerns are high-level and match nothing; that is a valid
//! state, not an error.

use crate::analysis::{KeyTerm, RiskLevel};

/// Risk displayed for a concern that matched no key term.
///
/// Deliberately `Medium` rather than `Low`: an untraceable concern must not
/// silently suppress a warning badge.
pub const UNMATCHED_CONCERN_RISK: RiskLevel = RiskLevel::Medium;

/// Concern tokens at or below this length are ignored as function words.
const MAX_STOPWORD_LEN: usize = 4;

/// Find the key term a concern most plausibly refers to.
///
/// A term is a candidate when any concern keyword (token longer than four
/// characters, lowercased) appears as a substring of the term's lowercased
/// title or content. The *first* candidate in list order wins - ties are
/// not re-ranked by overlap count, so identical inputs always produce the
/// identical term and the upstream service's risk-sorted ordering is
/// respected.
pub fn associate_concern<'a>(concern: &str, key_terms: &'a [KeyTerm]) -> Option<&'a KeyTerm> {
    let lowered = concern.to_lowercase();
    let keywords: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| word.len() > MAX_STOPWORD_LEN)
        .collect();
    if keywords.is_empty() {
        return None;
    }

    key_terms.iter().find(|term| {
        let title = term.title.to_lowercase();
        let content = term.content.to_lowercase();
        keywords
            .iter()
            .any(|kw| title.contains(kw) || content.contains(kw))
    })
}

/// Risk level to display for a concern: the associated term's level, or
/// [`UNMATCHED_CONCERN_RISK`] when nothing matches.
pub fn concern_risk(concern: &str, key_terms: &[KeyTerm]) -> RiskLevel {
    associate_concern(concern, key_terms)
        .map(|term| term.risk_level)
        .unwrap_or(UNMATCHED_CONCERN_RISK)
}

/// Overall severity badge for a group of concerns.
///
/// Any high makes the group high, else any medium makes it medium, else
/// low. Unmatched concerns contribute an implicit medium via
/// [`concern_risk`]. An empty group is low.
pub fn aggregate_concern_risk(concerns: &[String], key_terms: &[KeyTerm]) -> RiskLevel {
    concerns
        .iter()
        .map(|concern| concern_risk(concern, key_terms))
        .max()
        .unwrap_or(RiskLevel::Low)
}
