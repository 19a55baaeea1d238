//! Click-path glue shared by every view that drives the document viewer.
//!
//! Each dashboard surface used to re-derive this chain inline: pick a
//! needle for the thing the user clicked, locate it, hand the span to the
//! viewer. Factored here so there is exactly one definition of "what gets
//! highlighted".

use crate::analysis::{ContractAnalysis, KeyTerm};
use crate::associate::associate_concern;
use crate::locate::{locate_span, MatchSpan};

/// Span to highlight when the user clicks a key term.
///
/// `None` when the term carries no source excerpt or the excerpt cannot be
/// traced into the document; the viewer keeps its current position.
pub fn term_highlight_span(term: &KeyTerm, document_text: &str) -> Option<MatchSpan> {
    let needle = term.original_text.as_deref()?;
    locate_span(needle, document_text)
}

/// Span to highlight when the user clicks the concern at `index`.
///
/// Needle resolution order: the service's positional snippet for that
/// concern, else the source excerpt of the key term the concern associates
/// with. Either may be missing, and the resolved needle may still not be
/// locatable - both degrade to `None`.
pub fn concern_highlight_span(
    analysis: &ContractAnalysis,
    index: usize,
    document_text: &str,
) -> Option<MatchSpan> {
    let concern = analysis.potential_concerns.get(index)?;

    let needle = analysis.concern_snippet(index).or_else(|| {
        associate_concern(concern, &analysis.key_terms)
            .and_then(|term| term.original_text.as_deref())
    })?;

    locate_span(needle, document_text)
}
