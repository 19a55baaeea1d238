//! Clause-to-document alignment for contract analysis viewers.
//!
//! An external analysis service turns an uploaded contract into a structured
//! record of key terms and free-text concerns. This crate implements the
//! deterministic core that sits between that record and the document viewer:
//!
//! - [`normalize_for_match`] - canonical comparison form (case, smart
//!   quotes, whitespace) that tolerates extraction noise
//! - [`locate_span`] - best-effort `{start, length}` span of an AI-produced
//!   excerpt inside the full document text, degrading from exact match to
//!   word-prefix search to "not found"
//! - [`associate_concern`] - keyword-overlap association of a concern with
//!   the key term it grew out of, so the concern can borrow the term's risk
//!   level and source excerpt
//! - [`split_key_values`] - inline emphasis of quantities ("15%",
//!   "$2.5 million", "five (5) years") in short display strings
//! - [`term_highlight_span`] / [`concern_highlight_span`] - the shared
//!   click-to-highlight path every view calls instead of re-deriving it
//!
//! Everything is a synchronous pure function over in-memory strings. "Not
//! found" is an expected outcome throughout, never an error: the viewer
//! simply leaves its highlight unchanged.
//!
//! ## Example
//!
//! ```
//! use clause_align::locate_span;
//!
//! let document = "The Artist shall receive 15% of Net Receipts.";
//! let span = locate_span("receive 15% of Net Receipts", document).unwrap();
//! assert_eq!(span.start, 17);
//! ```

mod analysis;
mod associate;
mod highlight;
mod locate;
mod normalize;
mod resolve;

pub use analysis::{ContractAnalysis, KeyTerm, RiskLevel};
pub use associate::{
    aggregate_concern_risk, associate_concern, concern_risk, UNMATCHED_CONCERN_RISK,
};
pub use highlight::{split_key_values, DisplaySegment};
pub use locate::{locate_span, MatchSpan, MatchStrategy};
pub use normalize::normalize_for_match;
pub use resolve::{concern_highlight_span, term_highlight_span};

#[cfg(test)]
mod tests {
    mod associate;
    mod highlight;
    mod locate;
    mod resolve;
}
