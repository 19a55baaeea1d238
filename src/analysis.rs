//! Typed read-side of the upstream analysis service contract.
//!
//! The analysis service turns raw document bytes into a structured record of
//! key terms, free-text concerns, and (optionally) positional concern
//! snippets. The service speaks camelCase JSON; this module owns the serde
//! mapping so every consumer shares one definition instead of re-declaring
//! the shape per view.

use serde::{Deserialize, Serialize};

/// Risk classification assigned by the analysis service.
///
/// Variants are ordered by severity (`Low < Medium < High`) so that
/// aggregating a group of concerns is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One structured provision extracted from the contract.
///
/// Read-only to this crate: the associator only ever hands back references
/// to terms it was given, never synthesized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    /// Short heading, e.g. "Rights Reversion".
    pub title: String,
    /// The term as the service restated it.
    pub content: String,
    /// Plain-language explanation for the reader.
    pub explanation: String,
    pub risk_level: RiskLevel,
    /// Verbatim (or near-verbatim) excerpt from the document, when the
    /// service could trace the term back to its source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<String>>,
}

/// The full analysis record returned by the service for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub key_terms: Vec<KeyTerm>,
    /// Free-text risk descriptions, typically pre-sorted by severity.
    pub potential_concerns: Vec<String>,
    /// Positional snippets parallel to `potential_concerns`. May be absent
    /// or shorter than the concern list; an empty string means the service
    /// could not trace that concern to the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern_snippets: Option<Vec<String>>,
}

impl ContractAnalysis {
    /// Import a record from the service's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The snippet supplied for the concern at `index`, if the service
    /// provided a non-empty one.
    pub fn concern_snippet(&self, index: usize) -> Option<&str> {
        self.concern_snippets
            .as_ref()
            .and_then(|snippets| snippets.get(index))
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}
