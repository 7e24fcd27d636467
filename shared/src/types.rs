//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Raw categorical value as the server sends it
///
/// Older API versions return human-readable labels ("Married") where newer
/// ones return numeric codes (2). Record fields accept either shape; the
/// intake normalization layer maps both into the coded enum domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeOrLabel {
    /// Numeric enum code
    Code(i64),
    /// Human-readable label, matched case-insensitively
    Label(String),
}

impl From<i64> for CodeOrLabel {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for CodeOrLabel {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for CodeOrLabel {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}
