//! Enum normalization layer
//!
//! Converts the server's heterogeneous categorical values into the coded
//! enum domains. Numeric codes pass through when valid; label strings match
//! case-insensitively; anything unrecognized falls back to the domain
//! default. The fallback is a deliberate leniency policy so malformed
//! upstream data never blocks hydration — but it is reported through the
//! `defaulted` flag (and a warn log) instead of being masked entirely.

use shared::enums::{BenefitType, CodedEnum};
use shared::types::CodeOrLabel;
use std::collections::BTreeSet;

/// A normalized value plus whether the fallback default was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Normalized<T> {
    fn exact(value: T) -> Self {
        Self { value, defaulted: false }
    }

    fn fallback(value: T) -> Self {
        Self { value, defaulted: true }
    }
}

/// Normalize a raw categorical value into domain `E`
///
/// Absent input null-coalesces to the default without being flagged; only
/// a present-but-unrecognized value counts as defaulted.
pub fn normalize<E: CodedEnum>(raw: Option<&CodeOrLabel>) -> Normalized<E> {
    match raw {
        None => Normalized::exact(E::FALLBACK),
        Some(CodeOrLabel::Code(code)) => match E::from_code(*code) {
            Some(value) => Normalized::exact(value),
            None => {
                tracing::warn!(domain = E::DOMAIN, code, "unrecognized enum code, using fallback");
                Normalized::fallback(E::FALLBACK)
            }
        },
        Some(CodeOrLabel::Label(label)) => match E::from_label(label) {
            Some(value) => Normalized::exact(value),
            None => {
                tracing::warn!(domain = E::DOMAIN, label = %label, "unrecognized enum label, using fallback");
                Normalized::fallback(E::FALLBACK)
            }
        },
    }
}

/// Normalize a raw benefit-type list element-wise
///
/// Each array element goes through the same code/label rules; non-array
/// input (including a bare string) yields the empty set and is flagged.
pub fn normalize_benefits(raw: Option<&serde_json::Value>) -> Normalized<BTreeSet<BenefitType>> {
    let Some(value) = raw else {
        return Normalized::exact(BTreeSet::new());
    };

    match value {
        serde_json::Value::Null => Normalized::exact(BTreeSet::new()),
        serde_json::Value::Array(items) => {
            let mut set = BTreeSet::new();
            let mut defaulted = false;
            for item in items {
                let element = match item {
                    serde_json::Value::Number(n) => n.as_i64().map(CodeOrLabel::Code),
                    serde_json::Value::String(s) => Some(CodeOrLabel::Label(s.clone())),
                    _ => None,
                };
                let normalized = normalize::<BenefitType>(element.as_ref());
                defaulted |= normalized.defaulted || element.is_none();
                set.insert(normalized.value);
            }
            Normalized { value: set, defaulted }
        }
        other => {
            tracing::warn!(value = %other, "benefit types not an array, treating as empty");
            Normalized::fallback(BTreeSet::new())
        }
    }
}
