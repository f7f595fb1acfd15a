//! Typed mirror of the prompt contracts.
//!
//! The split between strict and relaxed typing is deliberate (it is the one
//! real policy in this crate): structure the prompt enumerates exhaustively —
//! the six dimensions, the five trademark-matrix rows, the SWOT buckets —
//! stays strict nested records, while inherently open-ended structure
//! (discovered competitors, risk commentary, platform ratings) is typed as an
//! explicit sum so that format drift from the model degrades to a raw-text
//! variant instead of failing the whole report.

pub mod audit;
pub mod evaluation;
pub mod request;
pub mod version;

use serde::{Deserialize, Deserializer, Serialize};

/// A list entry the model may render either as the structured record the
/// prompt asks for, or as a bare string. Kept as a sum type — not flattened
/// to `Value` — so downstream consumers can still tell the two cases apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flexible<T> {
    Structured(T),
    Text(String),
}

impl<T> Flexible<T> {
    pub fn as_structured(&self) -> Option<&T> {
        match self {
            Flexible::Structured(t) => Some(t),
            Flexible::Text(_) => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Flexible::Structured(_))
    }
}

/// Deserializer for defaulted list fields. The model emits an explicit
/// `null` and a missing field interchangeably; `#[serde(default)]` alone only
/// covers omission, so `null` is mapped to the empty list here.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::evaluation::AlternativeName;

    #[test]
    fn test_flexible_parses_structured_variant() {
        let json = r#"{"name": "Lumen", "rationale": "short, ownable"}"#;
        let entry: Flexible<AlternativeName> = serde_json::from_str(json).unwrap();
        assert!(entry.is_structured());
        assert_eq!(entry.as_structured().unwrap().name, "Lumen");
    }

    #[test]
    fn test_flexible_falls_back_to_text() {
        let entry: Flexible<AlternativeName> = serde_json::from_str(r#""Lumen""#).unwrap();
        assert_eq!(entry, Flexible::Text("Lumen".to_string()));
        assert!(entry.as_structured().is_none());
    }
}
