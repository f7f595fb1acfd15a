//! Input types: evaluation/audit requests and the pre-fetched research bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted for any absent research phase. The builders never
/// fail on missing input; the prompt contract requires this exact literal.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Market positioning tier. Wire spelling matches the prompt contract
/// (`"Ultra-Premium"` with the hyphen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Positioning {
    Mass,
    Premium,
    #[serde(rename = "Ultra-Premium")]
    UltraPremium,
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Positioning::Mass => "Mass",
            Positioning::Premium => "Premium",
            Positioning::UltraPremium => "Ultra-Premium",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketScope {
    #[serde(rename = "Single Country")]
    SingleCountry,
    #[serde(rename = "Multi-Country")]
    MultiCountry,
    Global,
}

impl fmt::Display for MarketScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarketScope::SingleCountry => "Single Country",
            MarketScope::MultiCountry => "Multi-Country",
            MarketScope::Global => "Global",
        })
    }
}

/// A request to evaluate one or more candidate brand names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub brand_names: Vec<String>,
    pub category: String,
    pub positioning: Positioning,
    pub market_scope: MarketScope,
    pub countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_vibe: Option<String>,
}

/// A request to audit an existing brand against named competitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub brand_name: String,
    pub brand_website: String,
    pub competitors: Vec<String>,
    pub category: String,
    pub geography: String,
}

/// Pre-fetched external research, opaque to this crate. Up to five free-text
/// phases, each independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchBundle {
    pub phase1: Option<String>,
    pub phase2: Option<String>,
    pub phase3: Option<String>,
    pub phase4: Option<String>,
    pub phase5: Option<String>,
}

impl ResearchBundle {
    /// Returns the text of phase `n` (1-based), or the fixed placeholder.
    pub fn phase(&self, n: usize) -> &str {
        let phase = match n {
            1 => self.phase1.as_deref(),
            2 => self.phase2.as_deref(),
            3 => self.phase3.as_deref(),
            4 => self.phase4.as_deref(),
            5 => self.phase5.as_deref(),
            _ => None,
        };
        phase.unwrap_or(NO_DATA_PLACEHOLDER)
    }

    pub fn is_empty(&self) -> bool {
        self.phase1.is_none()
            && self.phase2.is_none()
            && self.phase3.is_none()
            && self.phase4.is_none()
            && self.phase5.is_none()
    }
}
