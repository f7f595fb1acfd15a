//! The Brand Evaluation Result — one record per evaluation request, built
//! once from one raw JSON payload and never mutated.
//!
//! Required fields here are exactly the fields every prompt revision has
//! demanded; fields introduced by later revisions (`trademark_classes`,
//! `multi_domain_availability`, `social_availability`, `alternative_names`,
//! the visibility buckets) are optional with safe defaults so older-shaped
//! output remains valid. A schema revision must never make a
//! previously-optional field required without a default.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::schema::Flexible;

/// The six dimension names fixed by the prompt contract. The validator does
/// not enforce completeness or uniqueness of the set — the contract lives in
/// the prompt, the names live here for callers that want to cross-check.
pub const DIMENSION_NAMES: [&str; 6] = [
    "Brand Distinctiveness & Memorability",
    "Cultural & Linguistic Resonance",
    "Premiumisation & Trust Curve",
    "Scalability & Brand Architecture",
    "Trademark & Legal Sensitivity",
    "Consumer Perception Mapping",
];

/// The four canonical verdict labels, wire-spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalVerdict {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "CONDITIONAL GO")]
    ConditionalGo,
    #[serde(rename = "NO-GO")]
    NoGo,
    #[serde(rename = "REJECT")]
    Reject,
}

/// Model-assigned recommendation label.
///
/// The prompt declares a closed set, but the model drifts ("GO with
/// Caution"), so this is a sum type with a free-text fallback rather than a
/// closed enum. Callers must not assume canonical semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verdict {
    Canonical(CanonicalVerdict),
    Other(String),
}

impl Verdict {
    pub fn is_canonical(&self) -> bool {
        matches!(self, Verdict::Canonical(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Canonical(CanonicalVerdict::Go) => "GO",
            Verdict::Canonical(CanonicalVerdict::ConditionalGo) => "CONDITIONAL GO",
            Verdict::Canonical(CanonicalVerdict::NoGo) => "NO-GO",
            Verdict::Canonical(CanonicalVerdict::Reject) => "REJECT",
            Verdict::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskZone {
    Green,
    Yellow,
    Red,
}

/// Qualitative risk zone tag; drift-prone, so relaxed like [`Verdict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZoneTag {
    Known(RiskZone),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkRiskRow {
    pub likelihood: i64,
    pub severity: i64,
    pub zone: ZoneTag,
    pub commentary: String,
}

/// The five fixed risk rows plus an overall narrative. Strict: the prompt
/// enumerates these field-by-field, so the structure is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkRiskMatrix {
    pub genericness: TrademarkRiskRow,
    pub existing_conflicts: TrademarkRiskRow,
    pub phonetic_similarity: TrademarkRiskRow,
    pub relevant_classes: TrademarkRiskRow,
    pub rebranding_probability: TrademarkRiskRow,
    pub overall_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAnalysis {
    pub exact_match_status: String,
    pub alternatives: Vec<HashMap<String, String>>,
    pub strategy_note: String,
}

/// One checked domain with the model's availability opinion. Opinions only —
/// nothing here is verified against a registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCheck {
    pub domain: String,
    pub status: String,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleCheck {
    pub platform: String,
    pub handle: String,
    pub status: String,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub alternatives: Vec<String>,
}

/// NICE classification entry (1–45) the model believes is relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkClass {
    pub class_number: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeName {
    pub name: String,
    pub rationale: String,
}

/// An externally discovered same-named entity, as classified by the model.
/// Both visibility buckets share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_overlap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Two-way classification of discovered entities.
///
/// `direct_competitors` (same product intent AND overlapping customer
/// segment — fatal) vs `name_twins` (keyword overlap only — non-fatal). The
/// classification judgment is the model's; this crate guarantees only that
/// both buckets are well-typed lists of the same item shape. A misclassified
/// entity (say, `customer_overlap: "NONE"` filed under direct competitors)
/// passes validation — catching that is a review concern, not a schema one.
///
/// The legacy presence lists predate the bucket split and are kept so
/// older-shaped output stays valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityAnalysis {
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub direct_competitors: Vec<Flexible<DiscoveredEntity>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub name_twins: Vec<Flexible<DiscoveredEntity>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub google_presence: Vec<Value>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub app_store_presence: Vec<Value>,
    #[serde(default)]
    pub warning_triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryAnalysis {
    pub country: String,
    pub cultural_resonance_score: f64,
    pub cultural_notes: String,
    pub linguistic_check: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub positioning: String,
    pub price_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub competitors: Vec<Competitor>,
    pub white_space_analysis: String,
    pub strategic_advantage: String,
    pub suggested_pricing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAssessment {
    pub verdict_statement: String,
    pub suitability_score: f64,
    pub dimension_breakdown: Vec<HashMap<String, f64>>,
    pub recommendations: Vec<Recommendation>,
    pub alternative_path: String,
}

/// Per-brand evaluation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandScore {
    pub brand_name: String,
    /// Composite score, 0–100.
    pub namescore: f64,
    pub verdict: Verdict,
    pub summary: String,
    pub strategic_classification: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub dimensions: Vec<DimensionScore>,
    /// Legacy free-form risk summary; shape never stabilized across
    /// revisions, so it stays an opaque value.
    pub trademark_risk: Value,
    pub trademark_matrix: TrademarkRiskMatrix,
    pub domain_analysis: DomainAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_analysis: Option<VisibilityAnalysis>,
    pub cultural_analysis: Vec<CountryAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_assessment: Option<FinalAssessment>,
    pub positioning_fit: String,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub trademark_classes: Vec<Flexible<TrademarkClass>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub multi_domain_availability: Vec<Flexible<DomainCheck>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub social_availability: Vec<Flexible<HandleCheck>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub alternative_names: Vec<Flexible<AlternativeName>>,
}

/// Top-level evaluation response.
///
/// `comparison_verdict` is absent for single-brand requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Bounded by the prompt at 100 words; not enforced here.
    pub executive_summary: String,
    pub brand_scores: Vec<BrandScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_verdict: Option<String>,
}
