//! The Brand Audit Report — the second prompt family's output contract.
//!
//! Same relaxation policy as the evaluation schema: sections the prompt
//! enumerates field-by-field (SWOT buckets, the eight dimensions, Porter's
//! five forces, the conclusion) are strict records; open-ended content
//! (platform ratings, discovered competitors, risks, sources) is relaxed.
//! Numeric-looking fields the model renders inconsistently (ratings, review
//! counts) are kept as opaque values rather than failing the whole report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::Flexible;

/// The eight audit dimension names fixed by the prompt contract.
pub const AUDIT_DIMENSION_NAMES: [&str; 8] = [
    "Heritage & Authenticity",
    "Customer Satisfaction",
    "Market Positioning",
    "Growth Trajectory",
    "Operational Excellence",
    "Brand Awareness",
    "Financial Viability",
    "Digital Presence",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalAuditVerdict {
    #[serde(rename = "STRONG")]
    Strong,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "WEAK")]
    Weak,
    #[serde(rename = "CRITICAL")]
    Critical,
}

/// Audit verdict label, relaxed like the evaluation verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditVerdict {
    Canonical(CanonicalAuditVerdict),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortersFiveForces {
    pub new_entrants_threat: String,
    pub supplier_power: String,
    pub buyer_power: String,
    pub substitutes_threat: String,
    pub competitive_rivalry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketLandscape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tam: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cagr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_intensity: Option<String>,
    pub porters_five_forces: PortersFiveForces,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPyramid {
    pub functional: String,
    pub emotional: String,
    pub aspirational: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandEquity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_narrative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning_strategy: Option<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub differentiation_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_pyramid: Option<BrandPyramid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPerformance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_economics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// A per-platform rating claim. Ratings and review counts drift between
/// numbers and strings ("4.2" vs 4.2 vs "~400 reviews"), so both stay opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRating {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTheme {
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPerception {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<Value>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub platform_ratings: Vec<Flexible<PlatformRating>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_vs_competitors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_ratings: Option<Value>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub positive_themes: Vec<Flexible<ReviewTheme>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub negative_themes: Vec<Flexible<ReviewTheme>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub key_strengths: Vec<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub key_concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwotPoint {
    pub point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// The four SWOT buckets. Required as a section, but individual entries may
/// degrade to bare strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<Flexible<SwotPoint>>,
    pub weaknesses: Vec<Flexible<SwotPoint>>,
    pub opportunities: Vec<Flexible<SwotPoint>>,
    pub threats: Vec<Flexible<SwotPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDimension {
    pub name: String,
    pub score: f64,
    pub reasoning: String,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub implementation_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_outcome: Option<String>,
}

/// Recommendations split by horizon: 0–12 months, 12–24 months, 3–5 years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRoadmap {
    pub immediate: Vec<Flexible<ActionPlan>>,
    pub medium_term: Vec<Flexible<ActionPlan>>,
    pub long_term: Vec<Flexible<ActionPlan>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditCompetitor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlets: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_share: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_followers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_weakness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    pub summary: String,
    pub final_rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_justification: Option<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub key_risks: Vec<String>,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_forward: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_queries_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_confidence: Option<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub report_limitations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implied_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_multiple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebitda_multiple: Option<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub comparable_companies: Vec<String>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub key_value_drivers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_year_outlook: Option<String>,
}

/// Full audit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// 0–100.
    pub overall_score: f64,
    /// A+ through F; free text because models invent intermediate grades.
    pub rating: String,
    pub verdict: AuditVerdict,
    pub executive_summary: String,
    pub investment_thesis: String,
    pub market_landscape: MarketLandscape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_equity: Option<BrandEquity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_performance: Option<FinancialPerformance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_perception: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_perception_analysis: Option<CustomerPerception>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_positioning: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_overview: Option<Value>,
    pub swot: Swot,
    pub dimensions: Vec<AuditDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<Valuation>,
    pub recommendations: RecommendationRoadmap,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub risks: Vec<Flexible<RiskItem>>,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub competitors: Vec<Flexible<AuditCompetitor>>,
    pub conclusion: Conclusion,
    #[serde(default, deserialize_with = "crate::schema::null_as_empty")]
    pub sources: Vec<Flexible<SourceRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AuditMetadata>,
}
