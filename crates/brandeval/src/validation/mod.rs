//! Validation/coercion layer: raw parsed JSON in, validated typed report out.
//!
//! Two passes. The structural precheck walks the raw value against the
//! required-field table and fails with a field-path-qualified error
//! (`brand_scores[0].dimensions`), because serde's own errors don't carry
//! paths. Typed coercion then applies the relaxations and defaults declared
//! in [`crate::schema`]. All-or-nothing: if a required field is absent or
//! mistyped after relaxation, the whole response is rejected — there is no
//! partial-acceptance mode, and this layer never retries the model.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::EvalError;
use crate::schema::audit::AuditReport;
use crate::schema::evaluation::EvaluationResponse;

/// Validates a raw model response against the evaluation schema.
pub fn validate_evaluation(raw: Value) -> Result<EvaluationResponse, EvalError> {
    check_evaluation(&raw)?;
    let response: EvaluationResponse = serde_json::from_value(raw)
        .map_err(|e| EvalError::at("$", e.to_string()))?;
    debug!(
        "Evaluation response validated: {} brand score(s)",
        response.brand_scores.len()
    );
    Ok(response)
}

/// Validates a raw model response against the audit schema.
pub fn validate_audit(raw: Value) -> Result<AuditReport, EvalError> {
    check_audit(&raw)?;
    let report: AuditReport =
        serde_json::from_value(raw).map_err(|e| EvalError::at("$", e.to_string()))?;
    debug!(
        "Audit report validated: overall_score={}",
        report.overall_score
    );
    Ok(report)
}

// ────────────────────────────────────────────────────────────────────────────
// Structural prechecks
// ────────────────────────────────────────────────────────────────────────────

fn check_evaluation(raw: &Value) -> Result<(), EvalError> {
    let root = as_object(raw, "$")?;

    require_str(root, "executive_summary", "")?;

    let (scores, scores_path) = require(root, "brand_scores", "")?;
    let scores = as_array(scores, &scores_path)?;
    for (i, score) in scores.iter().enumerate() {
        check_brand_score(score, &format!("{scores_path}[{i}]"))?;
    }

    // Optional: absent for single-brand requests.
    if let Some(v) = optional(root, "comparison_verdict") {
        as_str(v, "comparison_verdict")?;
    }

    Ok(())
}

fn check_brand_score(score: &Value, path: &str) -> Result<(), EvalError> {
    let obj = as_object(score, path)?;

    for key in ["brand_name", "summary", "strategic_classification", "positioning_fit"] {
        require_str(obj, key, path)?;
    }
    require_number(obj, "namescore", path)?;
    // Verdict is permissively typed, but it is still a string on the wire.
    require_str(obj, "verdict", path)?;

    for key in ["pros", "cons"] {
        let (v, p) = require(obj, key, path)?;
        let items = as_array(v, &p)?;
        for (i, item) in items.iter().enumerate() {
            as_str(item, &format!("{p}[{i}]"))?;
        }
    }

    let (dimensions, dims_path) = require(obj, "dimensions", path)?;
    let dimensions = as_array(dimensions, &dims_path)?;
    for (i, dim) in dimensions.iter().enumerate() {
        let p = format!("{dims_path}[{i}]");
        let dim = as_object(dim, &p)?;
        require_str(dim, "name", &p)?;
        require_number(dim, "score", &p)?;
        require_str(dim, "reasoning", &p)?;
    }

    // Legacy free-form risk summary: presence only, any shape.
    require(obj, "trademark_risk", path)?;

    check_trademark_matrix(obj, path)?;

    let (domain, domain_path) = require(obj, "domain_analysis", path)?;
    let domain = as_object(domain, &domain_path)?;
    require_str(domain, "exact_match_status", &domain_path)?;
    let (alts, alts_path) = require(domain, "alternatives", &domain_path)?;
    as_array(alts, &alts_path)?;
    require_str(domain, "strategy_note", &domain_path)?;

    let (cultural, cultural_path) = require(obj, "cultural_analysis", path)?;
    let cultural = as_array(cultural, &cultural_path)?;
    for (i, country) in cultural.iter().enumerate() {
        let p = format!("{cultural_path}[{i}]");
        let country = as_object(country, &p)?;
        require_str(country, "country", &p)?;
        require_number(country, "cultural_resonance_score", &p)?;
        require_str(country, "cultural_notes", &p)?;
        require_str(country, "linguistic_check", &p)?;
    }

    if let Some(visibility) = optional(obj, "visibility_analysis") {
        check_visibility(visibility, &format!("{path}.visibility_analysis"))?;
    }

    if let Some(competitor) = optional(obj, "competitor_analysis") {
        let p = format!("{path}.competitor_analysis");
        let competitor = as_object(competitor, &p)?;
        let (list, list_path) = require(competitor, "competitors", &p)?;
        as_array(list, &list_path)?;
        require_str(competitor, "white_space_analysis", &p)?;
        require_str(competitor, "strategic_advantage", &p)?;
        require_str(competitor, "suggested_pricing", &p)?;
    }

    if let Some(assessment) = optional(obj, "final_assessment") {
        let p = format!("{path}.final_assessment");
        let assessment = as_object(assessment, &p)?;
        require_str(assessment, "verdict_statement", &p)?;
        require_number(assessment, "suitability_score", &p)?;
        let (breakdown, breakdown_path) = require(assessment, "dimension_breakdown", &p)?;
        as_array(breakdown, &breakdown_path)?;
        let (recs, recs_path) = require(assessment, "recommendations", &p)?;
        as_array(recs, &recs_path)?;
        require_str(assessment, "alternative_path", &p)?;
    }

    // Revision-added lists: optional, but must be arrays when present.
    for key in [
        "trademark_classes",
        "multi_domain_availability",
        "social_availability",
        "alternative_names",
    ] {
        if let Some(v) = optional(obj, key) {
            as_array(v, &join(path, key))?;
        }
    }

    Ok(())
}

fn check_trademark_matrix(score: &Map<String, Value>, path: &str) -> Result<(), EvalError> {
    let (matrix, matrix_path) = require(score, "trademark_matrix", path)?;
    let matrix = as_object(matrix, &matrix_path)?;

    for row_name in [
        "genericness",
        "existing_conflicts",
        "phonetic_similarity",
        "relevant_classes",
        "rebranding_probability",
    ] {
        let (row, row_path) = require(matrix, row_name, &matrix_path)?;
        let row = as_object(row, &row_path)?;
        require_integer(row, "likelihood", &row_path)?;
        require_integer(row, "severity", &row_path)?;
        // Zone tags drift; presence is enough.
        require(row, "zone", &row_path)?;
        require_str(row, "commentary", &row_path)?;
    }
    require_str(matrix, "overall_assessment", &matrix_path)?;

    Ok(())
}

/// Structural contract of the two-bucket classification: both buckets, when
/// present, must be lists of records (each carrying at least a `name`) or
/// bare strings. Whether an entity was filed into the RIGHT bucket is the
/// model's judgment and is not checked here. The legacy presence lists are
/// free-form; entries there may be any shape.
fn check_visibility(visibility: &Value, path: &str) -> Result<(), EvalError> {
    let obj = as_object(visibility, path)?;
    for key in ["direct_competitors", "name_twins"] {
        if let Some(v) = optional(obj, key) {
            let p = join(path, key);
            let items = as_array(v, &p)?;
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{p}[{i}]");
                match item {
                    Value::String(_) => {}
                    Value::Object(entry) => {
                        require_str(entry, "name", &item_path)?;
                    }
                    other => {
                        return Err(EvalError::at(
                            item_path,
                            format!("expected object or string, found {}", type_name(other)),
                        ));
                    }
                }
            }
        }
    }
    for key in ["google_presence", "app_store_presence"] {
        if let Some(v) = optional(obj, key) {
            as_array(v, &join(path, key))?;
        }
    }
    Ok(())
}

fn check_audit(raw: &Value) -> Result<(), EvalError> {
    let root = as_object(raw, "$")?;

    require_number(root, "overall_score", "")?;
    for key in ["rating", "verdict", "executive_summary", "investment_thesis"] {
        require_str(root, key, "")?;
    }

    let (landscape, landscape_path) = require(root, "market_landscape", "")?;
    let landscape = as_object(landscape, &landscape_path)?;
    let (forces, forces_path) = require(landscape, "porters_five_forces", &landscape_path)?;
    let forces = as_object(forces, &forces_path)?;
    for key in [
        "new_entrants_threat",
        "supplier_power",
        "buyer_power",
        "substitutes_threat",
        "competitive_rivalry",
    ] {
        require_str(forces, key, &forces_path)?;
    }
    require_str(landscape, "analysis", &landscape_path)?;

    let (swot, swot_path) = require(root, "swot", "")?;
    let swot = as_object(swot, &swot_path)?;
    for bucket in ["strengths", "weaknesses", "opportunities", "threats"] {
        let (v, p) = require(swot, bucket, &swot_path)?;
        as_array(v, &p)?;
    }

    let (dimensions, dims_path) = require(root, "dimensions", "")?;
    let dimensions = as_array(dimensions, &dims_path)?;
    for (i, dim) in dimensions.iter().enumerate() {
        let p = format!("{dims_path}[{i}]");
        let dim = as_object(dim, &p)?;
        require_str(dim, "name", &p)?;
        require_number(dim, "score", &p)?;
        require_str(dim, "reasoning", &p)?;
    }

    let (recs, recs_path) = require(root, "recommendations", "")?;
    let recs = as_object(recs, &recs_path)?;
    for horizon in ["immediate", "medium_term", "long_term"] {
        let (v, p) = require(recs, horizon, &recs_path)?;
        as_array(v, &p)?;
    }

    let (conclusion, conclusion_path) = require(root, "conclusion", "")?;
    let conclusion = as_object(conclusion, &conclusion_path)?;
    for key in ["summary", "final_rating", "recommendation"] {
        require_str(conclusion, key, &conclusion_path)?;
    }

    for key in ["risks", "competitors", "sources"] {
        if let Some(v) = optional(root, key) {
            as_array(v, key)?;
        }
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Walk helpers
// ────────────────────────────────────────────────────────────────────────────

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<(&'a Value, String), EvalError> {
    let path = join(parent, key);
    match obj.get(key) {
        Some(v) => Ok((v, path)),
        None => Err(EvalError::at(path, "missing required field")),
    }
}

/// Returns the field if present and non-null. Explicit nulls count as absent
/// — the model emits `"field": null` and omission interchangeably.
fn optional<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn as_object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>, EvalError> {
    v.as_object().ok_or_else(|| {
        EvalError::at(path, format!("expected object, found {}", type_name(v)))
    })
}

fn as_array<'a>(v: &'a Value, path: &str) -> Result<&'a Vec<Value>, EvalError> {
    v.as_array().ok_or_else(|| {
        EvalError::at(path, format!("expected array, found {}", type_name(v)))
    })
}

fn as_str<'a>(v: &'a Value, path: &str) -> Result<&'a str, EvalError> {
    v.as_str().ok_or_else(|| {
        EvalError::at(path, format!("expected string, found {}", type_name(v)))
    })
}

fn require_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a str, EvalError> {
    let (v, path) = require(obj, key, parent)?;
    as_str(v, &path)
}

fn require_number(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<f64, EvalError> {
    let (v, path) = require(obj, key, parent)?;
    v.as_f64()
        .ok_or_else(|| EvalError::at(path, format!("expected number, found {}", type_name(v))))
}

fn require_integer(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<i64, EvalError> {
    let (v, path) = require(obj, key, parent)?;
    v.as_i64()
        .ok_or_else(|| EvalError::at(path, format!("expected integer, found {}", type_name(v))))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::evaluation::{CanonicalVerdict, Verdict};
    use serde_json::json;

    fn matrix_row(zone: &str) -> Value {
        json!({"likelihood": 2, "severity": 3, "zone": zone, "commentary": "Low descriptiveness."})
    }

    /// A brand score satisfying the full strict v2 shape.
    fn full_brand_score(name: &str) -> Value {
        json!({
            "brand_name": name,
            "namescore": 82.5,
            "verdict": "GO",
            "summary": "Distinctive and ownable. Clear premium headroom.",
            "strategic_classification": "Differentiation Asset",
            "pros": ["Short and phonetically crisp", "No category incumbents share the root"],
            "cons": ["Mild genericness risk in adjacent categories"],
            "dimensions": [
                {"name": "Brand Distinctiveness & Memorability", "score": 8.5, "reasoning": "Two-syllable, plosive open."},
                {"name": "Cultural & Linguistic Resonance", "score": 7.0, "reasoning": "No negative meanings found."},
                {"name": "Premiumisation & Trust Curve", "score": 8.0, "reasoning": "Latinate root supports premium."},
                {"name": "Scalability & Brand Architecture", "score": 9.0, "reasoning": "Extends naturally to sub-brands."},
                {"name": "Trademark & Legal Sensitivity", "score": 6.5, "reasoning": "Some crowding in class 9."},
                {"name": "Consumer Perception Mapping", "score": 7.5, "reasoning": "Reads modern, slightly cold."}
            ],
            "trademark_risk": {"risk_level": "Low", "score": 2.0, "summary": "Low overall.", "details": []},
            "trademark_matrix": {
                "genericness": matrix_row("Green"),
                "existing_conflicts": matrix_row("Yellow"),
                "phonetic_similarity": matrix_row("Green"),
                "relevant_classes": matrix_row("Yellow"),
                "rebranding_probability": matrix_row("Green"),
                "overall_assessment": "Proceed with a class 9 and 42 search."
            },
            "trademark_classes": [
                {"class_number": 9, "description": "Downloadable software"},
                {"class_number": 42, "description": "SaaS services"}
            ],
            "domain_analysis": {
                "exact_match_status": "Likely taken",
                "alternatives": [{"domain": ".io", "example": "astra.io"}],
                "strategy_note": "Prefix strategy viable."
            },
            "multi_domain_availability": [
                {"domain": "astra.com", "status": "Taken", "alternatives": ["getastra.com"]}
            ],
            "social_availability": [
                {"platform": "Instagram", "handle": "@astra", "status": "Taken", "alternatives": ["@astrahq"]}
            ],
            "visibility_analysis": {
                "direct_competitors": [],
                "name_twins": [
                    {"name": "Astra Motors", "customer_overlap": "NONE", "product_intent": "automotive"}
                ],
                "warning_triggered": false,
                "warning_reason": null
            },
            "cultural_analysis": [
                {"country": "USA", "cultural_resonance_score": 8.0,
                 "cultural_notes": "Astronomy association reads aspirational.", "linguistic_check": "Safe"}
            ],
            "alternative_names": [
                {"name": "Astral", "rationale": "Same root, cleaner trademark field."}
            ],
            "competitor_analysis": {
                "competitors": [{"name": "Nova Inc", "positioning": "Premium", "price_range": "$$$"}],
                "white_space_analysis": "Premium-modern quadrant is open.",
                "strategic_advantage": "Name supports architecture plays.",
                "suggested_pricing": "Premium"
            },
            "final_assessment": {
                "verdict_statement": "Strong go.",
                "suitability_score": 8.2,
                "dimension_breakdown": [{"Distinctiveness": 8.5}],
                "recommendations": [{"title": "File early", "content": "Class 9 and 42."}],
                "alternative_path": "Astral as fallback."
            },
            "positioning_fit": "Strong fit with Premium."
        })
    }

    fn full_response() -> Value {
        json!({
            "executive_summary": "GO. Astra is distinctive, scalable, and legally tractable.",
            "brand_scores": [full_brand_score("Astra")]
        })
    }

    #[test]
    fn test_full_strict_response_validates() {
        let response = validate_evaluation(full_response()).unwrap();
        assert_eq!(response.brand_scores[0].brand_name, "Astra");
        assert_eq!(
            response.brand_scores[0].verdict,
            Verdict::Canonical(CanonicalVerdict::Go)
        );
        assert_eq!(response.brand_scores[0].dimensions.len(), 6);
    }

    #[test]
    fn test_validation_round_trips_losslessly() {
        let first = validate_evaluation(full_response()).unwrap();
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = validate_evaluation(reserialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_dimensions_fails_with_field_path() {
        let mut raw = full_response();
        raw["brand_scores"][0]
            .as_object_mut()
            .unwrap()
            .remove("dimensions");
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, reason } => {
                assert_eq!(path, "brand_scores[0].dimensions");
                assert_eq!(reason, "missing required field");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_executive_summary_fails_at_top_level() {
        let mut raw = full_response();
        raw.as_object_mut().unwrap().remove("executive_summary");
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, .. } => assert_eq!(path, "executive_summary"),
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_drifted_verdict_is_accepted_not_rejected() {
        let mut raw = full_response();
        raw["brand_scores"][0]["verdict"] = json!("GO with Caution");
        let response = validate_evaluation(raw).unwrap();
        assert_eq!(
            response.brand_scores[0].verdict,
            Verdict::Other("GO with Caution".to_string())
        );
    }

    #[test]
    fn test_missing_comparison_verdict_is_valid_for_single_brand() {
        let response = validate_evaluation(full_response()).unwrap();
        assert!(response.comparison_verdict.is_none());
    }

    #[test]
    fn test_non_string_comparison_verdict_fails() {
        let mut raw = full_response();
        raw["comparison_verdict"] = json!(42);
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, reason } => {
                assert_eq!(path, "comparison_verdict");
                assert!(reason.contains("expected string"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_namescore_reports_path_and_types() {
        let mut raw = full_response();
        raw["brand_scores"][0]["namescore"] = json!("82.5");
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, reason } => {
                assert_eq!(path, "brand_scores[0].namescore");
                assert_eq!(reason, "expected number, found string");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_trademark_matrix_row_fails_with_row_path() {
        let mut raw = full_response();
        raw["brand_scores"][0]["trademark_matrix"]
            .as_object_mut()
            .unwrap()
            .remove("existing_conflicts");
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, .. } => {
                assert_eq!(path, "brand_scores[0].trademark_matrix.existing_conflicts");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_likelihood_fails_as_non_integer() {
        let mut raw = full_response();
        raw["brand_scores"][0]["trademark_matrix"]["genericness"]["likelihood"] = json!(3.5);
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, reason } => {
                assert_eq!(
                    path,
                    "brand_scores[0].trademark_matrix.genericness.likelihood"
                );
                assert!(reason.contains("expected integer"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_drifted_zone_tag_is_accepted() {
        let mut raw = full_response();
        raw["brand_scores"][0]["trademark_matrix"]["genericness"]["zone"] =
            json!("Yellow-to-Red");
        assert!(validate_evaluation(raw).is_ok());
    }

    #[test]
    fn test_old_revision_shape_still_validates() {
        // v1-era output: presence-list visibility, none of the v2 lists.
        let mut score = full_brand_score("Astra");
        let obj = score.as_object_mut().unwrap();
        obj.remove("trademark_classes");
        obj.remove("multi_domain_availability");
        obj.remove("social_availability");
        obj.remove("alternative_names");
        obj.insert(
            "visibility_analysis".to_string(),
            json!({
                "google_presence": ["Astra Labs blog"],
                "app_store_presence": [],
                "warning_triggered": false,
                "warning_reason": null
            }),
        );
        let raw = json!({
            "executive_summary": "GO.",
            "brand_scores": [score],
            "comparison_verdict": "Astra is the stronger candidate."
        });
        let response = validate_evaluation(raw).unwrap();
        let brand = &response.brand_scores[0];
        assert!(brand.trademark_classes.is_empty());
        assert!(brand.multi_domain_availability.is_empty());
        let visibility = brand.visibility_analysis.as_ref().unwrap();
        assert!(visibility.direct_competitors.is_empty());
        assert_eq!(visibility.google_presence.len(), 1);
    }

    #[test]
    fn test_null_visibility_analysis_counts_as_absent() {
        let mut raw = full_response();
        raw["brand_scores"][0]["visibility_analysis"] = Value::Null;
        let response = validate_evaluation(raw).unwrap();
        assert!(response.brand_scores[0].visibility_analysis.is_none());
    }

    #[test]
    fn test_null_defaulted_lists_coerce_to_empty() {
        // Omission and explicit null are interchangeable for defaulted lists.
        let mut raw = full_response();
        raw["brand_scores"][0]["trademark_classes"] = Value::Null;
        raw["brand_scores"][0]["alternative_names"] = Value::Null;
        raw["brand_scores"][0]["visibility_analysis"]["name_twins"] = Value::Null;
        let response = validate_evaluation(raw).unwrap();
        let brand = &response.brand_scores[0];
        assert!(brand.trademark_classes.is_empty());
        assert!(brand.alternative_names.is_empty());
        assert!(brand
            .visibility_analysis
            .as_ref()
            .unwrap()
            .name_twins
            .is_empty());
    }

    #[test]
    fn test_bucket_entry_without_name_fails_with_entry_path() {
        let mut raw = full_response();
        raw["brand_scores"][0]["visibility_analysis"]["name_twins"] =
            json!([{"description": "hair salon, unrelated"}]);
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, reason } => {
                assert_eq!(
                    path,
                    "brand_scores[0].visibility_analysis.name_twins[0].name"
                );
                assert_eq!(reason, "missing required field");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_presence_list_entries_are_free_form() {
        let mut raw = full_response();
        raw["brand_scores"][0]["visibility_analysis"]["google_presence"] =
            json!([4.2, {"title": "Astra Labs blog"}, "astra.dev", null]);
        let response = validate_evaluation(raw).unwrap();
        let visibility = response.brand_scores[0].visibility_analysis.as_ref().unwrap();
        assert_eq!(visibility.google_presence.len(), 4);
    }

    #[test]
    fn test_name_twins_must_be_an_array() {
        let mut raw = full_response();
        raw["brand_scores"][0]["visibility_analysis"]["name_twins"] = json!("Astra Motors");
        let err = validate_evaluation(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, .. } => {
                assert_eq!(path, "brand_scores[0].visibility_analysis.name_twins");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_none_overlap_entity_accepted_in_either_bucket() {
        // Structural contract only: misplacement is a semantic gap the
        // validator does not close.
        let mut raw = full_response();
        raw["brand_scores"][0]["visibility_analysis"]["direct_competitors"] =
            json!([{"name": "Astra Motors", "customer_overlap": "NONE"}]);
        assert!(validate_evaluation(raw).is_ok());
    }

    // ── audit ──────────────────────────────────────────────────────────────

    fn full_audit() -> Value {
        json!({
            "overall_score": 71.0,
            "rating": "B+",
            "verdict": "MODERATE",
            "executive_summary": "Regional leader with strong authenticity equity.",
            "investment_thesis": "HOLD pending margin recovery.",
            "market_landscape": {
                "tam": "₹12,000 Cr",
                "cagr": "9% CAGR",
                "competitive_intensity": "High",
                "porters_five_forces": {
                    "new_entrants_threat": "Medium - low capex but brand moats matter",
                    "supplier_power": "Low - commodity inputs",
                    "buyer_power": "High - low switching costs",
                    "substitutes_threat": "Medium - packaged alternatives",
                    "competitive_rivalry": "High - national chains expanding"
                },
                "analysis": "Fragmented market consolidating toward organized players."
            },
            "swot": {
                "strengths": [{"point": "120 stores across 6 states", "source": "[1]", "confidence": "HIGH"}],
                "weaknesses": ["Thin digital presence"],
                "opportunities": [{"point": "Tier-2 expansion", "source": "[4]", "confidence": "MEDIUM"}],
                "threats": [{"point": "National chain entry", "source": "[2]", "confidence": "HIGH"}]
            },
            "dimensions": [
                {"name": "Heritage & Authenticity", "score": 9.0, "reasoning": "Founded 1987; founder story resonates.",
                 "evidence": ["[1]"], "confidence": "HIGH"}
            ],
            "recommendations": {
                "immediate": [
                    {"title": "Close the delivery gap", "priority": "CRITICAL",
                     "current_state": "No presence on aggregators.",
                     "root_cause": "Legacy ops mindset.",
                     "recommended_action": "Onboard two aggregators in top 10 stores.",
                     "implementation_steps": ["Pilot", "Measure", "Negotiate", "Roll out"],
                     "timeline": "0-6 months", "estimated_cost": "₹40-60 lakh",
                     "success_metric": "15% of revenue via delivery", "expected_outcome": "Revenue lift"}
                ],
                "medium_term": [],
                "long_term": []
            },
            "risks": [
                {"risk": "Quality drift during expansion", "probability": "Medium",
                 "impact": "High", "mitigation": "Central kitchen QA", "owner": "COO"}
            ],
            "competitors": [
                {"name": "Haldiram's", "tier": "Leadership", "rating": 4.3}
            ],
            "conclusion": {
                "summary": "Durable regional brand; scale is the open question.",
                "final_rating": "B+",
                "rating_justification": "Equity strong, economics average.",
                "key_risks": ["Expansion quality drift"],
                "recommendation": "HOLD",
                "path_forward": "Prove two new-market stores first."
            },
            "sources": [
                {"id": 1, "title": "Company site", "url": "https://example.in", "type": "Website"}
            ],
            "metadata": {
                "research_queries_count": 14,
                "sources_count": 9,
                "data_confidence": "MEDIUM",
                "report_limitations": ["Revenue estimated"]
            }
        })
    }

    #[test]
    fn test_full_audit_validates() {
        let report = validate_audit(full_audit()).unwrap();
        assert_eq!(report.rating, "B+");
        assert!(report.swot.strengths[0].is_structured());
        // Bare-string SWOT entry degrades to text, not a failure.
        assert!(!report.swot.weaknesses[0].is_structured());
    }

    #[test]
    fn test_audit_missing_swot_fails_with_path() {
        let mut raw = full_audit();
        raw.as_object_mut().unwrap().remove("swot");
        let err = validate_audit(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, .. } => assert_eq!(path, "swot"),
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_audit_missing_porters_force_fails_with_nested_path() {
        let mut raw = full_audit();
        raw["market_landscape"]["porters_five_forces"]
            .as_object_mut()
            .unwrap()
            .remove("buyer_power");
        let err = validate_audit(raw).unwrap_err();
        match err {
            EvalError::SchemaValidation { path, .. } => {
                assert_eq!(path, "market_landscape.porters_five_forces.buyer_power");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_audit_null_risk_and_source_lists_coerce_to_empty() {
        let mut raw = full_audit();
        raw["risks"] = Value::Null;
        raw["sources"] = Value::Null;
        let report = validate_audit(raw).unwrap();
        assert!(report.risks.is_empty());
        assert!(report.sources.is_empty());
    }

    #[test]
    fn test_audit_round_trips() {
        let first = validate_audit(full_audit()).unwrap();
        let second = validate_audit(serde_json::to_value(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
