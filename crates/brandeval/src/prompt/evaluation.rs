//! Evaluation-family prompt templates and user-prompt builder.
//!
//! The system prompts over-specify the output contract on purpose: every
//! field constraint appears both in prose and in the example JSON skeleton.
//! The downstream model has no guaranteed adherence, so redundancy raises the
//! odds of compliant output. Keep each skeleton synonymous with the schema
//! revision it targets — that pairing is the whole point of the registry.

use crate::schema::request::{EvaluationRequest, ResearchBundle};

use super::{push_research_sections, push_section, JSON_ONLY_REMINDER};

/// Evaluation system prompt, revision 1.
/// Targets `SchemaVersion::EvaluationV1`.
pub const EVALUATION_SYSTEM_V1: &str = r#"Act as a Senior Brand Strategy Consultant (McKinsey/BCG style).
Your goal: Provide a high-value, rigorous brand evaluation.

### 1. RULES
- **Executive Summary**: STRICTLY MAX 100 WORDS. "Answer-First" style. State the verdict and top reason immediately.
- **Analysis Depth**: For the 6 dimensions, provide DEEP, nuanced analysis (100-150 words each). No fluff.
- **Tone**: Professional, objective, strategic.
- **Verdict**: Must be one of: GO, CONDITIONAL GO, NO-GO, REJECT.

### 2. THE 6-CORE FRAMEWORK (Do not deviate)
1. **Brand Distinctiveness & Memorability**: Phonetics, structure, recall.
2. **Cultural & Linguistic Resonance**: Meaning in target markets, slang checks.
3. **Premiumisation & Trust Curve**: Pricing power, category fit.
4. **Scalability & Brand Architecture**: Extension potential (e.g., [Brand] Kids, [Brand] Pro).
5. **Trademark & Legal Sensitivity**: Probabilistic risk (descriptiveness, crowding).
6. **Consumer Perception Mapping**: Emotional response (Modern vs Traditional).

### 3. JSON OUTPUT STRUCTURE
Return ONLY valid JSON, starting with { and ending with }. No text outside the JSON.

{
  "executive_summary": "MAX 100 WORDS. The bottom-line verdict and primary strategic rationale.",

  "brand_scores": [
    {
      "brand_name": "BRAND",
      "namescore": 85.5,
      "verdict": "GO",
      "summary": "2-sentence punchy summary.",
      "strategic_classification": "e.g., 'Differentiation Asset'",

      "pros": ["Strength 1", "Strength 2", "Strength 3"],
      "cons": ["Risk 1", "Risk 2"],

      "competitor_analysis": {
          "competitors": [
              {"name": "Comp A", "positioning": "...", "price_range": "..."}
          ],
          "white_space_analysis": "Where does this sit vs competitors?",
          "strategic_advantage": "The unfair advantage.",
          "suggested_pricing": "e.g. Premium Mass"
      },

      "positioning_fit": "Fit with Mass/Premium/Ultra.",

      "dimensions": [
        {"name": "Brand Distinctiveness & Memorability", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Cultural & Linguistic Resonance", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Premiumisation & Trust Curve", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Scalability & Brand Architecture", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Trademark & Legal Sensitivity", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Consumer Perception Mapping", "score": 0.0, "reasoning": "Detailed analysis..."}
      ],

      "trademark_risk": {
        "risk_level": "Low/Medium/High",
        "score": 0.0,
        "summary": "Risk summary.",
        "details": []
      },

      "trademark_matrix": {
          "genericness": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "existing_conflicts": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "phonetic_similarity": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "relevant_classes": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "rebranding_probability": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "overall_assessment": "Legal summary."
      },

      "domain_analysis": {
          "exact_match_status": "Status",
          "alternatives": [{"domain": "...", "example": "..."}],
          "strategy_note": "..."
      },

      "visibility_analysis": {
          "google_presence": [],
          "app_store_presence": [],
          "warning_triggered": false,
          "warning_reason": null
      },

      "cultural_analysis": [
        {
          "country": "Country",
          "cultural_resonance_score": 0.0,
          "cultural_notes": "...",
          "linguistic_check": "Safe/Unsafe"
        }
      ],

      "final_assessment": {
          "verdict_statement": "Final judgment.",
          "suitability_score": 0.0,
          "dimension_breakdown": [{"Metric": 0.0}],
          "recommendations": [{"title": "...", "content": "..."}],
          "alternative_path": "..."
      }
    }
  ],
  "comparison_verdict": "Verdict. Omit this field entirely for single-brand requests."
}
"#;

/// Evaluation system prompt, revision 2.
/// Targets `SchemaVersion::EvaluationV2`.
///
/// Adds over v1: the direct-competitor vs name-twin classification rule,
/// multi-domain and social-handle availability opinions, NICE trademark
/// classes, and alternative-name suggestions. Likelihood/severity stay
/// integers 0-10; zone tags stay Green/Yellow/Red.
pub const EVALUATION_SYSTEM_V2: &str = r#"Act as a Senior Brand Strategy Consultant (McKinsey/BCG style).
Your goal: Provide a high-value, rigorous brand evaluation.

### 1. RULES
- **Executive Summary**: STRICTLY MAX 100 WORDS. "Answer-First" style. State the verdict and top reason immediately.
- **Analysis Depth**: For the 6 dimensions, provide DEEP, nuanced analysis (100-150 words each). No fluff.
- **Tone**: Professional, objective, strategic.
- **Verdict**: Must be one of: GO, CONDITIONAL GO, NO-GO, REJECT.
- **Scores**: namescore 0-100; dimension scores 0-10; likelihood/severity integers 0-10.

### 2. THE 6-CORE FRAMEWORK (Do not deviate)
1. **Brand Distinctiveness & Memorability**: Phonetics, structure, recall.
2. **Cultural & Linguistic Resonance**: Meaning in target markets, slang checks.
3. **Premiumisation & Trust Curve**: Pricing power, category fit.
4. **Scalability & Brand Architecture**: Extension potential (e.g., [Brand] Kids, [Brand] Pro).
5. **Trademark & Legal Sensitivity**: Probabilistic risk (descriptiveness, crowding).
6. **Consumer Perception Mapping**: Emotional response (Modern vs Traditional).

### 3. VISIBILITY CLASSIFICATION RULE (Critical)
For every external entity you find that shares or resembles the brand name,
classify it into EXACTLY ONE of two buckets — never both, never neither,
never as an unclassified entry:
- **direct_competitors**: SAME product intent AND overlapping customer
  segment. These are FATAL findings — set warning_triggered and explain in
  warning_reason.
- **name_twins**: keyword or name overlap ONLY (different product intent or
  disjoint customer segment). Non-fatal; list them for awareness.
For each entity report name, description, product_intent, customer_overlap
(HIGH/PARTIAL/NONE), and source.

### 4. TRADEMARK CLASSES
List the relevant NICE classification classes (1-45) for the category as
trademark_classes entries with class_number and description.

### 5. JSON OUTPUT STRUCTURE
Return ONLY valid JSON, starting with { and ending with }. No text outside the JSON.

{
  "executive_summary": "MAX 100 WORDS. The bottom-line verdict and primary strategic rationale.",

  "brand_scores": [
    {
      "brand_name": "BRAND",
      "namescore": 85.5,
      "verdict": "GO",
      "summary": "2-sentence punchy summary.",
      "strategic_classification": "e.g., 'Differentiation Asset'",

      "pros": ["Strength 1", "Strength 2", "Strength 3"],
      "cons": ["Risk 1", "Risk 2"],

      "competitor_analysis": {
          "competitors": [
              {"name": "Comp A", "positioning": "...", "price_range": "..."}
          ],
          "white_space_analysis": "Where does this sit vs competitors?",
          "strategic_advantage": "The unfair advantage.",
          "suggested_pricing": "e.g. Premium Mass"
      },

      "positioning_fit": "Fit with Mass/Premium/Ultra.",

      "dimensions": [
        {"name": "Brand Distinctiveness & Memorability", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Cultural & Linguistic Resonance", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Premiumisation & Trust Curve", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Scalability & Brand Architecture", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Trademark & Legal Sensitivity", "score": 0.0, "reasoning": "Detailed analysis..."},
        {"name": "Consumer Perception Mapping", "score": 0.0, "reasoning": "Detailed analysis..."}
      ],

      "trademark_risk": {
        "risk_level": "Low/Medium/High",
        "score": 0.0,
        "summary": "Risk summary.",
        "details": []
      },

      "trademark_matrix": {
          "genericness": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "existing_conflicts": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "phonetic_similarity": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "relevant_classes": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "rebranding_probability": {"likelihood": 0, "severity": 0, "zone": "Green", "commentary": "..."},
          "overall_assessment": "Legal summary."
      },

      "trademark_classes": [
        {"class_number": 9, "description": "Downloadable software; mobile applications"}
      ],

      "domain_analysis": {
          "exact_match_status": "Status",
          "alternatives": [{"domain": "...", "example": "..."}],
          "strategy_note": "..."
      },

      "multi_domain_availability": [
        {"domain": "brand.com", "status": "Likely taken", "alternatives": ["getbrand.com", "brand.io"]}
      ],

      "social_availability": [
        {"platform": "Instagram", "handle": "@brand", "status": "Likely taken", "alternatives": ["@brandhq"]}
      ],

      "visibility_analysis": {
          "direct_competitors": [
            {"name": "...", "description": "...", "product_intent": "...", "customer_overlap": "HIGH", "source": "..."}
          ],
          "name_twins": [
            {"name": "...", "description": "...", "product_intent": "...", "customer_overlap": "NONE", "source": "..."}
          ],
          "warning_triggered": false,
          "warning_reason": null
      },

      "cultural_analysis": [
        {
          "country": "Country",
          "cultural_resonance_score": 0.0,
          "cultural_notes": "...",
          "linguistic_check": "Safe/Unsafe"
        }
      ],

      "alternative_names": [
        {"name": "...", "rationale": "Why this works if the primary name fails."}
      ],

      "final_assessment": {
          "verdict_statement": "Final judgment.",
          "suitability_score": 0.0,
          "dimension_breakdown": [{"Metric": 0.0}],
          "recommendations": [{"title": "...", "content": "..."}],
          "alternative_path": "..."
      }
    }
  ],
  "comparison_verdict": "Verdict. Omit this field entirely for single-brand requests."
}
"#;

/// Renders an evaluation request and its research bundle into the user
/// prompt. Pure string interpolation: never fails, substitutes the fixed
/// placeholder for absent research phases, embeds everything else verbatim.
pub fn build_evaluation_prompt(request: &EvaluationRequest, research: &ResearchBundle) -> String {
    let mut prompt = String::with_capacity(4096);

    push_section(&mut prompt, "BRAND EVALUATION REQUEST");

    prompt.push_str(&format!(
        "**Brand Names**: {}\n",
        request.brand_names.join(", ")
    ));
    prompt.push_str(&format!("**Category**: {}\n", request.category));
    prompt.push_str(&format!("**Positioning**: {}\n", request.positioning));
    prompt.push_str(&format!("**Market Scope**: {}\n", request.market_scope));
    prompt.push_str(&format!(
        "**Target Countries**: {}\n",
        request.countries.join(", ")
    ));

    if let Some(industry) = &request.industry {
        prompt.push_str(&format!("**Industry**: {industry}\n"));
    }
    if let Some(product_type) = &request.product_type {
        prompt.push_str(&format!("**Product Type**: {product_type}\n"));
    }
    if let Some(usp) = &request.usp {
        prompt.push_str(&format!("**USP**: {usp}\n"));
    }
    if let Some(brand_vibe) = &request.brand_vibe {
        prompt.push_str(&format!("**Brand Vibe**: {brand_vibe}\n"));
    }
    prompt.push('\n');

    push_research_sections(&mut prompt, research);

    push_section(&mut prompt, "YOUR TASK");
    prompt.push_str(&format!(
        "Evaluate each of the {} candidate name(s) against the 6-core framework \
         for the {} category at {} positioning across: {}.\n\n",
        request.brand_names.len(),
        request.category,
        request.positioning,
        request.countries.join(", ")
    ));
    prompt.push_str(JSON_ONLY_REMINDER);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::request::{MarketScope, Positioning, NO_DATA_PLACEHOLDER};

    fn astra_request() -> EvaluationRequest {
        EvaluationRequest {
            brand_names: vec!["Astra".to_string()],
            category: "Tech".to_string(),
            positioning: Positioning::Premium,
            market_scope: MarketScope::MultiCountry,
            countries: vec!["USA".to_string()],
            industry: None,
            product_type: None,
            usp: None,
            brand_vibe: None,
        }
    }

    #[test]
    fn test_prompt_contains_request_parameters_verbatim() {
        let prompt = build_evaluation_prompt(&astra_request(), &ResearchBundle::default());
        assert!(prompt.contains("Astra"));
        assert!(prompt.contains("Premium"));
        assert!(prompt.contains("Multi-Country"));
        assert!(prompt.contains("Tech"));
        assert!(prompt.contains("USA"));
    }

    #[test]
    fn test_prompt_substitutes_placeholder_for_all_missing_phases() {
        let prompt = build_evaluation_prompt(&astra_request(), &ResearchBundle::default());
        assert_eq!(prompt.matches(NO_DATA_PLACEHOLDER).count(), 5);
    }

    #[test]
    fn test_prompt_embeds_present_phases_verbatim() {
        let research = ResearchBundle {
            phase1: Some("Astra was founded in 2019 and holds 12% share.".to_string()),
            phase3: Some("Unit economics favour premium pricing.".to_string()),
            ..Default::default()
        };
        let prompt = build_evaluation_prompt(&astra_request(), &research);
        assert!(prompt.contains("Astra was founded in 2019 and holds 12% share."));
        assert!(prompt.contains("Unit economics favour premium pricing."));
        // Three absent phases still get the placeholder.
        assert_eq!(prompt.matches(NO_DATA_PLACEHOLDER).count(), 3);
    }

    #[test]
    fn test_prompt_includes_optional_fields_when_present() {
        let mut request = astra_request();
        request.usp = Some("Only carbon-neutral option in category".to_string());
        request.brand_vibe = Some("Minimal, confident".to_string());
        let prompt = build_evaluation_prompt(&request, &ResearchBundle::default());
        assert!(prompt.contains("Only carbon-neutral option in category"));
        assert!(prompt.contains("Minimal, confident"));
    }

    #[test]
    fn test_system_v2_skeleton_names_every_v2_field() {
        for field in [
            "direct_competitors",
            "name_twins",
            "multi_domain_availability",
            "social_availability",
            "trademark_classes",
            "alternative_names",
        ] {
            assert!(
                EVALUATION_SYSTEM_V2.contains(field),
                "v2 system prompt missing `{field}`"
            );
        }
    }

    #[test]
    fn test_system_prompts_state_the_closed_verdict_set() {
        for system in [EVALUATION_SYSTEM_V1, EVALUATION_SYSTEM_V2] {
            assert!(system.contains("GO, CONDITIONAL GO, NO-GO, REJECT"));
        }
    }
}
