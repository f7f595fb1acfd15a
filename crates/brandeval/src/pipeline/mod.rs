//! End-to-end evaluation pipeline: request → prompt → model → validated report.
//!
//! The pipeline is linear with no retries. A model response that fails
//! parsing or validation surfaces as an `Err`; recovery policy (retry,
//! re-prompt, queue) belongs to the caller.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::EvalError;
use crate::llm_client::{extract_json, ChatModel};
use crate::prompt::{build_audit_prompt, build_evaluation_prompt, TemplateRegistry};
use crate::schema::audit::AuditReport;
use crate::schema::evaluation::EvaluationResponse;
use crate::schema::request::{AuditRequest, EvaluationRequest, ResearchBundle};
use crate::schema::version::Validated;
use crate::validation::{validate_audit, validate_evaluation};

/// Drives evaluation and audit runs against any [`ChatModel`] backend.
pub struct Evaluator {
    model: Arc<dyn ChatModel>,
    registry: TemplateRegistry,
}

impl Evaluator {
    /// Creates an evaluator using the latest registered prompt templates.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            registry: TemplateRegistry::new(),
        }
    }

    /// Creates an evaluator with a caller-supplied registry, for pinning a
    /// specific prompt revision.
    pub fn with_registry(model: Arc<dyn ChatModel>, registry: TemplateRegistry) -> Self {
        Self { model, registry }
    }

    /// Runs a brand-name evaluation and returns the validated, versioned
    /// report.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
        research: &ResearchBundle,
    ) -> Result<Validated<EvaluationResponse>, EvalError> {
        let template = self.registry.latest_evaluation();
        let prompt = build_evaluation_prompt(request, research);
        info!(
            "Running evaluation for {} brand(s) with {}",
            request.brand_names.len(),
            template.schema_version
        );

        let raw = self
            .model
            .complete(template.system, &prompt)
            .await
            .map_err(|e| EvalError::Llm(e.to_string()))?;
        let value = extract_json(&raw)?;
        let response = validate_evaluation(value).inspect_err(|e| {
            warn!("Evaluation response rejected: {e}");
        })?;

        info!(
            "Evaluation validated: executive verdict ready, {} brand score(s)",
            response.brand_scores.len()
        );
        Ok(Validated::new(template.schema_version, response))
    }

    /// Runs a brand audit and returns the validated, versioned report.
    pub async fn audit(
        &self,
        request: &AuditRequest,
        research: &ResearchBundle,
    ) -> Result<Validated<AuditReport>, EvalError> {
        let template = self.registry.latest_audit();
        let prompt = build_audit_prompt(request, research);
        info!(
            "Running brand audit for '{}' with {}",
            request.brand_name, template.schema_version
        );

        let raw = self
            .model
            .complete(template.system, &prompt)
            .await
            .map_err(|e| EvalError::Llm(e.to_string()))?;
        let value = extract_json(&raw)?;
        let report = validate_audit(value).inspect_err(|e| {
            warn!("Audit report rejected: {e}");
        })?;

        info!("Audit validated: overall_score={}", report.overall_score);
        Ok(Validated::new(template.schema_version, report))
    }
}
