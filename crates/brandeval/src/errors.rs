use thiserror::Error;

/// Engine-level error type.
///
/// The two fatal kinds are deliberately distinct: `MalformedResponse` means
/// the model's raw output was not a JSON object at all (an upstream transport
/// problem), while `SchemaValidation` means parseable JSON was missing
/// required structure. Callers decide whether to re-prompt or surface the
/// error; this crate never retries a failed validation.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Schema validation failed at `{path}`: {reason}")]
    SchemaValidation { path: String, reason: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EvalError {
    /// Field-path-qualified validation failure.
    pub fn at(path: impl Into<String>, reason: impl Into<String>) -> Self {
        EvalError::SchemaValidation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
