//! brandeval — brand-name and brand-audit evaluation engine.
//!
//! The engine is a single linear pipeline:
//!
//! ```text
//! request → prompt builder → (model call) → raw JSON → validation → Validated<report>
//! ```
//!
//! Three parts carry the weight:
//! - [`prompt`] — version-tagged instruction templates that over-specify the
//!   output JSON contract, plus pure builder functions that embed request
//!   parameters and research text into delimited sections.
//! - [`schema`] — the typed mirror of that contract, with deliberate
//!   relaxations (`Verdict`, `ZoneTag`, `Flexible<T>`) for fields the model
//!   drifts on, and `#[serde(default)]` for fields added across prompt
//!   revisions so older-shaped output stays valid.
//! - [`validation`] — a structural precheck that reports field-path-qualified
//!   errors, followed by typed coercion. All-or-nothing: required fields are
//!   never silently defaulted.
//!
//! Everything else (HTTP surface, persistence, retry policy, job tracking)
//! belongs to the embedding service, not this crate.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod pipeline;
pub mod prompt;
pub mod schema;
pub mod validation;

pub use config::Config;
pub use errors::EvalError;
pub use llm_client::{ChatModel, LlmClient};
pub use pipeline::Evaluator;
pub use schema::version::{SchemaVersion, Validated};
