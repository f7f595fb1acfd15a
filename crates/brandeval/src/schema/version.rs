//! Schema version tags.
//!
//! Prompt revisions and schema revisions travel in pairs, and stored reports
//! must record which schema validated them — otherwise an old report gets
//! re-validated against a newer, incompatible schema. Every validated result
//! is therefore wrapped in [`Validated`] with a stable version tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Original evaluation schema: presence-list visibility, no availability
    /// or alternative-name fields.
    #[serde(rename = "evaluation/v1")]
    EvaluationV1,
    /// Adds the direct-competitor/name-twin split, multi-domain and social
    /// availability, NICE trademark classes, and alternative names — all
    /// optional with defaults, so v1-shaped output still validates.
    #[serde(rename = "evaluation/v2")]
    EvaluationV2,
    #[serde(rename = "audit/v1")]
    AuditV1,
}

impl SchemaVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::EvaluationV1 => "evaluation/v1",
            SchemaVersion::EvaluationV2 => "evaluation/v2",
            SchemaVersion::AuditV1 => "audit/v1",
        }
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated report plus the provenance a store needs: which schema
/// accepted it and when. Constructed once per evaluation, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validated<T> {
    pub id: Uuid,
    pub schema_version: SchemaVersion,
    pub validated_at: DateTime<Utc>,
    pub report: T,
}

impl<T> Validated<T> {
    pub fn new(schema_version: SchemaVersion, report: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema_version,
            validated_at: Utc::now(),
            report,
        }
    }
}
