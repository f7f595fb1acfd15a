//! Version-tagged prompt templates.
//!
//! Each prompt revision is a named, independently-testable artifact paired
//! one-to-one with the schema revision it targets. The registry is an
//! immutable value built once and passed explicitly to the pipeline — prompt
//! text is never looked up through ambient state and never mutated.

pub mod audit;
pub mod evaluation;

use crate::schema::request::ResearchBundle;
use crate::schema::version::SchemaVersion;

pub use audit::build_audit_prompt;
pub use evaluation::build_evaluation_prompt;

/// Section delimiter used throughout the user prompts.
pub(crate) const SECTION_RULE: &str =
    "================================================================================";

/// Research phase titles, in phase order. Both builders render all five
/// sections; absent phases get the fixed placeholder.
pub(crate) const PHASE_TITLES: [&str; 5] = [
    "PHASE 1: FOUNDATIONAL BRAND RESEARCH",
    "PHASE 2: COMPETITIVE LANDSCAPE & MARKET SIZING",
    "PHASE 3: BENCHMARKING & UNIT ECONOMICS",
    "PHASE 4: DEEP VALIDATION & STRATEGIC CONTEXT",
    "PHASE 5: DIGITAL & SOCIAL ANALYSIS",
];

/// Closing reminder appended to every user prompt. The JSON-only contract is
/// stated in the system prompt too; the duplication is intentional.
pub(crate) const JSON_ONLY_REMINDER: &str = "\
OUTPUT: Valid JSON only. No explanations, no markdown fences, no text before \
or after the JSON object. Start with { and end with }.";

pub(crate) fn push_section(prompt: &mut String, title: &str) {
    prompt.push_str(SECTION_RULE);
    prompt.push('\n');
    prompt.push_str(title);
    prompt.push('\n');
    prompt.push_str(SECTION_RULE);
    prompt.push_str("\n\n");
}

pub(crate) fn push_research_sections(prompt: &mut String, research: &ResearchBundle) {
    for (i, title) in PHASE_TITLES.iter().enumerate() {
        push_section(prompt, &format!("RESEARCH DATA - {title}"));
        prompt.push_str(research.phase(i + 1));
        prompt.push_str("\n\n");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptVersion {
    EvaluationV1,
    EvaluationV2,
    AuditV1,
}

/// One prompt revision: the system prompt text and the schema revision whose
/// validator its output contract targets.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub version: PromptVersion,
    pub schema_version: SchemaVersion,
    pub system: &'static str,
}

/// All known prompt revisions. Old revisions stay registered so stored
/// reports can be traced back to the template that produced them.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<PromptTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: vec![
                PromptTemplate {
                    version: PromptVersion::EvaluationV1,
                    schema_version: SchemaVersion::EvaluationV1,
                    system: evaluation::EVALUATION_SYSTEM_V1,
                },
                PromptTemplate {
                    version: PromptVersion::EvaluationV2,
                    schema_version: SchemaVersion::EvaluationV2,
                    system: evaluation::EVALUATION_SYSTEM_V2,
                },
                PromptTemplate {
                    version: PromptVersion::AuditV1,
                    schema_version: SchemaVersion::AuditV1,
                    system: audit::AUDIT_SYSTEM_V1,
                },
            ],
        }
    }

    pub fn get(&self, version: PromptVersion) -> Option<&PromptTemplate> {
        self.templates.iter().find(|t| t.version == version)
    }

    pub fn latest_evaluation(&self) -> &PromptTemplate {
        self.get(PromptVersion::EvaluationV2)
            .expect("registry always contains the latest evaluation template")
    }

    pub fn latest_audit(&self) -> &PromptTemplate {
        self.get(PromptVersion::AuditV1)
            .expect("registry always contains the latest audit template")
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
