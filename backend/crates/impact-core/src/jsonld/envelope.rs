use crate::{ProjectInput, ProjectStatus};

use serde::{Deserialize, Serialize};

/// Namespace the `ex:` prefix expands to
pub const IMPACT_NAMESPACE: &str = "http://example.org/impact/";

/// Fixed `@type` of every submission
pub const IMPACT_PROJECT_TYPE: &str = "ex:ImpactProject";

/// The `@context` block mapping the two payload fields onto the impact namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLdContext {
    pub ex: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub status: String,
}

impl Default for JsonLdContext {
    fn default() -> Self {
        Self {
            ex: IMPACT_NAMESPACE.to_string(),
            project_name: "ex:projectName".to_string(),
            status: "ex:status".to_string(),
        }
    }
}

/// JSON-LD body of `POST /projects`.
///
/// Context and type are always the constants above; only the two values vary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEnvelope {
    #[serde(rename = "@context")]
    pub context: JsonLdContext,
    #[serde(rename = "@type")]
    pub type_tag: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub status: ProjectStatus,
}

impl SubmissionEnvelope {
    pub fn new(input: &ProjectInput) -> Self {
        Self {
            context: JsonLdContext::default(),
            type_tag: IMPACT_PROJECT_TYPE.to_string(),
            project_name: input.project_name().to_string(),
            status: input.status(),
        }
    }
}

impl From<&ProjectInput> for SubmissionEnvelope {
    fn from(input: &ProjectInput) -> Self {
        Self::new(input)
    }
}
