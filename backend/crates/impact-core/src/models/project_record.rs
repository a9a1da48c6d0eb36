use crate::ProjectInput;

use serde::{Deserialize, Serialize};

/// A project as stored and returned by the API.
///
/// `status` stays free text on this side of the wire: records are rendered as
/// received, and an unknown status must not make the whole list undecodable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub project_name: String,
    pub status: String,
}

impl ProjectRecord {
    pub fn new(project_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            status: status.into(),
        }
    }

    /// CSS class used to color the status badge, e.g. `status-ongoing`
    pub fn status_class(&self) -> String {
        format!("status-{}", self.status.to_lowercase())
    }
}

impl From<ProjectInput> for ProjectRecord {
    fn from(input: ProjectInput) -> Self {
        Self {
            project_name: input.project_name().to_string(),
            status: input.status().as_str().to_string(),
        }
    }
}
