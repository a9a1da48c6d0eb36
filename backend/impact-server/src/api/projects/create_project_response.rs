use impact_core::ProjectRecord;

use serde::Serialize;

pub const PROJECT_CREATED_MESSAGE: &str = "Project submitted successfully";

/// Body of a `201 Created` answer to `POST /projects`
#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub message: String,
    pub data: ProjectRecord,
}

impl CreateProjectResponse {
    pub fn new(data: ProjectRecord) -> Self {
        Self {
            message: PROJECT_CREATED_MESSAGE.to_string(),
            data,
        }
    }
}
