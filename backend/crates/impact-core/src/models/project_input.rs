//! Validated form input for a new impact project.

use crate::{CoreError, ProjectStatus, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Message surfaced when either form field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// A project name and status that passed client-side validation.
///
/// Only ever built through [`ProjectInput::from_form`] or [`ProjectInput::new`],
/// so `project_name` is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    project_name: String,
    status: ProjectStatus,
}

impl ProjectInput {
    #[track_caller]
    pub fn new(project_name: &str, status: ProjectStatus) -> CoreErrorResult<Self> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(CoreError::Validation {
                message: REQUIRED_FIELDS_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            project_name: project_name.to_string(),
            status,
        })
    }

    /// Validate raw form values.
    ///
    /// The name is trimmed before the emptiness check. An empty status is a
    /// missing field; a non-empty status outside the vocabulary is rejected
    /// with the list of accepted values.
    #[track_caller]
    pub fn from_form(project_name: &str, status: &str) -> CoreErrorResult<Self> {
        let status = status.trim();
        if project_name.trim().is_empty() || status.is_empty() {
            return Err(CoreError::Validation {
                message: REQUIRED_FIELDS_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let status = ProjectStatus::from_str(status)?;
        Self::new(project_name, status)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }
}
