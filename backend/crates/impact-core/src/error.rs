use crate::ProjectStatus;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Human-readable message without the source location
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidProjectStatus { .. } => ProjectStatus::allowed_values_message(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
