//! REST API error types
//!
//! Every error renders as `400 {"message": ..., "errors": [...]}` so a client
//! can show either the summary or the individual problems.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";
pub const INVALID_JSON_DETAIL: &str = "Request body must be valid JSON";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed or invalid JSON-LD";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not JSON at all (400)
    #[error("Invalid JSON: {source} {location}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    /// Body is JSON but not a valid project document (400)
    #[error("Validation failed: {} {location}", errors.join(", "))]
    Validation {
        errors: Vec<String>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{}", self);

        let body = match self {
            ApiError::InvalidJson { .. } => ApiErrorResponse {
                message: INVALID_JSON_MESSAGE.into(),
                errors: vec![INVALID_JSON_DETAIL.into()],
            },
            ApiError::Validation { errors, .. } => ApiErrorResponse {
                message: VALIDATION_FAILED_MESSAGE.into(),
                errors,
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ApiError::InvalidJson {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
