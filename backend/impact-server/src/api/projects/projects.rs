//! Project REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateProjectResponse};

use impact_core::{ProjectRecord, validate_envelope};

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use log::info;
use serde_json::Value;

/// POST /projects
///
/// Accept a JSON-LD project document. The raw body is parsed here rather than
/// through the `Json` extractor so malformed input gets the same error shape
/// as a failed validation.
pub async fn create_project(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreateProjectResponse>)> {
    let document: Value = serde_json::from_slice(&body)?;
    let input = validate_envelope(&document).map_err(ApiError::validation)?;

    let record = ProjectRecord::from(input);
    state.store.insert(record.clone()).await;

    info!("Stored project '{}' ({})", record.project_name, record.status);

    Ok((StatusCode::CREATED, Json(CreateProjectResponse::new(record))))
}

/// GET /projects
///
/// All stored projects in submission order
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectRecord>> {
    Json(state.store.all().await)
}
