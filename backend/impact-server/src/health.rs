use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

pub const ROOT_MESSAGE: &str = "Impact Project Tracker API is running";

/// GET / - Banner confirming the API is up
pub async fn root() -> Response {
    (StatusCode::OK, Json(json!({ "message": ROOT_MESSAGE }))).into_response()
}

/// GET /health - Status, version, and server time
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
