use crate::{AppState, create_project, health, list_projects};

use axum::{Router, routing::get};
use http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .with_state(state)
        // Browser clients are served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
