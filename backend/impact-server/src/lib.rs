//! impact-server library
//!
//! Reference HTTP API for the impact project tracker: accepts JSON-LD
//! project submissions and lists what it has stored in memory.

pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod store;


pub use api::{
    error::{ApiError, ApiErrorResponse, Result as ApiResult},
    projects::{
        create_project_response::CreateProjectResponse,
        projects::{create_project, list_projects},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use store::ProjectStore;

pub use crate::routes::build_router;
