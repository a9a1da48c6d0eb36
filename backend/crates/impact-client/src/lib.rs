//! impact-client library
//!
//! HTTP client for the projects API, the controller that drives the submit
//! and list flows, and the views those flows render into.

pub mod api;
pub mod client;
pub mod controller;
pub mod render;
pub mod view;


pub use api::ProjectApi;
pub use client::{ApiErrorBody, Client, ClientError, ClientResult};
pub use controller::{
    Controller, ProjectForm, SUBMIT_BUSY_LABEL, SUBMIT_IDLE_LABEL, SUBMIT_SUCCESS_MESSAGE,
};
pub use view::{
    HtmlDocument, HtmlView, LOAD_FAILED_MESSAGE, ListContent, NO_PROJECTS_MESSAGE, Notice,
    NoticeKind, ProjectView, TerminalView,
};
