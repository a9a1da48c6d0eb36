pub(crate) mod controller;
pub(crate) mod flow_guard;
pub(crate) mod project_form;

pub use controller::Controller;
pub use project_form::ProjectForm;

/// Notice shown after the server accepted a submission
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Project submitted successfully!";
/// Submit control label while idle
pub const SUBMIT_IDLE_LABEL: &str = "Submit Project";
/// Submit control label while a submission is in flight
pub const SUBMIT_BUSY_LABEL: &str = "Submitting...";
