pub mod create_project_response;
pub mod projects;
