pub mod project_input;
pub mod project_record;
pub mod project_status;
