/// Raw form values as typed by the user, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub project_name: String,
    pub status: String,
}

impl ProjectForm {
    pub fn new(project_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            status: status.into(),
        }
    }
}
