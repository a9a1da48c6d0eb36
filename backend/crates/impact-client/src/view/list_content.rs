use impact_core::ProjectRecord;

/// Placeholder shown when the server has no projects
pub const NO_PROJECTS_MESSAGE: &str = "No projects found. Submit your first project above!";

/// Placeholder shown in place of the list when loading failed
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects";

/// What the list region should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Nothing; the region is cleared while a load is in flight
    Blank,
    /// Records in the order the server returned them
    Projects(Vec<ProjectRecord>),
    /// The server returned no records
    Empty,
    /// The load failed
    LoadFailed,
}

impl ListContent {
    /// Projects, or the empty placeholder for an empty list
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        if records.is_empty() {
            ListContent::Empty
        } else {
            ListContent::Projects(records)
        }
    }

    /// Placeholder text, if this content is a placeholder
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListContent::Empty => Some(NO_PROJECTS_MESSAGE),
            ListContent::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            ListContent::Blank | ListContent::Projects(_) => None,
        }
    }
}
