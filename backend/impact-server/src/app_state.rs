use crate::ProjectStore;

/// Shared state handed to every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: ProjectStore,
}

impl AppState {
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }
}
