use impact_core::ProjectRecord;

use std::sync::Arc;

use tokio::sync::RwLock;

/// In-memory project storage shared by all handlers.
///
/// Clones share the same records. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<Vec<ProjectRecord>>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: ProjectRecord) {
        self.projects.write().await.push(record);
    }

    /// Snapshot of every record in insertion order
    pub async fn all(&self) -> Vec<ProjectRecord> {
        self.projects.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}
