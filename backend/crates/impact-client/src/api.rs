//! Seam between the controller and the remote projects API.

use crate::{Client, ClientResult};

use impact_core::{ProjectRecord, SubmissionEnvelope};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// The two remote operations the controller needs
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// `POST /projects`
    async fn create_project(&self, envelope: &SubmissionEnvelope) -> ClientResult<Value>;

    /// `GET /projects`
    async fn list_projects(&self) -> ClientResult<Vec<ProjectRecord>>;
}

#[async_trait]
impl ProjectApi for Client {
    async fn create_project(&self, envelope: &SubmissionEnvelope) -> ClientResult<Value> {
        Client::create_project(self, envelope).await
    }

    async fn list_projects(&self) -> ClientResult<Vec<ProjectRecord>> {
        Client::list_projects(self).await
    }
}

#[async_trait]
impl<T: ProjectApi + ?Sized> ProjectApi for Arc<T> {
    async fn create_project(&self, envelope: &SubmissionEnvelope) -> ClientResult<Value> {
        (**self).create_project(envelope).await
    }

    async fn list_projects(&self) -> ClientResult<Vec<ProjectRecord>> {
        (**self).list_projects().await
    }
}
