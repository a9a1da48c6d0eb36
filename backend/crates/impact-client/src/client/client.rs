use crate::{ApiErrorBody, ClientError, ClientResult};

use impact_core::{ProjectRecord, SubmissionEnvelope};

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

const PROJECTS_PATH: &str = "/projects";

/// HTTP client for the projects REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Submit a project envelope.
    ///
    /// A 2xx body is returned as-is. Any other status becomes
    /// [`ClientError::Api`] carrying the decoded server message.
    pub async fn create_project(&self, envelope: &SubmissionEnvelope) -> ClientResult<Value> {
        debug!("POST {}{}", self.base_url, PROJECTS_PATH);

        let response = self
            .request(Method::POST, PROJECTS_PATH)
            .json(envelope)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = ApiErrorBody::from_slice(&bytes);
            return Err(ClientError::api_error(status.as_u16(), body.message()));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// List all projects in server order.
    ///
    /// A `null` body is treated as an empty list.
    pub async fn list_projects(&self) -> ClientResult<Vec<ProjectRecord>> {
        debug!("GET {}{}", self.base_url, PROJECTS_PATH);

        let response = self.request(Method::GET, PROJECTS_PATH).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let bytes = response.bytes().await?;
        let projects: Option<Vec<ProjectRecord>> = serde_json::from_slice(&bytes)?;

        Ok(projects.unwrap_or_default())
    }
}
