//! Test doubles for the controller's two seams.

use crate::{ClientError, ClientResult, ListContent, Notice, ProjectApi, ProjectView};

use impact_core::{ProjectRecord, SubmissionEnvelope};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

/// In-memory API that records every call
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) projects: Mutex<Vec<ProjectRecord>>,
    pub(crate) created: Mutex<Vec<SubmissionEnvelope>>,
    pub(crate) list_calls: AtomicUsize,
    pub(crate) create_failure: Option<(u16, String)>,
    pub(crate) list_failure: Option<u16>,
}

impl FakeApi {
    pub(crate) fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }

    pub(crate) fn failing_create(status: u16, message: &str) -> Self {
        Self {
            create_failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub(crate) fn failing_list(status: u16) -> Self {
        Self {
            list_failure: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn created(&self) -> Vec<SubmissionEnvelope> {
        self.created.lock().unwrap().clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectApi for FakeApi {
    async fn create_project(&self, envelope: &SubmissionEnvelope) -> ClientResult<Value> {
        self.created.lock().unwrap().push(envelope.clone());

        if let Some((status, ref message)) = self.create_failure {
            return Err(ClientError::api_error(status, message.clone()));
        }

        let record = ProjectRecord::new(&envelope.project_name, envelope.status.as_str());
        self.projects.lock().unwrap().push(record.clone());
        Ok(json!({"message": "Project submitted successfully", "data": record}))
    }

    async fn list_projects(&self) -> ClientResult<Vec<ProjectRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.list_failure {
            return Err(ClientError::api_error(
                status,
                format!("HTTP error! status: {}", status),
            ));
        }

        Ok(self.projects.lock().unwrap().clone())
    }
}

/// Everything a view can be asked to do, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    Submitting(bool),
    Loading(bool),
    List(ListContent),
    Notice(Notice),
    HideNotice,
    ClearForm,
}

#[derive(Default)]
pub(crate) struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProjectView for RecordingView {
    fn set_submitting(&self, submitting: bool) {
        self.push(ViewEvent::Submitting(submitting));
    }

    fn set_loading(&self, visible: bool) {
        self.push(ViewEvent::Loading(visible));
    }

    fn show_list(&self, content: &ListContent) {
        self.push(ViewEvent::List(content.clone()));
    }

    fn show_notice(&self, notice: &Notice) {
        self.push(ViewEvent::Notice(notice.clone()));
    }

    fn hide_notice(&self) {
        self.push(ViewEvent::HideNotice);
    }

    fn clear_form(&self) {
        self.push(ViewEvent::ClearForm);
    }
}
