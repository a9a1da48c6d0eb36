//! The submit and list flows.
//!
//! Each flow runs idle → in-flight → idle and reports its outcome twice: to
//! the view as a notice or list content, and to the caller as a `Result`.
//! Overlapping calls are not serialized; every render overwrites its region,
//! so the last flow to finish wins.

use crate::controller::SUBMIT_SUCCESS_MESSAGE;
use crate::controller::flow_guard::FlowGuard;
use crate::{ClientResult, ListContent, Notice, ProjectApi, ProjectForm, ProjectView};

use impact_core::{ProjectInput, ProjectRecord, SubmissionEnvelope};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, error};

/// Drives the two user actions against a [`ProjectApi`] and renders the
/// outcome into a [`ProjectView`].
pub struct Controller<A, V> {
    api: A,
    view: Arc<V>,
    notice_dismiss: Duration,
    /// Bumped on every notice so a pending dismissal can tell it was superseded
    notice_generation: Arc<AtomicU64>,
}

impl<A, V> Controller<A, V>
where
    A: ProjectApi,
    V: ProjectView,
{
    pub fn new(api: A, view: Arc<V>, notice_dismiss: Duration) -> Self {
        Self {
            api,
            view,
            notice_dismiss,
            notice_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// Validate the form, submit it, and refresh the list on success.
    ///
    /// Validation failures return before any request is made. The submit
    /// control is disabled for the duration of the request.
    pub async fn submit(&self, form: &ProjectForm) -> ClientResult<()> {
        debug!("Submitting project form");

        let outcome = {
            let _submitting = FlowGuard::submitting(self.view.as_ref());
            self.create(form).await
        };

        match outcome {
            Ok(()) => {
                self.notify(Notice::success(SUBMIT_SUCCESS_MESSAGE));
                self.view.clear_form();
                // Failures are already surfaced by list() itself
                self.list().await.ok();
                Ok(())
            }
            Err(e) => {
                error!("Error submitting project: {}", e);
                self.notify(Notice::error(format!("Error: {}", e.user_message())));
                Err(e)
            }
        }
    }

    /// Fetch and render the project list.
    ///
    /// The list region is cleared before the request so a failed reload never
    /// leaves stale entries behind; the loading indicator is hidden again on
    /// every exit path.
    pub async fn list(&self) -> ClientResult<Vec<ProjectRecord>> {
        debug!("Loading projects");

        self.view.show_list(&ListContent::Blank);
        let _loading = FlowGuard::loading(self.view.as_ref());

        match self.api.list_projects().await {
            Ok(records) => {
                debug!("Loaded {} projects", records.len());
                self.view.show_list(&ListContent::from_records(records.clone()));
                Ok(records)
            }
            Err(e) => {
                error!("Error loading projects: {}", e);
                self.notify(Notice::error(format!(
                    "Error loading projects: {}",
                    e.user_message()
                )));
                self.view.show_list(&ListContent::LoadFailed);
                Err(e)
            }
        }
    }

    async fn create(&self, form: &ProjectForm) -> ClientResult<()> {
        let input = ProjectInput::from_form(&form.project_name, &form.status)?;
        let envelope = SubmissionEnvelope::new(&input);

        self.api.create_project(&envelope).await?;
        Ok(())
    }

    /// Show a notice; success notices are hidden again after the dismiss delay
    /// unless a newer notice replaced them first.
    fn notify(&self, notice: Notice) {
        let generation = self.notice_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show_notice(&notice);

        if !notice.is_transient() {
            return;
        }

        let view = Arc::clone(&self.view);
        let current = Arc::clone(&self.notice_generation);
        let delay = self.notice_dismiss;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                view.hide_notice();
            }
        });
    }
}
