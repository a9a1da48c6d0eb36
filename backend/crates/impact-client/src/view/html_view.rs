use crate::controller::{SUBMIT_BUSY_LABEL, SUBMIT_IDLE_LABEL};
use crate::render::{render_list, render_notice};
use crate::{ListContent, Notice, ProjectForm, ProjectView};

use std::sync::{Mutex, MutexGuard, PoisonError};

use html_escape::{encode_double_quoted_attribute, encode_text};

/// State of every page region at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub project_name: String,
    pub status: String,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub loading_hidden: bool,
    /// Inner HTML of the list container
    pub projects_html: String,
    pub notice: Option<Notice>,
    pub notice_hidden: bool,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            status: String::new(),
            submit_label: SUBMIT_IDLE_LABEL.to_string(),
            submit_disabled: false,
            loading_hidden: true,
            projects_html: String::new(),
            notice: None,
            notice_hidden: true,
        }
    }
}

/// In-memory HTML page: each region is kept as markup or flags and
/// overwritten by the controller.
#[derive(Debug, Default)]
pub struct HtmlView {
    document: Mutex<HtmlDocument>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> MutexGuard<'_, HtmlDocument> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Type into the form fields
    pub fn fill_form(&self, project_name: &str, status: &str) {
        let mut document = self.document();
        document.project_name = project_name.to_string();
        document.status = status.to_string();
    }

    /// Current form field values, as the submit action reads them
    pub fn form_values(&self) -> ProjectForm {
        let document = self.document();
        ProjectForm::new(&document.project_name, &document.status)
    }

    pub fn snapshot(&self) -> HtmlDocument {
        self.document().clone()
    }

    /// Markup of the whole page body
    pub fn render_page(&self) -> String {
        let document = self.document();

        let disabled = if document.submit_disabled {
            " disabled"
        } else {
            ""
        };
        let loading_class = if document.loading_hidden {
            "loading hidden"
        } else {
            "loading"
        };
        let message = match document.notice {
            Some(ref notice) => render_notice(notice, document.notice_hidden),
            None => r#"<div id="messageArea" class="message hidden"></div>"#.to_string(),
        };

        [
            r#"<form id="projectForm">"#.to_string(),
            format!(
                r#"<input name="projectName" value="{}">"#,
                encode_double_quoted_attribute(&document.project_name)
            ),
            format!(
                r#"<input name="status" value="{}">"#,
                encode_double_quoted_attribute(&document.status)
            ),
            format!(
                r#"<button id="submitBtn" type="submit"{}>{}</button>"#,
                disabled,
                encode_text(&document.submit_label)
            ),
            "</form>".to_string(),
            message,
            format!(
                r#"<div id="loadingIndicator" class="{}">Loading projects...</div>"#,
                loading_class
            ),
            format!(
                r#"<div id="projectsList">{}</div>"#,
                document.projects_html
            ),
        ]
        .join("\n")
    }
}

impl ProjectView for HtmlView {
    fn set_submitting(&self, submitting: bool) {
        let mut document = self.document();
        document.submit_disabled = submitting;
        document.submit_label = if submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_IDLE_LABEL
        }
        .to_string();
    }

    fn set_loading(&self, visible: bool) {
        self.document().loading_hidden = !visible;
    }

    fn show_list(&self, content: &ListContent) {
        self.document().projects_html = render_list(content);
    }

    fn show_notice(&self, notice: &Notice) {
        let mut document = self.document();
        document.notice = Some(notice.clone());
        document.notice_hidden = false;
    }

    fn hide_notice(&self) {
        self.document().notice_hidden = true;
    }

    fn clear_form(&self) {
        let mut document = self.document();
        document.project_name.clear();
        document.status.clear();
    }
}
