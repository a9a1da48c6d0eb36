//! HTML markup for the list and message regions.
//!
//! All record text is escaped; the server is not trusted to send safe markup.

use crate::{ListContent, Notice};

use impact_core::ProjectRecord;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Markup for the whole list region
pub fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::Blank => String::new(),
        ListContent::Projects(records) => records.iter().map(render_project).collect(),
        ListContent::Empty | ListContent::LoadFailed => {
            render_empty_state(content.placeholder().unwrap_or_default())
        }
    }
}

/// Markup for a single project entry
pub fn render_project(record: &ProjectRecord) -> String {
    format!(
        concat!(
            r#"<div class="project-item">"#,
            r#"<div class="project-name">{name}</div>"#,
            r#"<span class="project-status {class}">{status}</span>"#,
            r#"</div>"#,
        ),
        name = encode_text(&record.project_name),
        class = encode_double_quoted_attribute(&record.status_class()),
        status = encode_text(&record.status),
    )
}

/// Markup for the message region
pub fn render_notice(notice: &Notice, hidden: bool) -> String {
    let mut class = notice.css_class();
    if hidden {
        class.push_str(" hidden");
    }

    format!(
        r#"<div id="messageArea" class="{class}">{text}</div>"#,
        class = encode_double_quoted_attribute(&class),
        text = encode_text(&notice.text),
    )
}

fn render_empty_state(text: &str) -> String {
    format!(r#"<div class="empty-state">{}</div>"#, encode_text(text))
}
