use crate::render::{render_list, render_notice, render_project};
use crate::{ListContent, Notice};

use impact_core::ProjectRecord;

#[test]
fn test_project_markup_escapes_name_and_status() {
    let html = render_project(&ProjectRecord::new("<b>x</b>", "Planned & <i>"));

    assert!(html.contains(r#"<div class="project-name">&lt;b&gt;x&lt;/b&gt;</div>"#));
    assert!(html.contains("Planned &amp; &lt;i&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_project_markup_carries_status_class() {
    let html = render_project(&ProjectRecord::new("Wells", "Ongoing"));

    assert_eq!(
        html,
        concat!(
            r#"<div class="project-item">"#,
            r#"<div class="project-name">Wells</div>"#,
            r#"<span class="project-status status-ongoing">Ongoing</span>"#,
            r#"</div>"#
        )
    );
}

#[test]
fn test_status_class_attribute_cannot_break_out() {
    let html = render_project(&ProjectRecord::new("Wells", r#"x" onclick="y"#));

    assert!(!html.contains(r#"onclick="y""#));
}

#[test]
fn test_list_keeps_record_order() {
    let html = render_list(&ListContent::Projects(vec![
        ProjectRecord::new("First", "Planned"),
        ProjectRecord::new("Second", "Completed"),
    ]));

    let first = html.find("First").unwrap();
    let second = html.find("Second").unwrap();
    assert!(first < second);
    assert_eq!(html.matches(r#"class="project-item""#).count(), 2);
}

#[test]
fn test_placeholders() {
    assert_eq!(render_list(&ListContent::Blank), "");
    assert_eq!(
        render_list(&ListContent::Empty),
        r#"<div class="empty-state">No projects found. Submit your first project above!</div>"#
    );
    assert_eq!(
        render_list(&ListContent::LoadFailed),
        r#"<div class="empty-state">Failed to load projects</div>"#
    );
}

#[test]
fn test_notice_markup() {
    let html = render_notice(&Notice::error("Error: <x>"), false);
    assert_eq!(
        html,
        r#"<div id="messageArea" class="message error">Error: &lt;x&gt;</div>"#
    );

    let hidden = render_notice(&Notice::success("Saved"), true);
    assert!(hidden.contains(r#"class="message success hidden""#));
}
