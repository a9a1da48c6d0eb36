use crate::{ListContent, Notice, ProjectView, TerminalView};

use impact_core::ProjectRecord;

fn captured(view: TerminalView<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (out, err) = view.into_inner();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_projects_printed_one_per_line() {
    let view = TerminalView::new(Vec::new(), Vec::new());

    view.show_list(&ListContent::Projects(vec![
        ProjectRecord::new("Wells", "Planned"),
        ProjectRecord::new("<b>x</b>", "Ongoing"),
    ]));

    let (out, _) = captured(view);
    assert_eq!(out, "Wells [Planned]\n<b>x</b> [Ongoing]\n");
}

#[test]
fn test_placeholder_and_blank() {
    let view = TerminalView::new(Vec::new(), Vec::new());

    view.show_list(&ListContent::Blank);
    view.show_list(&ListContent::Empty);

    let (out, _) = captured(view);
    assert_eq!(out, "No projects found. Submit your first project above!\n");
}

#[test]
fn test_errors_go_to_stderr() {
    let view = TerminalView::new(Vec::new(), Vec::new());

    view.set_loading(true);
    view.show_notice(&Notice::error("Error: A, B"));
    view.show_notice(&Notice::success("Project submitted successfully!"));
    view.set_loading(false);

    let (out, err) = captured(view);
    assert_eq!(out, "Project submitted successfully!\n");
    assert_eq!(err, "Loading projects...\nError: A, B\n");
}
