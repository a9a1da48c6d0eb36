use crate::tests::support::{FakeApi, RecordingView, ViewEvent};
use crate::{Controller, ListContent, Notice};

use impact_core::ProjectRecord;

use std::sync::Arc;
use std::time::Duration;

fn controller(api: FakeApi) -> Controller<FakeApi, RecordingView> {
    Controller::new(
        api,
        Arc::new(RecordingView::default()),
        Duration::from_secs(3),
    )
}

#[tokio::test]
async fn given_no_projects_when_list_then_empty_placeholder() {
    let controller = controller(FakeApi::default());

    let records = controller.list().await.unwrap();

    assert!(records.is_empty());
    assert_eq!(
        controller.view().events(),
        vec![
            ViewEvent::List(ListContent::Blank),
            ViewEvent::Loading(true),
            ViewEvent::List(ListContent::Empty),
            ViewEvent::Loading(false),
        ]
    );
}

#[tokio::test]
async fn given_projects_when_list_then_rendered_in_server_order() {
    let projects = vec![
        ProjectRecord::new("Zeta", "Completed"),
        ProjectRecord::new("Alpha", "Planned"),
        ProjectRecord::new("Mid", "Ongoing"),
    ];
    let controller = controller(FakeApi::with_projects(projects.clone()));

    let records = controller.list().await.unwrap();

    assert_eq!(records, projects);
    assert!(
        controller
            .view()
            .events()
            .contains(&ViewEvent::List(ListContent::Projects(projects)))
    );
}

#[tokio::test]
async fn given_server_error_when_list_then_failed_placeholder_and_indicator_hidden() {
    let controller = controller(FakeApi::failing_list(500));

    let err = controller.list().await.unwrap_err();

    assert_eq!(err.user_message(), "HTTP error! status: 500");
    assert_eq!(
        controller.view().events(),
        vec![
            ViewEvent::List(ListContent::Blank),
            ViewEvent::Loading(true),
            ViewEvent::Notice(Notice::error(
                "Error loading projects: HTTP error! status: 500"
            )),
            ViewEvent::List(ListContent::LoadFailed),
            ViewEvent::Loading(false),
        ]
    );
}
