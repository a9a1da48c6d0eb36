use crate::tests::support::{FakeApi, RecordingView, ViewEvent};
use crate::{Controller, ProjectForm};

use std::sync::Arc;
use std::time::Duration;

const DISMISS: Duration = Duration::from_secs(3);
const JUST_BEFORE: Duration = Duration::from_millis(2_999);
const WAIT: Duration = Duration::from_secs(5);

#[tokio::test(start_paused = true)]
async fn given_success_notice_when_delay_passes_then_hidden() {
    let controller = Controller::new(
        FakeApi::default(),
        Arc::new(RecordingView::default()),
        DISMISS,
    );

    controller
        .submit(&ProjectForm::new("Bee Corridors", "Planned"))
        .await
        .unwrap();
    assert!(!controller.view().events().contains(&ViewEvent::HideNotice));

    tokio::time::sleep(JUST_BEFORE).await;
    assert!(!controller.view().events().contains(&ViewEvent::HideNotice));

    tokio::time::sleep(WAIT).await;
    assert_eq!(controller.view().events().last(), Some(&ViewEvent::HideNotice));
}

#[tokio::test(start_paused = true)]
async fn given_error_notice_when_delay_passes_then_still_visible() {
    let controller = Controller::new(
        FakeApi::failing_create(400, "bad status"),
        Arc::new(RecordingView::default()),
        DISMISS,
    );

    controller
        .submit(&ProjectForm::new("Bee Corridors", "Planned"))
        .await
        .ok();
    tokio::time::sleep(WAIT).await;

    assert!(!controller.view().events().contains(&ViewEvent::HideNotice));
}

#[tokio::test(start_paused = true)]
async fn given_success_then_failed_refresh_when_delay_passes_then_error_not_dismissed() {
    let controller = Controller::new(
        FakeApi::failing_list(503),
        Arc::new(RecordingView::default()),
        DISMISS,
    );

    controller
        .submit(&ProjectForm::new("Bee Corridors", "Planned"))
        .await
        .unwrap();
    tokio::time::sleep(WAIT).await;

    assert!(!controller.view().events().contains(&ViewEvent::HideNotice));
}
