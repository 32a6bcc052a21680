mod common;

use std::{future::pending, sync::atomic::Ordering, time::Duration};

use common::{biology_form, create_test_session, today, CannedProvider, BIOLOGY_PLAN};
use cram_core::{
    error::GENERATION_FAILED_MESSAGE, export_bytes, params::StudyForm, provider::ProviderError,
    PlannerError, RequestState, TaskPosition, Transition,
};

#[tokio::test]
async fn test_generate_success_installs_fresh_plan() {
    let (mut session, calls) = create_test_session(CannedProvider::ok(BIOLOGY_PLAN));

    let transition = session
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");

    assert_eq!(transition, Transition::Succeeded);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let controller = session.controller();
    assert_eq!(controller.state(), RequestState::Success);
    assert!(controller.error().is_none());

    let plan = controller.plan().expect("plan installed");
    assert_eq!(plan.title, "Cell Biology Review");
    assert_eq!(plan.tasks().count(), 3);
    // Generated plans always start unchecked, whatever the model says.
    assert!(plan.tasks().all(|task| !task.completed));
}

#[tokio::test]
async fn test_empty_topics_never_reach_provider() {
    let (mut session, calls) = create_test_session(CannedProvider::ok(BIOLOGY_PLAN));
    let form = StudyForm {
        topics: "   ".to_string(),
        ..biology_form()
    };

    let err = session
        .generate(&form, today(), pending())
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "topics"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let controller = session.controller();
    assert_eq!(controller.state(), RequestState::Idle);
    assert!(controller.error().unwrap().contains("Please enter the test topics."));
}

#[tokio::test]
async fn test_test_date_today_is_rejected() {
    let (mut session, calls) = create_test_session(CannedProvider::ok(BIOLOGY_PLAN));
    let form = StudyForm {
        test_date: "2026-10-19".to_string(),
        ..biology_form()
    };

    let err = session
        .generate(&form, today(), pending())
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "test_date"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(session
        .controller()
        .error()
        .unwrap()
        .contains("Please select a future date for the test."));
}

#[tokio::test]
async fn test_provider_failure_reports_generic_message() {
    let (mut session, _calls) = create_test_session(CannedProvider::failing(ProviderError::Http(
        "connection refused".to_string(),
    )));

    let transition = session
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");

    assert_eq!(transition, Transition::Failed);
    let controller = session.controller();
    assert_eq!(controller.state(), RequestState::Failed);
    assert_eq!(controller.error(), Some(GENERATION_FAILED_MESSAGE));
    assert!(controller.plan().is_none());
}

#[tokio::test]
async fn test_malformed_response_fails_generation() {
    let (mut session, _calls) = create_test_session(CannedProvider::ok(r#"{"title":"No weeks"}"#));

    let transition = session
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");

    assert_eq!(transition, Transition::Failed);
    assert_eq!(session.controller().error(), Some(GENERATION_FAILED_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_cancels_and_discards_late_result() {
    let provider = CannedProvider::ok(BIOLOGY_PLAN).delayed(Duration::from_secs(1));
    let (mut session, calls) = create_test_session(provider);

    let transition = session
        .generate(
            &biology_form(),
            today(),
            tokio::time::sleep(Duration::from_millis(10)),
        )
        .await
        .expect("valid form");

    assert_eq!(transition, Transition::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let controller = session.controller();
    assert_eq!(controller.state(), RequestState::Idle);
    assert!(controller.plan().is_none());
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn test_regenerate_after_failure_clears_error() {
    let (mut session, _calls) = create_test_session(CannedProvider::ok("not json at all"));
    session
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");
    assert_eq!(session.controller().state(), RequestState::Failed);

    // A successful import replaces the failure.
    let (mut other, _) = create_test_session(CannedProvider::ok(BIOLOGY_PLAN));
    other
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");
    let bytes = export_bytes(other.controller().plan().unwrap()).unwrap();

    let transition = session.controller_mut().import(&bytes).unwrap();
    assert_eq!(transition, Transition::Imported);
    assert_eq!(session.controller().state(), RequestState::Success);
    assert!(session.controller().error().is_none());
}

#[tokio::test]
async fn test_progress_survives_export_import() {
    let (mut session, _calls) = create_test_session(CannedProvider::ok(BIOLOGY_PLAN));
    session
        .generate(&biology_form(), today(), pending())
        .await
        .expect("valid form");

    let controller = session.controller_mut();
    assert!(controller.toggle_task(TaskPosition::new(0, 1, 0)));
    let bytes = export_bytes(controller.plan().unwrap()).unwrap();

    controller.reset();
    assert!(controller.plan().is_none());

    controller.import(&bytes).unwrap();
    let plan = controller.plan().unwrap();
    let flags: Vec<bool> = plan.tasks().map(|task| task.completed).collect();
    assert_eq!(flags, vec![false, false, true]);
}
