mod helpers;

use std::time::Duration;

use helpers::{FakeForm, MockEndpoint, controller, valid_draft};
use serde_json::{Value, json};
use tricity::prelude::*;
use tricity::submit::{GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE};

#[tokio::test]
async fn successful_submission_resets_form_and_toasts() {
    let endpoint = MockEndpoint::answering(201, r#"{"success":true,"message":"Created"}"#);
    let (controller, toast, clock) = controller(FakeForm::filled(valid_draft()), endpoint.clone());

    let report = controller.submit().await;

    assert_eq!(report, SubmitReport::Submitted);
    assert_eq!(*controller.view().fields.borrow(), QuoteDraft::default());
    assert_eq!(*controller.view().char_count.borrow(), "0");
    assert!(!*controller.view().button_disabled.borrow());
    assert!(!*controller.view().loader_visible.borrow());

    assert_eq!(toast.visible_text().as_deref(), Some(SUCCESS_MESSAGE));
    assert_eq!(toast.class_name(), "toast success");

    clock.advance(Duration::from_millis(4999));
    assert!(toast.visible_text().is_some());

    clock.advance(Duration::from_millis(1));
    assert_eq!(toast.visible_text(), None);
    assert_eq!(clock.pending(), 0);
}

#[tokio::test]
async fn rejected_submission_shows_server_message_and_keeps_values() {
    let endpoint =
        MockEndpoint::answering(409, r#"{"success":false,"message":"Duplicate request"}"#);
    let (controller, toast, _clock) = controller(FakeForm::filled(valid_draft()), endpoint);

    let report = controller.submit().await;

    assert!(matches!(report, SubmitReport::Failed(SubmitError::Rejected { status: 409, .. })));
    assert_eq!(toast.visible_text().as_deref(), Some("Duplicate request"));
    assert_eq!(toast.class_name(), "toast error");
    assert_eq!(*controller.view().fields.borrow(), valid_draft());
    assert!(!*controller.view().button_disabled.borrow());
}

#[tokio::test]
async fn malformed_response_uses_generic_notice() {
    let endpoint = MockEndpoint::answering(502, "<html>Bad Gateway</html>");
    let (controller, toast, _clock) = controller(FakeForm::filled(valid_draft()), endpoint);

    let report = controller.submit().await;

    assert!(matches!(report, SubmitReport::Failed(SubmitError::Malformed(_))));
    assert_eq!(toast.visible_text().as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(*controller.view().fields.borrow(), valid_draft());
}

#[tokio::test]
async fn validation_failure_sends_nothing() {
    let endpoint = MockEndpoint::answering(201, r#"{"success":true}"#);
    let draft = QuoteDraft {
        first_name: "   ".to_owned(),
        email: "dana@example".to_owned(),
        message: "x".repeat(501),
        ..QuoteDraft::default()
    };
    let (controller, toast, _clock) = controller(FakeForm::filled(draft), endpoint.clone());

    let report = controller.submit().await;

    assert!(matches!(report, SubmitReport::Invalid(ref errors) if errors.len() == 3));
    assert!(endpoint.received.borrow().is_empty());
    assert_eq!(toast.visible_text(), None);
    assert_eq!(
        *controller.view().inline_errors.borrow(),
        vec![
            ("firstNameError".to_owned(), "First name is required".to_owned()),
            ("emailError".to_owned(), "Please enter a valid email address".to_owned()),
            (
                "messageError".to_owned(),
                "Message must be 500 characters or less".to_owned()
            ),
        ]
    );
}

#[tokio::test]
async fn payload_omits_blank_optional_fields() {
    let endpoint = MockEndpoint::answering(201, r#"{"success":true}"#);
    let draft = QuoteDraft {
        first_name: "Dana".to_owned(),
        last_name: "  ".to_owned(),
        email: " dana@example.com ".to_owned(),
        phone: "\t".to_owned(),
        service: String::new(),
        message: "   ".to_owned(),
    };
    let (controller, _toast, _clock) = controller(FakeForm::filled(draft), endpoint.clone());

    controller.submit().await;

    let received = endpoint.received.borrow();
    assert_eq!(received.len(), 1);
    let payload: Value = serde_json::from_str(&received[0]).unwrap();
    assert_eq!(payload, json!({ "firstName": "Dana", "email": "dana@example.com" }));
}

#[tokio::test]
async fn new_toast_waits_for_previous_to_hide() {
    let failing = MockEndpoint::answering(500, r#"{"message":"Service unavailable"}"#);
    let (controller, toast, clock) = controller(FakeForm::filled(valid_draft()), failing);

    controller.submit().await;
    assert_eq!(toast.visible_text().as_deref(), Some("Service unavailable"));
    assert_eq!(clock.pending(), 1);

    clock.advance(Duration::from_secs(3));
    controller.toaster().show("Second", ToastKind::Success);

    // Old toast is hiding and its dismiss timer is gone; nothing new shown yet.
    // Only the hide-transition fallback is pending.
    assert_eq!(clock.pending(), 1);
    assert_eq!(toast.visible_text(), None);
    assert_eq!(toast.class_name(), "toast error hidden");

    toast.end_transition();
    assert_eq!(toast.visible_text().as_deref(), Some("Second"));
    assert_eq!(toast.class_name(), "toast success");

    // The cancelled timer would have fired here.
    clock.advance(Duration::from_secs(2));
    assert_eq!(toast.visible_text().as_deref(), Some("Second"));

    clock.advance(Duration::from_secs(3));
    assert_eq!(toast.visible_text(), None);
}

#[tokio::test]
async fn resubmitting_after_failure_swaps_toasts() {
    let failing = MockEndpoint::answering(409, r#"{"success":false,"message":"Duplicate request"}"#);
    let (controller, toast, clock) = controller(FakeForm::filled(valid_draft()), failing);

    controller.submit().await;
    controller.submit().await;

    // The second failure toast waits for the first to finish hiding.
    assert_eq!(toast.visible_text(), None);
    assert_eq!(clock.pending(), 1);

    toast.end_transition();
    assert_eq!(toast.visible_text().as_deref(), Some("Duplicate request"));
    assert_eq!(clock.pending(), 1);
}

#[tokio::test]
async fn stalled_hide_transition_still_shows_next_toast() {
    let failing = MockEndpoint::answering(409, r#"{"success":false,"message":"Duplicate request"}"#);
    let (controller, toast, clock) = controller(FakeForm::filled(valid_draft()), failing);

    controller.submit().await;
    controller.submit().await;
    assert_eq!(toast.visible_text(), None);

    // No transitionend ever arrives.
    clock.advance(HIDE_TRANSITION_TIMEOUT);
    assert_eq!(toast.visible_text().as_deref(), Some("Duplicate request"));

    controller.toaster().show("Third", ToastKind::Success);
    clock.advance(HIDE_TRANSITION_TIMEOUT);
    assert_eq!(toast.visible_text().as_deref(), Some("Third"));

    // The listener left over from the first swap changes nothing.
    toast.end_transition();
    assert_eq!(toast.visible_text().as_deref(), Some("Third"));
    assert_eq!(clock.pending(), 1);
}
