use futures::FutureExt;
use futures::executor::block_on;

use super::*;

fn delete_item() -> ConfirmOptions {
    ConfirmOptions::new("Delete item?").danger()
}

// =============================================================
// ConfirmOptions
// =============================================================

#[test]
fn options_default_labels_and_severity() {
    let options = ConfirmOptions::new("Proceed?");
    assert_eq!(options.title, None);
    assert_eq!(options.confirm_label, "OK");
    assert_eq!(options.cancel_label, "Cancel");
    assert_eq!(options.severity, Severity::Warning);
}

#[test]
fn options_builder_overrides_fields() {
    let options = ConfirmOptions::new("Remove code SPRING10?")
        .title("Delete discount")
        .confirm_label("Delete")
        .cancel_label("Keep")
        .severity(Severity::Info);
    assert_eq!(options.title.as_deref(), Some("Delete discount"));
    assert_eq!(options.confirm_label, "Delete");
    assert_eq!(options.cancel_label, "Keep");
    assert_eq!(options.severity.as_str(), "info");
}

// =============================================================
// ConfirmBroker
// =============================================================

#[test]
fn confirm_resolves_true() {
    let mut broker = ConfirmBroker::new();
    let answer = broker.request(delete_item());
    assert!(broker.is_pending());
    assert_eq!(broker.pending().map(|o| o.severity), Some(Severity::Danger));

    assert!(broker.resolve(true));
    assert!(!broker.is_pending());
    assert!(block_on(answer));
}

#[test]
fn cancel_resolves_false() {
    let mut broker = ConfirmBroker::new();
    let answer = broker.request(delete_item());
    assert!(broker.resolve(false));
    assert!(!block_on(answer));
}

#[test]
fn backdrop_cancel_resolves_false() {
    let mut broker = ConfirmBroker::new();
    let answer = broker.request(delete_item());
    assert!(broker.cancel());
    assert!(broker.pending().is_none());
    assert!(!block_on(answer));
}

#[test]
fn confirmation_stays_pending_until_answered() {
    let mut broker = ConfirmBroker::new();
    let mut answer = broker.request(delete_item());
    assert_eq!((&mut answer).now_or_never(), None);

    broker.resolve(true);
    assert_eq!(answer.now_or_never(), Some(true));
}

#[test]
fn second_resolve_is_noop() {
    let mut broker = ConfirmBroker::new();
    let answer = broker.request(delete_item());
    assert!(broker.resolve(true));
    assert!(!broker.resolve(false));
    assert!(block_on(answer));
}

#[test]
fn resolve_without_request_is_noop() {
    let mut broker = ConfirmBroker::new();
    assert!(!broker.resolve(true));
    assert!(!broker.cancel());
    assert_eq!(broker.pending_id(), None);
}

#[test]
fn new_request_supersedes_pending_one_with_false() {
    let mut broker = ConfirmBroker::new();
    let first = broker.request(ConfirmOptions::new("First?"));
    let first_id = broker.pending_id().expect("first pending");
    let second = broker.request(ConfirmOptions::new("Second?"));
    let second_id = broker.pending_id().expect("second pending");

    assert_ne!(first_id, second_id);
    assert_eq!(broker.pending().map(|o| o.message.as_str()), Some("Second?"));
    assert_eq!(first.now_or_never(), Some(false));

    broker.resolve(true);
    assert!(block_on(second));
}

#[test]
fn dropping_broker_settles_pending_with_false() {
    let mut broker = ConfirmBroker::new();
    let answer = broker.request(delete_item());
    drop(broker);
    assert_eq!(answer.now_or_never(), Some(false));
}

#[test]
fn dropped_confirmation_does_not_break_resolve() {
    let mut broker = ConfirmBroker::new();
    drop(broker.request(delete_item()));
    assert!(broker.resolve(true));
    assert!(!broker.is_pending());
}

#[test]
fn settled_confirmation_is_ready_immediately() {
    assert_eq!(Confirmation::settled(true).now_or_never(), Some(true));
    assert_eq!(Confirmation::settled(false).now_or_never(), Some(false));
}

#[test]
fn confirmation_ids_display_with_prefix() {
    let mut broker = ConfirmBroker::new();
    let _answer = broker.request(delete_item());
    let id = broker.pending_id().expect("pending");
    assert!(id.to_string().starts_with("confirm-"));
}
