use std::collections::HashSet;

use super::*;
use crate::components::toast_host::Toasts;
use notices::{Severity, ToastKind};

fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_owned(),
        customer_email: "ada@example.com".to_owned(),
        status,
        total_cents: 4250,
        item_count: 3,
        created_at: "2026-01-02T10:00:00Z".to_owned(),
    }
}

#[test]
fn cancel_question_is_a_danger_confirmation_naming_the_order() {
    let q = cancel_question(&order("ord-7", OrderStatus::Paid));
    assert_eq!(q.severity, Severity::Danger);
    assert_eq!(q.title.as_deref(), Some("Cancel order?"));
    assert_eq!(q.confirm_label, "Cancel order");
    assert_eq!(q.cancel_label, "Keep order");
    assert!(q.message.contains("ord-7"));
    assert!(q.message.contains("ada@example.com"));
    assert!(q.message.contains("$42.50"));
}

#[test]
fn replace_order_swaps_matching_entry_in_place() {
    let mut list = vec![order("a", OrderStatus::Pending), order("b", OrderStatus::Paid)];
    assert!(replace_order(&mut list, order("b", OrderStatus::Cancelled)));
    assert_eq!(list[0].status, OrderStatus::Pending);
    assert_eq!(list[1].status, OrderStatus::Cancelled);
    assert_eq!(list.len(), 2);
}

#[test]
fn replace_order_ignores_unknown_id() {
    let mut list = vec![order("a", OrderStatus::Pending)];
    assert!(!replace_order(&mut list, order("zzz", OrderStatus::Cancelled)));
    assert_eq!(list, vec![order("a", OrderStatus::Pending)]);
}

#[test]
fn status_class_uses_lowercase_modifier() {
    assert_eq!(status_class(OrderStatus::Shipped), "order-status order-status--shipped");
    assert_eq!(status_class(OrderStatus::Cancelled), "order-status order-status--cancelled");
}

#[test]
fn order_key_changes_with_status() {
    let pending = order("ord-1", OrderStatus::Pending);
    let cancelled = order("ord-1", OrderStatus::Cancelled);
    let keys: HashSet<_> = [order_key(&pending), order_key(&cancelled), order_key(&pending)].into_iter().collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&("ord-1".to_owned(), OrderStatus::Cancelled)));
}

#[test]
fn cancel_in_flight_allows_first_cancel_silently() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = Toasts::new();
        let busy_id = RwSignal::new(None::<String>);
        assert!(!cancel_in_flight(busy_id, toasts));
        assert!(toasts.active().is_empty());
    });
}

#[test]
fn cancel_in_flight_blocks_second_cancel_with_notice() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = Toasts::new();
        let busy_id = RwSignal::new(Some("ord-1".to_owned()));
        assert!(cancel_in_flight(busy_id, toasts));
        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, ToastKind::Info);
        assert_eq!(active[0].title, "Another cancellation is in progress");
    });
}
