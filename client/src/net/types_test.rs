use super::*;

#[test]
fn client_config_defaults_to_relative_api() {
    assert_eq!(ClientConfig::default().api_base_url, "/api");
}

#[test]
fn user_role_defaults_to_empty_and_is_not_admin() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ops@example.com",
        "name": "Ops"
    }))
    .expect("user");
    assert_eq!(user.role, "");
    assert!(!user.is_admin());
}

#[test]
fn login_response_parses_token_and_user() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "a.b.c",
        "user": { "id": "u1", "email": "a@b.c", "name": "A", "role": "admin" }
    }))
    .expect("login response");
    assert_eq!(resp.token, "a.b.c");
    assert!(resp.user.is_admin());
}

#[test]
fn order_status_uses_lowercase_wire_names() {
    let status: OrderStatus = serde_json::from_str("\"shipped\"").expect("status");
    assert_eq!(status, OrderStatus::Shipped);
    assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).expect("json"), "\"cancelled\"");
}

#[test]
fn only_unshipped_orders_can_be_cancelled() {
    assert!(OrderStatus::Pending.can_cancel());
    assert!(OrderStatus::Paid.can_cancel());
    assert!(!OrderStatus::Shipped.can_cancel());
    assert!(!OrderStatus::Delivered.can_cancel());
    assert!(!OrderStatus::Cancelled.can_cancel());
}

#[test]
fn discount_code_tolerates_missing_counters() {
    let code: DiscountCode = serde_json::from_value(serde_json::json!({
        "id": "d1",
        "code": "SPRING10",
        "percent_off": 10,
        "expires_at": null
    }))
    .expect("discount");
    assert!(!code.active);
    assert_eq!(code.usage_count, 0);
}

#[test]
fn new_discount_from_form_normalizes_input() {
    let payload = NewDiscountCode::from_form("  spring10 ", " 15 ", "").expect("valid");
    assert_eq!(payload.code, "SPRING10");
    assert_eq!(payload.percent_off, 15);
    assert_eq!(payload.expires_at, None);

    let dated = NewDiscountCode::from_form("SUMMER", "20", "2026-08-31").expect("valid");
    assert_eq!(dated.expires_at.as_deref(), Some("2026-08-31"));
}

#[test]
fn new_discount_from_form_rejects_bad_input() {
    assert!(NewDiscountCode::from_form("   ", "10", "").is_err());
    assert!(NewDiscountCode::from_form("HALF OFF", "50", "").is_err());
    assert!(NewDiscountCode::from_form("ZERO", "0", "").is_err());
    assert!(NewDiscountCode::from_form("TOO-MUCH", "101", "").is_err());
    assert!(NewDiscountCode::from_form("NAN", "ten", "").is_err());
}

#[test]
fn format_cents_renders_dollars() {
    assert_eq!(format_cents(0), "$0.00");
    assert_eq!(format_cents(1999), "$19.99");
    assert_eq!(format_cents(100_005), "$1000.05");
    assert_eq!(format_cents(-250), "-$2.50");
}
