use super::*;

fn draft() -> ExpenseDraft {
    ExpenseDraft {
        amount: "12.50".to_owned(),
        description: "lunch".to_owned(),
        category_id: "c1".to_owned(),
        date: String::new(),
        payment_method: String::new(),
    }
}

/// The body as it goes over the wire.
fn wire_body(draft: &ExpenseDraft) -> serde_json::Value {
    serde_json::to_value(expense_body(draft, "u1")).unwrap()
}

#[test]
fn body_sends_parseable_amounts_as_numbers() {
    let payload = wire_body(&draft());
    assert_eq!(payload["amount"], serde_json::json!(12.5));
}

#[test]
fn body_keeps_unparseable_amounts_as_strings() {
    let mut d = draft();
    d.amount = "abc".to_owned();
    let payload = wire_body(&d);
    assert_eq!(payload["amount"], serde_json::json!("abc"));

    d.amount = String::new();
    let payload = wire_body(&d);
    assert_eq!(payload["amount"], serde_json::json!(""));
}

#[test]
fn body_always_carries_user_and_category() {
    let payload = wire_body(&draft());
    assert_eq!(payload["user_id"], serde_json::json!("u1"));
    assert_eq!(payload["category_id"], serde_json::json!("c1"));
    assert_eq!(payload["description"], serde_json::json!("lunch"));
}

#[test]
fn body_omits_empty_date() {
    assert_eq!(expense_body(&draft(), "u1").date, None);
    let payload = wire_body(&draft());
    assert!(payload.get("date").is_none());
}

#[test]
fn body_includes_set_date() {
    let mut d = draft();
    d.date = "2025-03-14".to_owned();
    let payload = wire_body(&d);
    assert_eq!(payload["date"], serde_json::json!("2025-03-14"));
}

#[test]
fn body_omits_empty_payment_method() {
    let payload = wire_body(&draft());
    assert!(payload.get("payment_method").is_none());
}

#[test]
fn body_includes_set_payment_method() {
    let mut d = draft();
    d.payment_method = "Credit Card".to_owned();
    let payload = wire_body(&d);
    assert_eq!(payload["payment_method"], serde_json::json!("Credit Card"));
}
