use super::*;

// =============================================================
// Login payloads
// =============================================================

#[test]
fn login_response_decodes_server_shape() {
    let body = r#"{
        "message": "Login successful",
        "user": {
            "_id": "66b2f0c1a9d4e812f3a45678",
            "username": "alice",
            "email": "alice@example.com",
            "first_name": "Alice",
            "last_name": "Liddell",
            "created_at": "2025-01-05T09:30:00"
        }
    }"#;

    let decoded: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(decoded.user.id, "66b2f0c1a9d4e812f3a45678");
    assert_eq!(decoded.user.username, "alice");
    assert_eq!(decoded.message.as_deref(), Some("Login successful"));
}

#[test]
fn login_response_tolerates_minimal_user() {
    let body = r#"{"user": {"_id": "u1", "username": "alice"}}"#;
    let decoded: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(decoded.user.id, "u1");
    assert_eq!(decoded.user.email, None);
    assert_eq!(decoded.message, None);
}

// =============================================================
// Failure payloads
// =============================================================

#[test]
fn failure_with_single_error_decodes() {
    let decoded: ApiFailure = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
    assert_eq!(decoded.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(decoded.errors, None);
}

#[test]
fn failure_with_field_map_decodes() {
    let decoded: ApiFailure =
        serde_json::from_str(r#"{"errors": {"email": "taken", "username": "too short"}}"#).unwrap();
    let field_errors = decoded.errors.unwrap();
    assert_eq!(field_errors.get("email").map(String::as_str), Some("taken"));
    assert_eq!(field_errors.len(), 2);
}

#[test]
fn empty_failure_body_decodes_to_default() {
    let decoded: ApiFailure = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded, ApiFailure::default());
}

#[test]
fn message_or_prefers_server_error() {
    let failure: ApiFailure = serde_json::from_str(r#"{"error": "bad creds"}"#).unwrap();
    assert_eq!(failure.message_or("Login failed"), "bad creds");
}

#[test]
fn message_or_falls_back_when_error_absent() {
    assert_eq!(ApiFailure::default().message_or("Login failed"), "Login failed");
}

#[test]
fn lines_or_yields_one_line_per_field_entry() {
    let failure: ApiFailure = serde_json::from_str(r#"{"errors": {"email": "taken"}}"#).unwrap();
    assert_eq!(failure.lines_or("Registration failed"), vec!["taken".to_owned()]);
}

#[test]
fn lines_or_keeps_stable_field_order() {
    let failure: ApiFailure =
        serde_json::from_str(r#"{"errors": {"username": "too short", "email": "taken"}}"#).unwrap();
    // BTreeMap ordering: "email" < "username".
    assert_eq!(
        failure.lines_or("Registration failed"),
        vec!["taken".to_owned(), "too short".to_owned()]
    );
}

#[test]
fn lines_or_with_empty_field_map_renders_nothing() {
    let failure: ApiFailure = serde_json::from_str(r#"{"errors": {}}"#).unwrap();
    assert!(failure.lines_or("Registration failed").is_empty());
}

#[test]
fn lines_or_without_field_map_falls_back_to_single_line() {
    let failure: ApiFailure = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
    assert_eq!(failure.lines_or("Registration failed"), vec!["nope".to_owned()]);

    assert_eq!(
        ApiFailure::default().lines_or("Registration failed"),
        vec!["Registration failed".to_owned()]
    );
}

// =============================================================
// Expense and category payloads
// =============================================================

#[test]
fn expense_list_response_decodes_server_shape() {
    let body = r#"{
        "expenses": [{
            "_id": "e1",
            "amount": 12.5,
            "description": "lunch",
            "category_id": "c1",
            "user_id": "u1",
            "date": "2025-03-14T00:00:00",
            "payment_method": "Cash",
            "created_at": "2025-03-14T12:00:00",
            "updated_at": "2025-03-14T12:00:00"
        }],
        "total": 1,
        "skip": 0,
        "limit": 50
    }"#;

    let decoded: ExpenseListResponse = serde_json::from_str(body).unwrap();
    assert_eq!(decoded.total, 1);
    assert_eq!(decoded.expenses[0].id, "e1");
    assert!((decoded.expenses[0].amount - 12.5).abs() < f64::EPSILON);
}

#[test]
fn expense_envelope_decodes() {
    let body = r#"{"expense": {
        "_id": "e1",
        "amount": 3.0,
        "description": "coffee",
        "category_id": "c1",
        "user_id": "u1",
        "date": "2025-03-14T00:00:00"
    }}"#;
    let decoded: ExpenseEnvelope = serde_json::from_str(body).unwrap();
    assert_eq!(decoded.expense.description, "coffee");
    assert_eq!(decoded.expense.payment_method, None);
}

#[test]
fn category_list_response_decodes_with_defaults() {
    let body = r##"{
        "categories": [
            {"_id": "c1", "name": "Food", "description": "", "color": "#3498db", "icon": "tag", "created_at": "2025-01-01T00:00:00"},
            {"_id": "c2", "name": "Travel"}
        ],
        "total": 2,
        "skip": 0,
        "limit": 100
    }"##;

    let decoded: CategoryListResponse = serde_json::from_str(body).unwrap();
    assert_eq!(decoded.categories.len(), 2);
    assert_eq!(decoded.categories[0].color.as_deref(), Some("#3498db"));
    assert_eq!(decoded.categories[1].color, None);
    assert_eq!(decoded.categories[1].user_id, None);
}
