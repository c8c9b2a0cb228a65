use std::cell::RefCell;

use super::*;
use crate::state::session::{USERNAME_KEY, USER_ID_KEY};
use crate::util::storage::MemoryStore;

fn make_user(id: &str, username: &str) -> SessionUser {
    serde_json::from_value(serde_json::json!({ "_id": id, "username": username })).unwrap()
}

#[test]
fn complete_login_persists_record_and_targets_dashboard() {
    let store = MemoryStore::new();
    let destination = RefCell::new(None::<String>);

    let state = complete_login(&store, &make_user("u1", "alice"), |path: &str| {
        *destination.borrow_mut() = Some(path.to_owned());
    });

    assert!(state.is_logged_in());
    assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u1"));
    assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("alice"));
    assert_eq!(destination.borrow().as_deref(), Some("/dashboard"));
}

#[test]
fn complete_login_overwrites_previous_session() {
    let store = MemoryStore::new();
    complete_login(&store, &make_user("u1", "alice"), |_| {});
    let state = complete_login(&store, &make_user("u2", "bob"), |_| {});

    assert_eq!(state.user_id.as_deref(), Some("u2"));
    assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u2"));
    assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("bob"));
}

#[test]
fn login_failure_text_uses_server_error() {
    let failure: ApiFailure = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
    assert_eq!(login_failure_text(&failure), "Invalid credentials");
}

#[test]
fn login_failure_text_falls_back_without_server_error() {
    assert_eq!(login_failure_text(&ApiFailure::default()), "Login failed");
}

#[test]
fn login_failure_text_ignores_field_error_maps() {
    // The login endpoint signals failure through `error` alone.
    let failure: ApiFailure =
        serde_json::from_str(r#"{"errors": {"email": "unknown"}}"#).unwrap();
    assert_eq!(login_failure_text(&failure), "Login failed");
}
