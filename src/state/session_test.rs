use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn default_state_is_logged_out() {
    assert!(!SessionState::default().is_logged_in());
}

#[test]
fn logged_in_iff_user_id_present() {
    let with_id = SessionState {
        user_id: Some("u1".to_owned()),
        username: None,
    };
    assert!(with_id.is_logged_in());

    let name_only = SessionState {
        user_id: None,
        username: Some("alice".to_owned()),
    };
    assert!(!name_only.is_logged_in());
}

#[test]
fn load_reads_both_entries() {
    let store = MemoryStore::new();
    store.set(USER_ID_KEY, "u1");
    store.set(USERNAME_KEY, "alice");

    let state = SessionState::load(&store);
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(state.is_logged_in());
}

#[test]
fn load_from_empty_store_is_logged_out() {
    let store = MemoryStore::new();
    let state = SessionState::load(&store);
    assert_eq!(state, SessionState::default());
}

#[test]
fn persist_writes_both_entries_and_reads_back_exactly() {
    let store = MemoryStore::new();
    let state = SessionState::persist(&store, "u1", "alice");

    assert!(state.is_logged_in());
    assert_eq!(store.get(USER_ID_KEY), Some("u1".to_owned()));
    assert_eq!(store.get(USERNAME_KEY), Some("alice".to_owned()));
    assert_eq!(SessionState::load(&store), state);
}

#[test]
fn persist_overwrites_a_previous_session() {
    let store = MemoryStore::new();
    SessionState::persist(&store, "u1", "alice");
    SessionState::persist(&store, "u2", "bob");

    assert_eq!(store.get(USER_ID_KEY), Some("u2".to_owned()));
    assert_eq!(store.get(USERNAME_KEY), Some("bob".to_owned()));
}

#[test]
fn clear_removes_both_entries() {
    let store = MemoryStore::new();
    SessionState::persist(&store, "u1", "alice");
    SessionState::clear(&store);

    assert_eq!(store.get(USER_ID_KEY), None);
    assert_eq!(store.get(USERNAME_KEY), None);
    assert!(!SessionState::load(&store).is_logged_in());
}

#[test]
fn clear_on_empty_store_is_noop() {
    let store = MemoryStore::new();
    SessionState::clear(&store);
    assert!(store.is_empty());
}
