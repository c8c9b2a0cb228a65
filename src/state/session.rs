//! Persisted login flag for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is two string entries in origin-scoped storage,
//! written by a successful login and removed by logout. It is the sole
//! source of truth for "is a user logged in": the route guard, the nav
//! chrome, and the authenticated pages all read it through the shared
//! session signal.
//!
//! The record is never mutated in place: login overwrites both entries,
//! logout removes both. Login state depends on `userId` alone; `username`
//! is display-only and may be absent independently.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::KeyValueStore;

/// Storage key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "userId";
/// Storage key holding the signed-in user's display name.
pub const USERNAME_KEY: &str = "username";

/// Snapshot of the persisted session record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub username: Option<String>,
}

impl SessionState {
    /// True iff a user id is stored. `username` has no bearing on this.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Read the session record out of `store`.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            user_id: store.get(USER_ID_KEY),
            username: store.get(USERNAME_KEY),
        }
    }

    /// Overwrite both entries with a freshly signed-in user and return the
    /// matching snapshot.
    pub fn persist(store: &impl KeyValueStore, user_id: &str, username: &str) -> Self {
        store.set(USER_ID_KEY, user_id);
        store.set(USERNAME_KEY, username);
        Self {
            user_id: Some(user_id.to_owned()),
            username: Some(username.to_owned()),
        }
    }

    /// Remove both entries. Safe to call with no session present.
    pub fn clear(store: &impl KeyValueStore) {
        store.remove(USER_ID_KEY);
        store.remove(USERNAME_KEY);
    }
}
