//! Shared client state.
//!
//! `session` is the login flag persisted across page loads; `expenses` and
//! `categories` hold per-page list state. All are plain structs with pure
//! helpers so they test natively without a browser.

pub mod categories;
pub mod expenses;
pub mod session;
