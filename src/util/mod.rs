//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic: `storage` wraps `localStorage` behind a store trait,
//! `browser` wraps navigation and alert side effects, and `route_guard`
//! holds the protected-path policy.

pub mod browser;
pub mod route_guard;
pub mod storage;
