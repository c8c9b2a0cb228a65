//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: form handling, data fetches,
//! and the redirects that follow them. Shared chrome lives in `components`.

pub mod categories;
pub mod dashboard;
pub mod expense_form;
pub mod home;
pub mod login;
pub mod register;
