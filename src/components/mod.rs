//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared controls while reading the
//! session record from the Leptos context provider installed by the app
//! shell.

pub mod expense_row;
pub mod nav_bar;
