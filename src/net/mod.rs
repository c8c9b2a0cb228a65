//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (browser-only), `types` defines the serde
//! DTOs matching the server's JSON.

pub mod api;
pub mod types;
