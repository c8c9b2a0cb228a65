//! # spendtrack-client
//!
//! Leptos + WASM frontend for the SpendTrack expense tracker. Replaces the
//! hand-written browser-glue script that shipped with the server-rendered
//! templates with a Rust-native UI layer.
//!
//! The crate owns session persistence (the `userId`/`username` localStorage
//! flag), the login/registration flows against the `/api/users` endpoints,
//! the navigation chrome, protected-path gating, and the expense/category
//! screens backed by the REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
