//! Login page posting credentials to the users API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login writes the session record to storage, updates the
//! shared session signal, and lands on the dashboard. A rejected login
//! renders the server's error text in place. Transport failures are logged
//! and leave the form untouched.
//!
//! Field values are submitted exactly as typed; the server owns validation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{ApiFailure, SessionUser};
use crate::state::session::SessionState;
use crate::util::storage::KeyValueStore;

/// Finish a successful login: persist the session record, land on the
/// dashboard, and return the session snapshot for the shared signal.
pub fn complete_login<S, N>(store: &S, user: &SessionUser, navigate: N) -> SessionState
where
    S: KeyValueStore,
    N: FnOnce(&str),
{
    let state = SessionState::persist(store, &user.id, &user.username);
    navigate("/dashboard");
    state
}

/// Error text for a rejected login. The server's `error` field wins; absent
/// that, a generic fallback.
#[must_use]
pub fn login_failure_text(failure: &ApiFailure) -> String {
    failure.message_or("Login failed")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            match crate::net::api::login(&email_value, &password_value).await {
                Ok(SubmitOutcome::Accepted(user)) => {
                    session.set(complete_login(
                        &crate::util::storage::BrowserStorage,
                        &user,
                        crate::util::browser::redirect,
                    ));
                }
                Ok(SubmitOutcome::Rejected(failure)) => {
                    error.set(login_failure_text(&failure));
                    busy.set(false);
                }
                Err(e) => {
                    log::error!("login request failed: {e}");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div id="login-error" class="alert alert-danger">
                        {move || error.get()}
                    </div>
                </Show>
                <form id="login-form" class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            id="email"
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            id="password"
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
