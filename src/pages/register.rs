//! Registration page posting new accounts to the users API.
//!
//! A rejected registration can carry either a field-keyed error map or a
//! single error string; both render as one alert line per message. Success
//! announces itself with a blocking alert and hands off to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::ApiFailure;

/// Alert shown after a successful registration, before the login redirect.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Please log in.";

/// Error lines for a rejected registration: one per field-map entry, or the
/// single `error` string, or a generic fallback.
#[must_use]
pub fn registration_error_lines(failure: &ApiFailure) -> Vec<String> {
    failure.lines_or("Registration failed")
}

/// Finish a successful registration: announce it, then hand off to login.
pub fn complete_registration<A, N>(alert: A, navigate: N)
where
    A: FnOnce(&str),
    N: FnOnce(&str),
{
    alert(REGISTRATION_SUCCESS_MESSAGE);
    navigate("/login");
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();
        busy.set(true);
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            match crate::net::api::register(&username_value, &email_value, &password_value).await {
                Ok(SubmitOutcome::Accepted(())) => {
                    complete_registration(crate::util::browser::alert, crate::util::browser::redirect);
                }
                Ok(SubmitOutcome::Rejected(failure)) => {
                    errors.set(registration_error_lines(&failure));
                    busy.set(false);
                }
                Err(e) => {
                    log::error!("registration request failed: {e}");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <div id="register-errors">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|line| view! { <div class="alert alert-danger">{line}</div> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <form id="register-form" class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            id="username"
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Register"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
