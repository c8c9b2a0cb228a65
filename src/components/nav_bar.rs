//! Top navigation bar with login-state-dependent controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar carries two stateful controls: the login/logout link and the
//! add-expense shortcut. Both derive their behavior from the shared session
//! signal, so a login or logout flips them without re-wiring handlers.
//!
//! The logged-out login control is a plain link to `/login`; its click
//! handler deliberately leaves the default anchor navigation alone.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::browser;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Alert shown when a logged-out visitor hits the add-expense control.
pub const ADD_EXPENSE_LOGIN_MESSAGE: &str = "Please log in to add expenses";

/// Label for the login control in the given session state.
#[must_use]
pub fn login_control_label(logged_in: bool) -> &'static str {
    if logged_in { "Logout" } else { "Login" }
}

/// Href for the login control in the given session state.
///
/// Logged in, the control acts as a button and points nowhere.
#[must_use]
pub fn login_control_href(logged_in: bool) -> &'static str {
    if logged_in { "#" } else { "/login" }
}

/// Log out: drop the session record, send the visitor home, and return the
/// cleared session snapshot for the caller's signal.
pub fn activate_logout<S, N>(store: &S, navigate: N) -> SessionState
where
    S: KeyValueStore,
    N: FnOnce(&str),
{
    SessionState::clear(store);
    navigate("/");
    SessionState::default()
}

/// Handle the add-expense control: logged in goes to the new-expense form,
/// logged out gets the alert and a trip to the login page.
pub fn activate_add_expense<A, N>(logged_in: bool, alert: A, navigate: N)
where
    A: FnOnce(&str),
    N: FnOnce(&str),
{
    if logged_in {
        navigate("/expenses/new");
    } else {
        alert(ADD_EXPENSE_LOGIN_MESSAGE);
        navigate("/login");
    }
}

/// Site-wide navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let logged_in = move || session.get().is_logged_in();

    let on_login_control = move |ev: leptos::ev::MouseEvent| {
        if !session.get().is_logged_in() {
            return;
        }
        ev.prevent_default();
        session.set(activate_logout(&BrowserStorage, browser::redirect));
    };

    let on_add_expense = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        activate_add_expense(session.get().is_logged_in(), browser::alert, browser::redirect);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "SpendTrack"
            </a>
            <div class="navbar__links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/categories">"Categories"</a>
                <Show when=move || !logged_in()>
                    <a href="/register">"Register"</a>
                </Show>
            </div>
            <span class="navbar__spacer"></span>
            <Show when=logged_in>
                <span class="navbar__user">
                    {move || session.get().username.unwrap_or_default()}
                </span>
            </Show>
            <a id="add-expense-btn" class="btn navbar__add-expense" href="#" on:click=on_add_expense>
                "Add Expense"
            </a>
            <a
                id="login-btn"
                class="btn navbar__login"
                href=move || login_control_href(logged_in())
                on:click=on_login_control
            >
                {move || login_control_label(logged_in())}
            </a>
        </nav>
    }
}
