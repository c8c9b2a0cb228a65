//! Protected-path policy for client-side route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fixed set of path prefixes requires an active session to view. The
//! policy is pure over an explicit path argument; the app shell feeds it the
//! router's reactive pathname and wires the alert/redirect effects.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

/// Path prefixes that require a logged-in session.
pub const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/expenses/new", "/expenses/edit", "/categories"];

/// Alert shown before bouncing an unauthenticated visitor to the login page.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page";

/// Whether `path` falls under any protected prefix.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Guard decision for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Path is public, or the visitor has a session.
    Allow,
    /// Protected path without a session: alert and send to `/login`.
    RedirectToLogin,
}

/// Decide whether `path` may be shown given the current login state.
#[must_use]
pub fn guard(path: &str, logged_in: bool) -> GuardOutcome {
    if is_protected(path) && !logged_in {
        GuardOutcome::RedirectToLogin
    } else {
        GuardOutcome::Allow
    }
}

/// Apply the guard decision for `path`: on a denied navigation, raise the
/// blocking alert and then navigate to `/login`, each exactly once.
pub fn enforce<A, N>(path: &str, logged_in: bool, alert: A, navigate: N)
where
    A: FnOnce(&str),
    N: FnOnce(&str),
{
    if guard(path, logged_in) == GuardOutcome::RedirectToLogin {
        alert(LOGIN_REQUIRED_MESSAGE);
        navigate("/login");
    }
}
