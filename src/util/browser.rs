//! Navigation and alert side effects.
//!
//! Full-page redirects and blocking alerts are the only user-visible side
//! channels the pages reach for outside the DOM. Both compile to no-ops
//! outside the browser build; decision logic that must stay testable takes
//! these as injected closures instead of calling them directly.

/// Full-page navigation to `path`, replacing the running app.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Blocking modal alert; script execution resumes once dismissed.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
