use super::*;
use std::cell::RefCell;

#[test]
fn every_listed_prefix_is_protected() {
    for prefix in PROTECTED_PREFIXES {
        assert!(is_protected(prefix), "{prefix} should be protected");
    }
}

#[test]
fn sub_paths_of_protected_prefixes_are_protected() {
    assert!(is_protected("/dashboard/reports"));
    assert!(is_protected("/expenses/edit/66b2f0c1a9"));
    assert!(is_protected("/categories/"));
}

#[test]
fn unlisted_paths_are_not_protected() {
    assert!(!is_protected("/"));
    assert!(!is_protected("/about"));
    assert!(!is_protected("/login"));
    assert!(!is_protected("/register"));
    // The expense list root is not in the protected set, only new/edit.
    assert!(!is_protected("/expenses"));
}

#[test]
fn guard_denies_protected_paths_without_session() {
    for prefix in PROTECTED_PREFIXES {
        assert_eq!(guard(prefix, false), GuardOutcome::RedirectToLogin);
    }
    assert_eq!(guard("/expenses/edit/e1", false), GuardOutcome::RedirectToLogin);
}

#[test]
fn guard_allows_protected_paths_with_session() {
    for prefix in PROTECTED_PREFIXES {
        assert_eq!(guard(prefix, true), GuardOutcome::Allow);
    }
}

#[test]
fn guard_allows_public_paths_regardless_of_session() {
    assert_eq!(guard("/about", false), GuardOutcome::Allow);
    assert_eq!(guard("/about", true), GuardOutcome::Allow);
}

#[test]
fn enforce_alerts_once_then_redirects_to_login() {
    let events = RefCell::new(Vec::new());
    enforce(
        "/dashboard",
        false,
        |message| events.borrow_mut().push(format!("alert:{message}")),
        |path| events.borrow_mut().push(format!("navigate:{path}")),
    );
    assert_eq!(
        events.into_inner(),
        vec![
            format!("alert:{LOGIN_REQUIRED_MESSAGE}"),
            "navigate:/login".to_owned(),
        ]
    );
}

#[test]
fn enforce_does_nothing_when_logged_in() {
    let events = RefCell::new(Vec::<String>::new());
    enforce(
        "/dashboard",
        true,
        |message| events.borrow_mut().push(format!("alert:{message}")),
        |path| events.borrow_mut().push(format!("navigate:{path}")),
    );
    assert!(events.into_inner().is_empty());
}

#[test]
fn enforce_does_nothing_on_public_paths() {
    let events = RefCell::new(Vec::<String>::new());
    enforce(
        "/register",
        false,
        |message| events.borrow_mut().push(format!("alert:{message}")),
        |path| events.borrow_mut().push(format!("navigate:{path}")),
    );
    assert!(events.into_inner().is_empty());
}
