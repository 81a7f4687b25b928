use super::*;
use crate::net::types::Role;

fn user(name: &str) -> Identity {
    Identity {
        id: format!("id-{name}"),
        name: name.to_owned(),
        role: Role::SalesExecutive,
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_starts_pending_and_unauthenticated() {
    let session = Session::default();
    assert!(session.loading());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn signed_in_session_carries_user() {
    let session = Session::signed_in(user("A"));
    assert!(session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.user().map(|u| u.name.as_str()), Some("A"));
}

#[test]
fn signed_out_session_is_resolved() {
    let session = Session::signed_out();
    assert!(!session.is_authenticated());
    assert!(!session.loading());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn begin_marks_loading_without_dropping_user() {
    let mut store = SessionStore::default();
    let first = store.begin();
    assert!(store.commit(first, Some(user("A")), Some("t1".to_owned())));

    store.begin();
    assert!(store.session().loading());
    assert!(store.session().is_authenticated());
}

#[test]
fn current_ticket_commits_user_and_token() {
    let mut store = SessionStore::default();
    let ticket = store.begin();
    assert!(store.commit(ticket, Some(user("A")), Some("t1".to_owned())));
    assert_eq!(store.session(), &Session::signed_in(user("A")));
    assert_eq!(store.token(), Some("t1"));
}

#[test]
fn signed_out_commit_clears_token() {
    let mut store = SessionStore::default();
    let login = store.begin();
    store.commit(login, Some(user("A")), Some("t1".to_owned()));

    let logout = store.begin();
    assert!(store.commit(logout, None, Some("ignored".to_owned())));
    assert_eq!(store.session(), &Session::signed_out());
    assert_eq!(store.token(), None);
}

#[test]
fn stale_login_cannot_overwrite_later_logout() {
    let mut store = SessionStore::default();
    let login = store.begin();
    let logout = store.begin();

    assert!(store.commit(logout, None, None));
    assert!(!store.commit(login, Some(user("A")), Some("t1".to_owned())));
    assert_eq!(store.session(), &Session::signed_out());
    assert_eq!(store.token(), None);
}

#[test]
fn stale_failure_cannot_sign_out_newer_login() {
    let mut store = SessionStore::default();
    let startup = store.begin();
    let login = store.begin();

    assert!(store.commit(login, Some(user("A")), Some("t1".to_owned())));
    assert!(!store.commit(startup, None, None));
    assert!(store.session().is_authenticated());
}

#[test]
fn only_latest_ticket_is_current() {
    let mut store = SessionStore::default();
    let a = store.begin();
    let b = store.begin();
    assert!(!store.is_current(a));
    assert!(store.is_current(b));
    assert!(a < b);
}
