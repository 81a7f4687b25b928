use super::*;
use crate::net::types::{Identity, Role};
use crate::state::session::SessionStore;

const LOGIN: &str = "/login";
const LANDING: &str = "/dashboard";

fn user(name: &str) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: name.to_owned(),
        role: Role::SalesExecutive,
        email: "a@example.com".to_owned(),
    }
}

fn to_login() -> Option<Redirect> {
    Some(Redirect { to: LOGIN, replace: true })
}

fn to_landing() -> Option<Redirect> {
    Some(Redirect { to: LANDING, replace: true })
}

// =============================================================
// GateState
// =============================================================

#[test]
fn loading_is_pending_regardless_of_authentication() {
    let mut store = SessionStore::default();
    assert_eq!(GateState::of(store.session()), GateState::Pending);

    let ticket = store.begin();
    store.commit(ticket, Some(user("A")), None);
    store.begin();
    assert!(store.session().is_authenticated());
    assert_eq!(GateState::of(store.session()), GateState::Pending);
}

#[test]
fn resolved_signed_out_is_denied() {
    assert_eq!(GateState::of(&Session::signed_out()), GateState::Denied);
}

#[test]
fn resolved_signed_in_is_granted() {
    assert_eq!(GateState::of(&Session::signed_in(user("A"))), GateState::Granted);
}

// =============================================================
// Gated views
// =============================================================

#[test]
fn pending_never_redirects() {
    let rule = RedirectRule::gated(LOGIN);
    assert_eq!(rule.on_transition(None, GateState::Pending), None);
    assert_eq!(rule.on_transition(Some(GateState::Granted), GateState::Pending), None);
    assert_eq!(rule.on_transition(Some(GateState::Denied), GateState::Pending), None);
}

#[test]
fn startup_resolving_signed_out_redirects_to_login() {
    let rule = RedirectRule::gated(LOGIN);
    assert_eq!(rule.on_transition(None, GateState::Pending), None);
    assert_eq!(rule.on_transition(Some(GateState::Pending), GateState::Denied), to_login());
}

#[test]
fn denied_redirect_fires_exactly_once() {
    let rule = RedirectRule::gated(LOGIN);
    let mut prev = None;
    let mut redirects = 0;
    for next in [GateState::Pending, GateState::Denied, GateState::Denied, GateState::Denied] {
        if rule.on_transition(prev, next).is_some() {
            redirects += 1;
        }
        prev = Some(next);
    }
    assert_eq!(redirects, 1);
}

#[test]
fn fresh_mount_while_denied_redirects_immediately() {
    let rule = RedirectRule::gated(LOGIN);
    assert_eq!(rule.on_transition(None, GateState::Denied), to_login());
}

#[test]
fn granted_renders_without_redirect() {
    let rule = RedirectRule::gated(LOGIN);
    assert_eq!(rule.on_transition(Some(GateState::Pending), GateState::Granted), None);
}

#[test]
fn logout_from_granted_redirects_to_login() {
    let rule = RedirectRule::gated(LOGIN);
    let mut store = SessionStore::default();
    let login = store.begin();
    store.commit(login, Some(user("A")), Some("t1".to_owned()));
    let before = GateState::of(store.session());

    let logout = store.begin();
    let during = GateState::of(store.session());
    store.commit(logout, None, None);
    let after = GateState::of(store.session());

    assert_eq!(rule.on_transition(Some(before), during), None);
    assert_eq!(rule.on_transition(Some(during), after), to_login());
}

// =============================================================
// Login view
// =============================================================

#[test]
fn successful_login_on_login_page_redirects_to_landing() {
    let rule = RedirectRule::login_page(LANDING);
    let mut store = SessionStore::default();
    let startup = store.begin();
    store.commit(startup, None, None);
    let denied = GateState::of(store.session());
    assert_eq!(rule.on_transition(None, denied), None);

    let login = store.begin();
    let pending = GateState::of(store.session());
    assert_eq!(rule.on_transition(Some(denied), pending), None);

    store.commit(login, Some(user("A")), Some("t1".to_owned()));
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("A"));
    let granted = GateState::of(store.session());
    assert_eq!(rule.on_transition(Some(pending), granted), to_landing());
}

#[test]
fn authenticated_user_visiting_login_is_sent_to_landing() {
    let rule = RedirectRule::login_page(LANDING);
    assert_eq!(rule.on_transition(None, GateState::Granted), to_landing());
}

#[test]
fn login_page_stays_while_pending_or_denied() {
    let rule = RedirectRule::login_page(LANDING);
    assert_eq!(rule.on_transition(None, GateState::Pending), None);
    assert_eq!(rule.on_transition(Some(GateState::Pending), GateState::Denied), None);
}

#[test]
fn redirect_options_replace_history() {
    let options = Redirect { to: LOGIN, replace: true }.options();
    assert!(options.replace);
}
