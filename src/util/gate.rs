//! Authorization gate decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gated route wrapper and the login page apply the same rules: map the
//! session onto a [`GateState`], then issue at most one replace-navigation per
//! transition into the state that requires leaving the current view.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// What the gate shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Session is resolving; render a placeholder and do not navigate.
    Pending,
    /// Resolved and signed out.
    Denied,
    /// Resolved and signed in.
    Granted,
}

impl GateState {
    pub fn of(session: &Session) -> Self {
        if session.loading() {
            Self::Pending
        } else if session.is_authenticated() {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

/// A navigation the gate wants performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Replace the current history entry so back-navigation cannot re-enter
    /// the view that was left.
    pub replace: bool,
}

impl Redirect {
    pub fn options(self) -> NavigateOptions {
        NavigateOptions {
            replace: self.replace,
            ..NavigateOptions::default()
        }
    }
}

/// Redirect issued when the gate enters `trigger`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectRule {
    trigger: GateState,
    to: &'static str,
}

impl RedirectRule {
    /// Gated views leave for the login path once the session is denied.
    pub fn gated(login_path: &'static str) -> Self {
        Self {
            trigger: GateState::Denied,
            to: login_path,
        }
    }

    /// The login view leaves for the landing path once the session is granted.
    pub fn login_page(landing_path: &'static str) -> Self {
        Self {
            trigger: GateState::Granted,
            to: landing_path,
        }
    }

    /// Redirect for the transition `prev -> next`, if any.
    ///
    /// Fires only on entry into the trigger state, so re-observing the same
    /// state never navigates twice.
    pub fn on_transition(self, prev: Option<GateState>, next: GateState) -> Option<Redirect> {
        (next == self.trigger && prev != Some(next)).then_some(Redirect {
            to: self.to,
            replace: true,
        })
    }
}
