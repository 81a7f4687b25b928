//! Session value and its ticketed store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is what the authorization gate and identity-aware components
//! read. `SessionStore` is the single writer's bookkeeping: every session
//! operation takes a [`Ticket`] when it starts and may only commit while its
//! ticket is still the newest. A login that finishes after a later logout is
//! therefore dropped instead of resurrecting the session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Authentication status of the browser user.
///
/// `is_authenticated` is derived from the identity slot, so an authenticated
/// session without a user cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: Option<Identity>,
    loading: bool,
}

impl Default for Session {
    /// Process-start state: unresolved and unauthenticated.
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    pub fn pending() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: Identity) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    /// True while a resolution, login, signup, or logout is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }
}

/// Sequence number handed to an in-flight session operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Session plus the credential and ordering state behind it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Session,
    token: Option<String>,
    latest: u64,
}

impl SessionStore {
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Bearer token of the committed session, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Start an operation: supersede every older ticket and mark the session
    /// as loading until the new ticket commits.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.session.loading = true;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Replace the session wholesale if `ticket` is still the newest.
    ///
    /// Returns `false` (and leaves the store untouched) for a stale ticket.
    /// A `None` user always clears the token.
    pub fn commit(&mut self, ticket: Ticket, user: Option<Identity>, token: Option<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match user {
            Some(user) => {
                self.session = Session::signed_in(user);
                self.token = token;
            }
            None => {
                self.session = Session::signed_out();
                self.token = None;
            }
        }
        true
    }
}
