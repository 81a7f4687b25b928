//! Session provider: the only writer of [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`SessionContext`] and hands it down through Leptos
//! context; views read the session through it and call its operations instead
//! of touching the store. The provider resolves the persisted credential at
//! startup and orders overlapping login/signup/logout calls with tickets.
//!
//! ERROR HANDLING
//! ==============
//! Login and signup return the `ApiError` so the login view can display it.
//! Logout and the startup check never fail outward: both collapse to a
//! signed-out session and log the cause.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use super::session::{Session, SessionStore, Ticket};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::client::{ResourceClient, with_timeout};
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Identity, SignupProfile};
use crate::util::token_store;

/// Injectable handle to the session store and client configuration.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    config: StoredValue<ClientConfig>,
}

impl SessionContext {
    /// Create a provider in the pending state. Call
    /// [`SessionContext::resolve_initial`] once to settle it.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            store: RwSignal::new(SessionStore::default()),
            config: StoredValue::new(config),
        }
    }

    /// Provider already signed in as `user`, for exercising views and loaders.
    #[cfg(test)]
    pub(crate) fn signed_in(config: ClientConfig, user: Identity, token: &str) -> Self {
        let ctx = Self::new(config);
        ctx.store.update(|store| {
            let ticket = store.begin();
            assert!(store.commit(ticket, Some(user), Some(token.to_owned())));
        });
        ctx
    }

    /// Tracked read of the current session.
    pub fn session(self) -> Session {
        self.store.with(|store| store.session().clone())
    }

    /// Tracked read of the signed-in identity.
    pub fn user(self) -> Option<Identity> {
        self.store.with(|store| store.session().user().cloned())
    }

    pub fn config(self) -> ClientConfig {
        self.config.get_value()
    }

    /// Resource client carrying the committed session's token.
    pub fn client(self) -> ResourceClient {
        let token = self.store.with_untracked(|store| store.token().map(str::to_owned));
        ResourceClient::new(&self.config.get_value(), token)
    }

    /// Validate the persisted token and settle the startup session.
    ///
    /// Bounded by the configured timeout; any failure resolves to signed-out.
    /// A token the backend rejects is forgotten so the next load starts clean.
    pub async fn resolve_initial(self) {
        let Some(ticket) = self.begin() else {
            return;
        };
        let config = self.config.get_value();
        let Some(token) = token_store::load(&config.token_key) else {
            log::debug!("no stored credential; starting signed out");
            self.commit(ticket, None, None);
            return;
        };

        let client = ResourceClient::new(&config, Some(token.clone()));
        match with_timeout(api::fetch_me(&client), config.session_timeout).await {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                self.commit(ticket, Some(user), Some(token));
            }
            Err(err) => {
                log::warn!("stored credential not accepted: {err}");
                if self.commit(ticket, None, None) && err.is_auth() {
                    token_store::clear(&config.token_key);
                }
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] for rejected credentials, [`ApiError::Network`] when
    /// the backend is unreachable. The session stays signed out on failure.
    pub async fn login(self, email: String, password: String) -> Result<Identity, ApiError> {
        let ticket = self.begin().ok_or_else(closed)?;
        let client = self.anonymous_client();
        let outcome = api::login(&client, &email, &password).await;
        self.settle_auth(ticket, outcome)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionContext::login`].
    pub async fn signup(self, profile: SignupProfile) -> Result<Identity, ApiError> {
        let ticket = self.begin().ok_or_else(closed)?;
        let client = self.anonymous_client();
        let outcome = api::signup(&client, &profile).await;
        self.settle_auth(ticket, outcome)
    }

    /// Sign out locally, then invalidate the token remotely on a best-effort
    /// basis. The local session is cleared before the remote call starts.
    pub async fn logout(self) {
        let Some(ticket) = self.begin() else {
            return;
        };
        let client = self.client();
        self.commit(ticket, None, None);
        token_store::clear(&self.config.get_value().token_key);
        log::info!("signed out");

        if client.token().is_none() {
            return;
        }
        if let Err(err) = api::logout(&client).await {
            log::warn!("remote logout failed: {err}");
        }
    }

    fn settle_auth(self, ticket: Ticket, outcome: Result<AuthResponse, ApiError>) -> Result<Identity, ApiError> {
        match outcome {
            Ok(auth) => {
                let user = auth.data.user;
                if self.commit(ticket, Some(user.clone()), Some(auth.token.clone())) {
                    token_store::save(&self.config.get_value().token_key, &auth.token);
                    log::info!("signed in as {}", user.email);
                }
                Ok(user)
            }
            Err(err) => {
                self.commit(ticket, None, None);
                Err(err)
            }
        }
    }

    fn anonymous_client(self) -> ResourceClient {
        ResourceClient::new(&self.config.get_value(), None)
    }

    fn begin(self) -> Option<Ticket> {
        self.store.try_update(SessionStore::begin)
    }

    fn commit(self, ticket: Ticket, user: Option<Identity>, token: Option<String>) -> bool {
        let accepted = self
            .store
            .try_update(|store| store.commit(ticket, user, token))
            .unwrap_or(false);
        if !accepted {
            log::debug!("dropping stale session result {ticket:?}");
        }
        accepted
    }
}

fn closed() -> ApiError {
    ApiError::Network("session provider disposed".to_owned())
}
