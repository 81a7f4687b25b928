//! Load state for data a page fetches once on mount.
//!
//! DESIGN
//! ======
//! Pages keep one `RwSignal<Remote<T>>` per request and render off its
//! variant. Failures are flattened to a display string at load time; the
//! original `ApiError` is logged, not kept. A load the backend rejects as
//! unauthorized signs the session out, so the gate sends the user to login.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use super::provider::SessionContext;
use crate::net::error::ApiError;

/// Outcome of a page-level fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(load_error_message(&err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Mutate the loaded value in place; no-op while loading or failed.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

/// User-facing text for a failed page load.
pub fn load_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Auth(_) => "Your session has expired. Please log in again.".to_owned(),
        ApiError::Network(_) => "Could not reach the server.".to_owned(),
        ApiError::Validation(message) | ApiError::Http { message, .. } => message.clone(),
    }
}

/// Reset `target` to loading and fill it from `request` in the background.
///
/// Outside the browser the request is dropped and `target` stays loading.
pub fn spawn_load<T, F>(target: RwSignal<Remote<T>>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Remote::Loading);
    #[cfg(feature = "hydrate")]
    {
        let session = use_context::<SessionContext>();
        let issued_with = session.and_then(|s| s.client().token().map(str::to_owned));
        leptos::task::spawn_local(async move {
            settle_load(target, session, issued_with, request.await).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(request);
}

/// Store a finished load. An `Auth` failure means the token the load was
/// issued with went stale; if that token is still the session's, the session
/// ends.
#[cfg(any(test, feature = "hydrate"))]
async fn settle_load<T>(
    target: RwSignal<Remote<T>>,
    session: Option<SessionContext>,
    issued_with: Option<String>,
    result: Result<T, ApiError>,
) where
    T: Send + Sync + 'static,
{
    let expired = match &result {
        Err(err) => {
            log::warn!("page load failed: {err}");
            err.is_auth()
        }
        Ok(_) => false,
    };
    set_if_mounted(target, Remote::from_result(result));
    let Some(session) = session.filter(|_| expired) else {
        return;
    };
    if issued_with.is_some() && session.client().token() == issued_with.as_deref() {
        log::info!("credential rejected mid-session; signing out");
        session.logout().await;
    }
}

/// Write a signal from a background task that may outlive its view.
///
/// Navigating away disposes page signals while a request is still in flight;
/// the late value is then dropped.
pub fn set_if_mounted<T>(signal: RwSignal<T>, value: T)
where
    T: Send + Sync + 'static,
{
    if signal.try_set(value).is_some() {
        log::debug!("view closed before background task finished");
    }
}
