//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request outcome is folded into [`ApiError`] so pages can render a
//! message without knowing which layer failed. The enum is `Clone` because
//! page state keeps the last error inside a signal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure returned by the resource client and the session provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Credentials were rejected or the session is no longer valid.
    #[error("{0}")]
    Auth(String),
    /// The request never produced a usable response (transport failure,
    /// timeout, undecodable body).
    #[error("network error: {0}")]
    Network(String),
    /// Input was rejected, either by a local form check or by the server.
    #[error("{0}")]
    Validation(String),
    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Classify a non-success HTTP status.
    ///
    /// `message` is the server-provided text when the body carried one.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Auth(message.unwrap_or_else(|| "Not authorized.".to_owned())),
            400 | 422 => Self::Validation(message.unwrap_or_else(|| "Invalid input.".to_owned())),
            _ => Self::Http {
                status,
                message: message.unwrap_or_else(|| "unexpected response".to_owned()),
            },
        }
    }

    /// True when the failure means the stored credential is unusable.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// True for 2xx statuses.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
