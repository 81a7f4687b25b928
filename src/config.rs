//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so overrides are baked in
//! with `option_env!` when the WASM artifact is compiled. `App` provides the
//! resolved config through Leptos context; the session layer and pages read it
//! from there.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default REST prefix; the backend is expected behind the same origin.
pub const DEFAULT_API_BASE: &str = "/api/v1";
/// `localStorage` key holding the bearer token across reloads.
pub const DEFAULT_TOKEN_KEY: &str = "crm_client_token";
/// Upper bound on the startup credential check.
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 8_000;
/// Public route users are sent to when signed out.
pub const LOGIN_PATH: &str = "/login";
/// Default gated route after login.
pub const LANDING_PATH: &str = "/dashboard";

/// Runtime configuration for the CRM client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL prepended to every resource path.
    pub api_base: String,
    /// Storage key for the persisted bearer token.
    pub token_key: String,
    /// Maximum time the initial session check may take before collapsing to
    /// signed-out.
    pub session_timeout: Duration,
    pub login_path: &'static str,
    pub landing_path: &'static str,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            session_timeout: Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS),
            login_path: LOGIN_PATH,
            landing_path: LANDING_PATH,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Build the config from compile-time overrides, falling back to defaults.
    ///
    /// Recognised variables: `CRM_API_BASE`, `CRM_SESSION_TIMEOUT_MS`,
    /// `CRM_LOG_LEVEL`.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CRM_API_BASE"),
            option_env!("CRM_SESSION_TIMEOUT_MS"),
            option_env!("CRM_LOG_LEVEL"),
        )
    }

    fn from_overrides(api_base: Option<&str>, timeout_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(normalize_api_base)
                .filter(|base| !base.is_empty())
                .unwrap_or(defaults.api_base),
            session_timeout: timeout_ms
                .and_then(parse_trimmed::<u64>)
                .filter(|ms| *ms > 0)
                .map_or(defaults.session_timeout, Duration::from_millis),
            log_level: log_level
                .and_then(parse_trimmed::<log::Level>)
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}

fn parse_trimmed<T: std::str::FromStr>(raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Strip trailing slashes so joined request URLs never contain `//`.
fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
