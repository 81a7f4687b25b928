//! Generic HTTP accessor for backend resources.
//!
//! In the browser (hydrate) requests go out through `gloo-net`.
//! Server-side (SSR) and native tests: requests fail with
//! [`ApiError::Network`] since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies are all
//! classified into [`ApiError`] here so typed wrappers in `api` only deal
//! with envelope shape.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, is_success};
use crate::config::ClientConfig;

/// HTTP verbs the backend exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// Configured REST client carrying the base URL and optional bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceClient {
    base: String,
    token: Option<String>,
}

impl ResourceClient {
    pub fn new(config: &ClientConfig, token: Option<String>) -> Self {
        Self {
            base: config.api_base.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute request URL for `path` plus an encoded query string.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base, path.trim_start_matches('/'));
        let pairs = query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>();
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// `Authorization` header value, when a token is held.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// `GET path?query` and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.request(Verb::Get, &self.url(path, query), None).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = encode_body(body)?;
        self.request(Verb::Post, &self.url(path, &[]), Some(body)).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = encode_body(body)?;
        self.request(Verb::Patch, &self.url(path, &[]), Some(body)).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Verb::Delete, &self.url(path, &[]), None).await
    }

    /// Send one request and classify the outcome.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when the request cannot be sent or the body is
    /// not JSON; a status-derived variant for non-2xx responses.
    #[cfg(feature = "hydrate")]
    pub async fn request(&self, verb: Verb, url: &str, body: Option<Value>) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
        .header("Accept", "application/json");
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("{verb:?} {url}");
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        interpret_response(status, &text)
    }

    /// Native stand-in: the API is browser-only.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`].
    #[cfg(not(feature = "hydrate"))]
    pub async fn request(&self, verb: Verb, url: &str, _body: Option<Value>) -> Result<Value, ApiError> {
        Err(ApiError::Network(format!("{verb:?} {url}: not available on server")))
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Validation(format!("could not encode request: {e}")))
}

/// Turn a raw status and body into the decoded JSON or a classified error.
///
/// # Errors
///
/// Non-2xx statuses map through [`ApiError::from_status`] using the body's
/// `message` field when present; an undecodable 2xx body is a network error.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !is_success(status) {
        let message = serde_json::from_str::<Value>(body)
            .map_or(None, |v| v.get("message").and_then(Value::as_str).map(str::to_owned));
        return Err(ApiError::from_status(status, message));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
}

/// Pull `data.<key>` (or `data` itself) out of a backend envelope.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the envelope lacks the member or the
/// member does not match `T`.
pub fn decode_data<T: DeserializeOwned>(body: Value, key: Option<&str>) -> Result<T, ApiError> {
    let Value::Object(mut envelope) = body else {
        return Err(ApiError::Network("response is not an object".to_owned()));
    };
    let data = envelope
        .remove("data")
        .ok_or_else(|| ApiError::Network("response missing `data`".to_owned()))?;
    let member = match key {
        Some(key) => match data {
            Value::Object(mut map) => map
                .remove(key)
                .ok_or_else(|| ApiError::Network(format!("response missing `data.{key}`")))?,
            _ => return Err(ApiError::Network(format!("response missing `data.{key}`"))),
        },
        None => data,
    };
    serde_json::from_value(member).map_err(|e| ApiError::Network(format!("unexpected response shape: {e}")))
}

/// Race `fut` against a timer; expiry yields [`ApiError::Network`].
///
/// # Errors
///
/// Propagates the inner error, or a timeout error.
#[cfg(feature = "hydrate")]
pub async fn with_timeout<T, F>(fut: F, limit: Duration) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    use futures::future::{Either, select};

    let timer = gloo_timers::future::sleep(limit);
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(timeout_error(limit)),
    }
}

/// Native stand-in: no timer runtime, the future runs to completion.
///
/// # Errors
///
/// Propagates the inner error.
#[cfg(not(feature = "hydrate"))]
pub async fn with_timeout<T, F>(fut: F, _limit: Duration) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    fut.await
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_error(limit: Duration) -> ApiError {
    ApiError::Network(format!("timed out after {}ms", limit.as_millis()))
}
