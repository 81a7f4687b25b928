//! Typed REST wrappers for each backend resource.
//!
//! Each function performs one request through [`ResourceClient`] and unwraps
//! the `{ status, data: { <key> } }` envelope into a DTO from `types`.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns `Result<_, ApiError>`; pages decide how to surface it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::client::{ResourceClient, decode_data};
use super::error::ApiError;
use super::types::{
    ActivityLog, AuthResponse, CallLog, CallLogFilter, CallLogUpdate, DashboardSummary, Identity, LoginRequest,
    NewProspect, Prospect, ReportPeriod, Sale, SignupProfile,
};

fn call_log_path(id: &str) -> String {
    format!("calllogs/{}", urlencoding::encode(id))
}

fn decode_auth(body: Value) -> Result<AuthResponse, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Network(format!("unexpected auth response: {e}")))
}

// =============================================================
// Auth + users
// =============================================================

/// Exchange credentials for a token via `POST /users/login`.
///
/// # Errors
///
/// [`ApiError::Auth`] for rejected credentials, [`ApiError::Network`] on
/// transport failure.
pub async fn login(client: &ResourceClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    decode_auth(client.post("users/login", &request).await?)
}

/// Create an account via `POST /users/signup`.
///
/// # Errors
///
/// [`ApiError::Validation`] when the backend rejects the profile.
pub async fn signup(client: &ResourceClient, profile: &SignupProfile) -> Result<AuthResponse, ApiError> {
    decode_auth(client.post("users/signup", profile).await?)
}

/// Invalidate the current token server-side via `GET /users/logout`.
///
/// # Errors
///
/// Any request failure; callers treat logout as best-effort.
pub async fn logout(client: &ResourceClient) -> Result<(), ApiError> {
    client.get("users/logout", &[]).await.map(|_| ())
}

/// Resolve the identity behind the client's token via `GET /users/getMe`.
///
/// # Errors
///
/// [`ApiError::Auth`] when the token is missing, expired, or revoked.
pub async fn fetch_me(client: &ResourceClient) -> Result<Identity, ApiError> {
    decode_data(client.get("users/getMe", &[]).await?, Some("user"))
}

/// Rows for the user-data table via `GET /users`.
///
/// The backend returns prospect-shaped records for this listing.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn list_user_data(client: &ResourceClient) -> Result<Vec<Prospect>, ApiError> {
    decode_data(client.get("users", &[]).await?, Some("users"))
}

// =============================================================
// Reports
// =============================================================

/// Role-scoped KPI totals via `GET /reports/dashboard-summary`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn dashboard_summary(client: &ResourceClient) -> Result<DashboardSummary, ApiError> {
    decode_data(client.get("reports/dashboard-summary", &[]).await?, None)
}

/// Team performance via `GET /reports/performance`.
///
/// The report schema varies by role, so it is returned as raw JSON.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn performance_report(
    client: &ResourceClient,
    period: ReportPeriod,
    team_lead_id: Option<&str>,
) -> Result<Value, ApiError> {
    let query = [
        ("period", period.as_str().to_owned()),
        ("teamLeadId", team_lead_id.unwrap_or_default().to_owned()),
    ];
    decode_data(client.get("reports/performance", &query).await?, Some("report"))
}

/// Calls across the team via `GET /reports/manager-calls`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn manager_call_report(client: &ResourceClient, filter: &CallLogFilter) -> Result<Vec<CallLog>, ApiError> {
    decode_data(client.get("reports/manager-calls", &filter.query()).await?, Some("callLogs"))
}

/// Audit trail via `GET /reports/activity-logs`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn activity_logs(client: &ResourceClient) -> Result<Vec<ActivityLog>, ApiError> {
    decode_data(client.get("reports/activity-logs", &[]).await?, Some("activityLogs"))
}

// =============================================================
// Prospects
// =============================================================

/// Role-filtered prospects via `GET /prospects`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn list_prospects(client: &ResourceClient) -> Result<Vec<Prospect>, ApiError> {
    decode_data(client.get("prospects", &[]).await?, Some("prospects"))
}

/// Create a prospect via `POST /prospects`.
///
/// # Errors
///
/// [`ApiError::Validation`] when required fields are rejected.
pub async fn create_prospect(client: &ResourceClient, prospect: &NewProspect) -> Result<Prospect, ApiError> {
    decode_data(client.post("prospects", prospect).await?, Some("prospect"))
}

// =============================================================
// Call logs
// =============================================================

/// Calls matching `filter` via `GET /calllogs`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn list_call_logs(client: &ResourceClient, filter: &CallLogFilter) -> Result<Vec<CallLog>, ApiError> {
    decode_data(client.get("calllogs", &filter.query()).await?, Some("callLogs"))
}

/// Change a call's activity and comment via `PATCH /calllogs/{id}`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn update_call_log(client: &ResourceClient, id: &str, update: &CallLogUpdate) -> Result<CallLog, ApiError> {
    decode_data(client.patch(&call_log_path(id), update).await?, Some("callLog"))
}

// =============================================================
// Sales
// =============================================================

/// Role-filtered sales via `GET /sales`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn list_sales(client: &ResourceClient) -> Result<Vec<Sale>, ApiError> {
    decode_data(client.get("sales", &[]).await?, Some("sales"))
}
