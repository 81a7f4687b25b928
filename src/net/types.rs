//! Wire DTOs for the CRM REST API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with Mongo-style `_id` keys and wraps
//! every payload as `{ "status": ..., "data": { <key>: ... } }`. Fields the
//! pages only display are optional and defaulted so a sparse record never
//! fails the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; drives sidebar filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Sales Executive", alias = "sales-executive", alias = "SalesExecutive")]
    SalesExecutive,
    #[serde(rename = "Team Lead", alias = "team-lead", alias = "TeamLead")]
    TeamLead,
    #[serde(rename = "Manager", alias = "manager")]
    Manager,
    /// Any role string this build does not know about.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Human-readable label for the sidebar badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::SalesExecutive => "Sales Executive",
            Self::TeamLead => "Team Lead",
            Self::Manager => "Manager",
            Self::Unknown => "Member",
        }
    }

    /// Team Leads and Managers may view team-wide reports.
    pub fn can_view_team_reports(self) -> bool {
        matches!(self, Self::TeamLead | Self::Manager)
    }
}

/// The signed-in user as returned by `/users/getMe` and the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    pub email: String,
}

/// Credentials posted to `/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account details posted to `/users/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Body returned by login and signup: a bearer token plus the new identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub data: UserPayload,
}

/// `data` member of an auth response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub user: Identity,
}

/// Role-scoped KPI totals for the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_clients_data: u64,
    pub total_sales: f64,
    pub last_month_payout: f64,
    pub prospect_number: u64,
}

/// A sales prospect (potential client).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prospect {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub company_name: String,
    pub client_name: String,
    pub email_id: Option<String>,
    pub contact_no: Option<String>,
    /// ISO-8601 timestamp.
    pub reminder_date: Option<String>,
    pub comment: Option<String>,
    pub activity: Option<String>,
    /// ISO-8601 timestamp of the last local or remote edit.
    pub last_update: Option<String>,
}

/// Prospect intake form payload for `POST /prospects`.
///
/// Optional fields are omitted when blank so the backend applies its own
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProspect {
    pub company_name: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_no: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reminder_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Activities a call can be logged with.
pub const CALL_ACTIVITIES: [&str; 4] = ["Talked", "Not Talked", "Follow Up", "Delete Client's Profile"];

/// A logged call against a prospect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallLog {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub company_name: String,
    pub client_name: String,
    pub email_id: Option<String>,
    pub contact_no: Option<String>,
    pub call_date: Option<String>,
    pub activity: String,
    pub comment: Option<String>,
    pub prospect: Option<ProspectLink>,
}

impl CallLog {
    /// Reminder date of the linked prospect, when the backend populated it.
    pub fn reminder_date(&self) -> Option<&str> {
        match &self.prospect {
            Some(ProspectLink::Populated(p)) => p.reminder_date.as_deref(),
            _ => None,
        }
    }
}

/// A call log's prospect reference: populated document or bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProspectLink {
    Populated(ProspectRef),
    Id(String),
}

/// Subset of prospect fields embedded in a populated call log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProspectRef {
    pub company_name: String,
    pub client_name: String,
    pub reminder_date: Option<String>,
}

/// `PATCH /calllogs/{id}` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CallLogUpdate {
    pub activity: String,
    pub comment: String,
}

/// Filters accepted by `GET /calllogs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallLogFilter {
    /// Calls on a single `YYYY-MM-DD` day.
    Day(String),
    /// Calls within an inclusive `YYYY-MM-DD` range.
    Range { start: String, end: String },
}

impl CallLogFilter {
    /// Query-string pairs for this filter.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Day(date) => vec![("date", date.clone())],
            Self::Range { start, end } => vec![("startDate", start.clone()), ("endDate", end.clone())],
        }
    }
}

/// A closed sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub company_name: String,
    pub client_name: String,
    pub email_id: Option<String>,
    pub contact_no: Option<String>,
    pub services: Option<String>,
    pub amount: Option<f64>,
    pub sale_date: Option<String>,
}

/// Reporting window for the performance report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl ReportPeriod {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parse a `<select>` value; unknown input keeps the default.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|p| p.as_str() == raw).unwrap_or_default()
    }
}

/// One audit entry from `/reports/activity-logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityLog {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub action: String,
    #[serde(alias = "details")]
    pub description: Option<String>,
    #[serde(alias = "timestamp")]
    pub created_at: Option<String>,
}
