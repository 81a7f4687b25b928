#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ClientConfig;

fn client() -> ResourceClient {
    ResourceClient::new(&ClientConfig::default(), Some("t0k".to_owned()))
}

fn requested(err: ApiError) -> String {
    match err {
        ApiError::Network(message) => message,
        other => format!("unexpected error: {other}"),
    }
}

#[test]
fn call_log_path_encodes_id() {
    assert_eq!(call_log_path("c 1"), "calllogs/c%201");
}

#[test]
fn decode_auth_reads_token_and_user() {
    let body = json!({
        "status": "success",
        "token": "jwt",
        "data": { "user": { "_id": "u1", "name": "A", "role": "Manager", "email": "a@example.com" } }
    });
    let auth = decode_auth(body).unwrap();
    assert_eq!(auth.token, "jwt");
    assert_eq!(auth.data.user.name, "A");
}

#[test]
fn decode_auth_without_token_is_network_error() {
    let body = json!({ "status": "success", "data": { "user": { "name": "A", "email": "a@example.com" } } });
    assert!(matches!(decode_auth(body), Err(ApiError::Network(_))));
}

#[test]
fn auth_wrappers_target_user_routes() {
    let c = client();
    assert_eq!(
        requested(block_on(login(&c, "a@example.com", "pw")).unwrap_err()),
        "Post /api/v1/users/login: not available on server"
    );
    assert_eq!(
        requested(block_on(signup(&c, &SignupProfile::default())).unwrap_err()),
        "Post /api/v1/users/signup: not available on server"
    );
    assert_eq!(
        requested(block_on(logout(&c)).unwrap_err()),
        "Get /api/v1/users/logout: not available on server"
    );
    assert_eq!(
        requested(block_on(fetch_me(&c)).unwrap_err()),
        "Get /api/v1/users/getMe: not available on server"
    );
}

#[test]
fn report_wrappers_pass_filters_as_query() {
    let c = client();
    assert_eq!(
        requested(block_on(performance_report(&c, ReportPeriod::Week, Some("tl1"))).unwrap_err()),
        "Get /api/v1/reports/performance?period=week&teamLeadId=tl1: not available on server"
    );
    assert_eq!(
        requested(block_on(performance_report(&c, ReportPeriod::Month, None)).unwrap_err()),
        "Get /api/v1/reports/performance?period=month: not available on server"
    );
    let filter = CallLogFilter::Day("2026-10-16".to_owned());
    assert_eq!(
        requested(block_on(manager_call_report(&c, &filter)).unwrap_err()),
        "Get /api/v1/reports/manager-calls?date=2026-10-16: not available on server"
    );
}

#[test]
fn call_log_wrappers_target_calllogs() {
    let c = client();
    let filter = CallLogFilter::Range {
        start: "2026-10-01".to_owned(),
        end: "2026-10-02".to_owned(),
    };
    assert_eq!(
        requested(block_on(list_call_logs(&c, &filter)).unwrap_err()),
        "Get /api/v1/calllogs?startDate=2026-10-01&endDate=2026-10-02: not available on server"
    );
    assert_eq!(
        requested(block_on(update_call_log(&c, "c1", &CallLogUpdate::default())).unwrap_err()),
        "Patch /api/v1/calllogs/c1: not available on server"
    );
}

#[test]
fn entity_listings_target_expected_routes() {
    let c = client();
    assert_eq!(
        requested(block_on(list_prospects(&c)).unwrap_err()),
        "Get /api/v1/prospects: not available on server"
    );
    assert_eq!(
        requested(block_on(create_prospect(&c, &NewProspect::default())).unwrap_err()),
        "Post /api/v1/prospects: not available on server"
    );
    assert_eq!(
        requested(block_on(list_sales(&c)).unwrap_err()),
        "Get /api/v1/sales: not available on server"
    );
    assert_eq!(
        requested(block_on(list_user_data(&c)).unwrap_err()),
        "Get /api/v1/users: not available on server"
    );
    assert_eq!(
        requested(block_on(dashboard_summary(&c)).unwrap_err()),
        "Get /api/v1/reports/dashboard-summary: not available on server"
    );
    assert_eq!(
        requested(block_on(activity_logs(&c)).unwrap_err()),
        "Get /api/v1/reports/activity-logs: not available on server"
    );
}
