use super::*;
use serde_json::json;

#[test]
fn identity_reads_mongo_id_and_role_label() {
    let user: Identity = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Asha",
        "role": "Team Lead",
        "email": "asha@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::TeamLead);
    assert!(user.role.can_view_team_reports());
}

#[test]
fn identity_without_role_defaults_to_sales_executive() {
    let user: Identity = serde_json::from_value(json!({
        "id": "u2",
        "name": "A",
        "email": "a@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u2");
    assert_eq!(user.role, Role::SalesExecutive);
    assert!(!user.role.can_view_team_reports());
}

#[test]
fn unknown_role_is_tolerated() {
    let role: Role = serde_json::from_value(json!("Intern")).unwrap();
    assert_eq!(role, Role::Unknown);
    assert_eq!(role.label(), "Member");
}

#[test]
fn signup_profile_serializes_camel_case() {
    let profile = SignupProfile {
        name: "A".to_owned(),
        email: "a@example.com".to_owned(),
        password: "secret123".to_owned(),
        password_confirm: "secret123".to_owned(),
    };
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["passwordConfirm"], "secret123");
}

#[test]
fn new_prospect_omits_blank_optional_fields() {
    let prospect = NewProspect {
        company_name: "Acme".to_owned(),
        client_name: "Ravi".to_owned(),
        contact_no: "555-0101".to_owned(),
        ..NewProspect::default()
    };
    assert_eq!(
        serde_json::to_value(&prospect).unwrap(),
        json!({ "companyName": "Acme", "clientName": "Ravi", "contactNo": "555-0101" })
    );
}

#[test]
fn call_log_reads_populated_prospect_reminder() {
    let log: CallLog = serde_json::from_value(json!({
        "_id": "c1",
        "companyName": "Acme",
        "clientName": "Ravi",
        "activity": "Talked",
        "prospect": { "companyName": "Acme", "clientName": "Ravi", "reminderDate": "2026-10-20T00:00:00.000Z" }
    }))
    .unwrap();
    assert_eq!(log.reminder_date(), Some("2026-10-20T00:00:00.000Z"));
}

#[test]
fn call_log_accepts_unpopulated_prospect_id() {
    let log: CallLog = serde_json::from_value(json!({
        "_id": "c2",
        "companyName": "Acme",
        "clientName": "Ravi",
        "prospect": "p9"
    }))
    .unwrap();
    assert_eq!(log.prospect, Some(ProspectLink::Id("p9".to_owned())));
    assert_eq!(log.reminder_date(), None);
}

#[test]
fn call_log_filter_builds_expected_query() {
    assert_eq!(CallLogFilter::Day("2026-10-16".to_owned()).query(), vec![("date", "2026-10-16".to_owned())]);
    assert_eq!(
        CallLogFilter::Range { start: "2026-10-01".to_owned(), end: "2026-10-15".to_owned() }.query(),
        vec![("startDate", "2026-10-01".to_owned()), ("endDate", "2026-10-15".to_owned())]
    );
}

#[test]
fn dashboard_summary_defaults_missing_totals() {
    let summary: DashboardSummary = serde_json::from_value(json!({ "totalSales": 1500.5 })).unwrap();
    assert_eq!(summary.total_sales, 1500.5);
    assert_eq!(summary.total_clients_data, 0);
    assert_eq!(summary.prospect_number, 0);
}

#[test]
fn report_period_parse_falls_back_to_month() {
    assert_eq!(ReportPeriod::parse("week"), ReportPeriod::Week);
    assert_eq!(ReportPeriod::parse("year"), ReportPeriod::Year);
    assert_eq!(ReportPeriod::parse("decade"), ReportPeriod::Month);
}
