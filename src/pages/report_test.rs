use super::*;

fn call(id: &str, activity: &str) -> CallLog {
    CallLog {
        id: id.to_owned(),
        company_name: "Acme".to_owned(),
        client_name: "Ravi".to_owned(),
        activity: activity.to_owned(),
        ..CallLog::default()
    }
}

#[test]
fn date_range_requires_both_ends() {
    assert_eq!(validate_date_range("", "2026-10-16"), Err("Please select both start and end dates."));
    assert_eq!(validate_date_range("2026-10-01", " "), Err("Please select both start and end dates."));
}

#[test]
fn date_range_rejects_reversed_range() {
    assert_eq!(
        validate_date_range("2026-10-16", "2026-10-01"),
        Err("Start date must be on or before end date.")
    );
}

#[test]
fn date_range_allows_single_day() {
    assert_eq!(
        validate_date_range("2026-10-16", "2026-10-16"),
        Ok(CallLogFilter::Range {
            start: "2026-10-16".to_owned(),
            end: "2026-10-16".to_owned(),
        })
    );
}

#[test]
fn update_requires_known_activity() {
    assert_eq!(validate_update("", "note"), Err("Select an activity."));
    assert_eq!(validate_update("Converted", "note"), Err("Select an activity."));
    assert_eq!(
        validate_update("Follow Up", "  call back friday "),
        Ok(CallLogUpdate {
            activity: "Follow Up".to_owned(),
            comment: "call back friday".to_owned(),
        })
    );
}

#[test]
fn replace_call_log_swaps_matching_row() {
    let mut list = vec![call("a", "Talked"), call("b", "Talked")];
    let updated = call("b", "Follow Up");
    assert!(replace_call_log(&mut list, &updated));
    assert_eq!(list[0].activity, "Talked");
    assert_eq!(list[1].activity, "Follow Up");
}

#[test]
fn replace_call_log_ignores_unknown_id() {
    let mut list = vec![call("a", "Talked")];
    assert!(!replace_call_log(&mut list, &call("z", "Follow Up")));
    assert_eq!(list, vec![call("a", "Talked")]);
}
