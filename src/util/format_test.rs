use super::*;

#[test]
fn or_na_handles_missing_and_blank() {
    assert_eq!(or_na(Some("555-0101")), "555-0101");
    assert_eq!(or_na(Some("   ")), "N/A");
    assert_eq!(or_na(None), "N/A");
}

#[test]
fn display_date_truncates_timestamp() {
    assert_eq!(display_date(Some("2026-10-20T05:30:00.000Z")), "2026-10-20");
    assert_eq!(display_date(Some("2026-10-20")), "2026-10-20");
    assert_eq!(display_date(Some("soon")), "soon");
    assert_eq!(display_date(None), "N/A");
}

#[test]
fn display_datetime_keeps_minutes() {
    assert_eq!(display_datetime(Some("2026-10-16T14:05:59.000Z")), "2026-10-16 14:05");
    assert_eq!(display_datetime(Some("2026-10-16")), "2026-10-16");
    assert_eq!(display_datetime(None), "N/A");
}

#[test]
fn rupees_formats_two_decimals() {
    assert_eq!(rupees(1500.5), "Rs. 1500.50");
    assert_eq!(rupees(0.0), "Rs. 0.00");
    assert_eq!(rupees(-0.0), "Rs. 0.00");
    assert_eq!(rupees_whole(1500.0), "Rs. 1500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn clock_helpers_are_none_outside_browser() {
    assert_eq!(today_iso(), None);
    assert_eq!(now_iso(), None);
}
