//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for absent optional values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Optional text or `N/A` when absent or blank.
pub fn or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_owned()
}

/// Calendar date (`YYYY-MM-DD`) of an ISO-8601 timestamp.
pub fn display_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(raw) if raw.len() >= 10 && raw.is_char_boundary(10) => raw[..10].to_owned(),
        Some(raw) if !raw.is_empty() => raw.to_owned(),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Date and minutes (`YYYY-MM-DD HH:MM`) of an ISO-8601 timestamp.
pub fn display_datetime(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(raw) if raw.len() >= 16 && raw.is_char_boundary(16) && raw.as_bytes()[10] == b'T' => {
            format!("{} {}", &raw[..10], &raw[11..16])
        }
        other => display_date(other),
    }
}

/// Currency amount with two decimals, e.g. `Rs. 1500.50`.
pub fn rupees(amount: f64) -> String {
    // Adding positive zero turns `-0.0` into `0.0`, which prints without a sign.
    let amount = amount + 0.0;
    format!("Rs. {amount:.2}")
}

/// Whole-number KPI with currency prefix, e.g. `Rs. 1500`.
pub fn rupees_whole(amount: f64) -> String {
    format!("Rs. {amount:.0}")
}

/// Today's local date as `YYYY-MM-DD`; `None` outside the browser.
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current instant as an ISO-8601 string; `None` outside the browser.
pub fn now_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
