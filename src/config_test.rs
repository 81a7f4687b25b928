use super::*;

#[test]
fn default_config_points_at_same_origin_api() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "/api/v1");
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.landing_path, "/dashboard");
    assert_eq!(config.session_timeout, Duration::from_millis(8_000));
}

#[test]
fn overrides_replace_defaults() {
    let config = ClientConfig::from_overrides(Some("https://crm.example.com/api/"), Some("2500"), Some("debug"));
    assert_eq!(config.api_base, "https://crm.example.com/api");
    assert_eq!(config.session_timeout, Duration::from_millis(2_500));
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn invalid_overrides_fall_back_to_defaults() {
    let config = ClientConfig::from_overrides(Some("   "), Some("soon"), Some("loud"));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn zero_timeout_is_rejected() {
    let config = ClientConfig::from_overrides(None, Some("0"), None);
    assert_eq!(config.session_timeout, Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS));
}

#[test]
fn api_base_trailing_slashes_are_stripped() {
    let config = ClientConfig::from_overrides(Some(" /crm/api// "), None, None);
    assert_eq!(config.api_base, "/crm/api");
}
