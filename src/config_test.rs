use super::*;

#[test]
fn parse_empty_raw_uses_defaults() {
    let cfg = ClientConfig::parse(RawConfig::default()).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.signup_message, Duration::from_millis(5_000));
    assert_eq!(cfg.removal_message, Duration::from_millis(4_000));
}

#[test]
fn parse_applies_overrides() {
    let raw = RawConfig {
        api_base: Some("https://school.example/api/"),
        signup_message_ms: Some("2500"),
        removal_message_ms: Some(" 1000 "),
    };
    let cfg = ClientConfig::parse(raw).unwrap();
    assert_eq!(cfg.api_base, "https://school.example/api");
    assert_eq!(cfg.signup_message, Duration::from_millis(2_500));
    assert_eq!(cfg.removal_message, Duration::from_millis(1_000));
}

#[test]
fn parse_trims_every_trailing_slash_from_base() {
    let raw = RawConfig { api_base: Some("/api///"), ..RawConfig::default() };
    assert_eq!(ClientConfig::parse(raw).unwrap().api_base, "/api");
}

#[test]
fn parse_blank_values_fall_back_to_defaults() {
    let raw = RawConfig { api_base: None, signup_message_ms: Some("   "), removal_message_ms: Some("") };
    assert_eq!(ClientConfig::parse(raw).unwrap(), ClientConfig::default());
}

#[test]
fn parse_rejects_non_numeric_duration() {
    let raw = RawConfig { signup_message_ms: Some("soon"), ..RawConfig::default() };
    assert_eq!(
        ClientConfig::parse(raw),
        Err(ConfigError::InvalidDuration { var: "ACTIVITIES_SIGNUP_MESSAGE_MS", value: "soon".to_owned() })
    );
}

#[test]
fn parse_error_names_variable() {
    let raw = RawConfig { removal_message_ms: Some("-1"), ..RawConfig::default() };
    let err = ClientConfig::parse(raw).unwrap_err();
    assert_eq!(err.to_string(), "invalid duration for ACTIVITIES_REMOVAL_MESSAGE_MS: -1");
}

#[test]
fn resolve_keeps_valid_values_next_to_an_invalid_one() {
    let raw = RawConfig {
        api_base: Some("/backend/"),
        signup_message_ms: Some("2500"),
        removal_message_ms: Some("-1"),
    };
    let cfg = ClientConfig::resolve(raw);
    assert_eq!(cfg.api_base, "/backend");
    assert_eq!(cfg.signup_message, Duration::from_millis(2_500));
    assert_eq!(cfg.removal_message, Duration::from_millis(DEFAULT_REMOVAL_MESSAGE_MS));
}

#[test]
fn resolve_matches_parse_when_everything_is_valid() {
    let raw = RawConfig { api_base: Some("/api"), signup_message_ms: Some("100"), removal_message_ms: Some("200") };
    assert_eq!(ClientConfig::resolve(raw), ClientConfig::parse(raw).unwrap());
}
