//! End-to-end tests for webhook receiver settings validation through the
//! public API, covering both wire formats and injected template defaults.

use alert_receivers::error::ConfigError;
use alert_receivers::receivers::webhook::validate_config;
use alert_receivers::receivers::{FactoryContext, JsonDecoder, YamlDecoder};
use alert_receivers::templates::TemplateDefaults;
use proptest::prelude::*;
use secrecy::ExposeSecret;

#[test]
fn yaml_settings_validate_end_to_end() {
    let payload = b"
url: https://example.com/hook
httpMethod: PUT
maxAlerts: 5
authorization_credentials: tok-123
title: 'CPU alert'
";
    let ctx = FactoryContext::new(YamlDecoder);
    let config = validate_config(payload, &ctx).unwrap();

    assert_eq!(config.url, "https://example.com/hook");
    assert_eq!(config.http_method, "PUT");
    assert_eq!(config.max_alerts, 5);
    assert_eq!(config.authorization_scheme, "Bearer");
    assert_eq!(
        config
            .authorization_credentials
            .as_ref()
            .unwrap()
            .expose_secret(),
        "tok-123"
    );
    assert_eq!(config.title, "CPU alert");
}

#[test]
fn yaml_quoted_max_alerts_is_coerced() {
    let payload = b"
url: https://example.com/hook
maxAlerts: '12'
";
    let ctx = FactoryContext::new(YamlDecoder);
    let config = validate_config(payload, &ctx).unwrap();
    assert_eq!(config.max_alerts, 12);
}

#[test]
fn yaml_syntax_error_yields_decode_error() {
    let payload = b"url: [unclosed";
    let ctx = FactoryContext::new(YamlDecoder);
    let err = validate_config(payload, &ctx).unwrap_err();
    assert!(matches!(err, ConfigError::Decode(_)));
    assert!(err.to_string().starts_with("failed to unmarshal settings: "));
}

#[test]
fn injected_template_defaults_fill_empty_fields() {
    let defaults = TemplateDefaults {
        title: "[test] title".to_string(),
        message: "[test] message".to_string(),
    };
    let ctx = FactoryContext::with_defaults(JsonDecoder, defaults);
    let config = validate_config(br#"{"url": "http://localhost"}"#, &ctx).unwrap();

    assert_eq!(config.title, "[test] title");
    assert_eq!(config.message, "[test] message");
}

#[test]
fn dual_auth_rejected_across_formats() {
    let json = br#"{
        "url": "http://localhost",
        "username": "u",
        "password": "p",
        "authorization_credentials": "c"
    }"#;
    let yaml = b"
url: http://localhost
username: u
password: p
authorization_credentials: c
";
    let json_err = validate_config(json, &FactoryContext::new(JsonDecoder)).unwrap_err();
    let yaml_err = validate_config(yaml, &FactoryContext::new(YamlDecoder)).unwrap_err();
    assert_eq!(json_err.to_string(), yaml_err.to_string());
    assert!(json_err.to_string().contains("only 1 is permitted"));
}

proptest! {
    /// Missing `url` fails with the url validation error no matter what the
    /// other fields contain.
    #[test]
    fn missing_url_always_rejected(
        method in "[A-Z]{0,8}",
        title in "\\PC{0,32}",
        message in "\\PC{0,32}",
        max_alerts in any::<i64>(),
    ) {
        let payload = serde_json::json!({
            "httpMethod": method,
            "title": title,
            "message": message,
            "maxAlerts": max_alerts,
        });
        let ctx = FactoryContext::new(JsonDecoder);
        let err = validate_config(payload.to_string().as_bytes(), &ctx).unwrap_err();
        prop_assert_eq!(err.to_string(), "required field 'url' is not specified");
    }

    /// An arbitrary `maxAlerts` string never fails validation: it either
    /// parses as an integer or silently resolves to zero.
    #[test]
    fn max_alerts_strings_never_error(raw in "\\PC{0,16}") {
        let payload = serde_json::json!({
            "url": "http://localhost",
            "maxAlerts": raw.clone(),
        });
        let ctx = FactoryContext::new(JsonDecoder);
        let config = validate_config(payload.to_string().as_bytes(), &ctx).unwrap();
        let expected = raw.parse::<i64>().unwrap_or(0);
        prop_assert_eq!(config.max_alerts, expected);
    }

    /// A non-empty url with no auth fields always succeeds with the POST
    /// default when no method is supplied.
    #[test]
    fn url_only_settings_always_validate(url in "[a-z]{1,12}") {
        let payload = serde_json::json!({ "url": url });
        let ctx = FactoryContext::new(JsonDecoder);
        let config = validate_config(payload.to_string().as_bytes(), &ctx).unwrap();
        prop_assert_eq!(config.http_method, "POST");
        prop_assert_eq!(config.authorization_scheme, "");
    }
}
