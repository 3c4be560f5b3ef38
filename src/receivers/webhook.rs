//! Generic webhook receiver configuration.
//!
//! Settings arrive as an untyped payload, get decoded into a loosely typed
//! shadow ([`RawSettings`]), and are then defaulted and cross-checked into
//! the canonical [`Config`] in a single pass. The shadow never escapes
//! [`validate_config`].

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::receivers::{FactoryContext, SettingsDecoder, secret_is_set};

// ============================================================================
// Canonical configuration
// ============================================================================

/// Validated, fully defaulted settings for one webhook notification channel.
///
/// Consumed by the HTTP-dispatch component (`url`, `http_method`, auth
/// fields) and the template-rendering component (`title`, `message`).
///
/// The two authentication mechanisms are mutually exclusive: a `Config`
/// never has both basic auth (`user` + `password`) and an authorization
/// header (`authorization_scheme` + `authorization_credentials`) set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL. Always non-empty.
    pub url: String,

    /// HTTP method used for dispatch. Defaults to `POST`.
    pub http_method: String,

    /// Maximum number of alerts to include in one notification.
    /// 0 means unlimited; also 0 when the setting was absent or unparsable.
    pub max_alerts: i64,

    /// Authorization header scheme. Defaults to `Bearer` when credentials
    /// are set without a scheme; empty when the header is not used.
    pub authorization_scheme: String,

    /// Authorization header credentials.
    pub authorization_credentials: Option<SecretString>,

    /// HTTP basic auth username.
    pub user: Option<SecretString>,

    /// HTTP basic auth password.
    pub password: Option<SecretString>,

    /// Notification title template.
    pub title: String,

    /// Notification body template.
    pub message: String,
}

// ============================================================================
// Raw settings shadow
// ============================================================================

/// Numeric setting tolerant of integer, float, and string encodings.
///
/// Operators submit `maxAlerts` both as a JSON number and as a quoted
/// string; YAML adds unquoted scalars. Anything that is not an integer
/// resolves to 0 rather than failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Integer value, or 0 when the raw value is not an integer.
    fn resolve(&self) -> i64 {
        match self {
            Self::Int(n) => *n,
            // Fractional values carry no integer meaning here.
            Self::Float(_) => 0,
            Self::Text(s) => s.parse().unwrap_or(0),
        }
    }
}

/// Field-for-field shadow of [`Config`] before defaulting and coercion.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    url: String,

    #[serde(default, rename = "httpMethod")]
    http_method: String,

    #[serde(default, rename = "maxAlerts")]
    max_alerts: Option<RawNumber>,

    #[serde(default)]
    authorization_scheme: String,

    #[serde(default)]
    authorization_credentials: Option<SecretString>,

    #[serde(default, rename = "username")]
    user: Option<SecretString>,

    #[serde(default)]
    password: Option<SecretString>,

    #[serde(default)]
    title: String,

    #[serde(default)]
    message: String,
}

// ============================================================================
// Validation
// ============================================================================

/// Validates a raw webhook settings payload into a [`Config`].
///
/// Pure over its inputs plus the defaults carried by `ctx`; safe to call
/// concurrently from multiple callers.
///
/// # Errors
///
/// Returns [`ConfigError::Decode`] when the payload cannot be decoded into
/// the expected shape, and [`ConfigError::Validation`] when `url` is missing
/// or both authentication mechanisms are configured at once. An unparsable
/// `maxAlerts` is not an error: it resolves to 0.
pub fn validate_config<D: SettingsDecoder>(
    settings: &[u8],
    ctx: &FactoryContext<D>,
) -> Result<Config, ConfigError> {
    let raw: RawSettings = ctx.decoder.decode(settings).map_err(ConfigError::Decode)?;

    if raw.url.is_empty() {
        return Err(ConfigError::Validation(
            "required field 'url' is not specified".to_string(),
        ));
    }

    let http_method = if raw.http_method.is_empty() {
        "POST".to_string()
    } else {
        raw.http_method
    };

    let max_alerts = raw.max_alerts.as_ref().map_or(0, RawNumber::resolve);

    let mut authorization_scheme = raw.authorization_scheme;
    if secret_is_set(raw.authorization_credentials.as_ref()) && authorization_scheme.is_empty() {
        authorization_scheme = "Bearer".to_string();
    }

    // Evaluated on the final scheme: credentials that triggered the Bearer
    // default still conflict with basic auth.
    if secret_is_set(raw.user.as_ref())
        && secret_is_set(raw.password.as_ref())
        && !authorization_scheme.is_empty()
        && secret_is_set(raw.authorization_credentials.as_ref())
    {
        return Err(ConfigError::Validation(
            "both HTTP Basic Authentication and Authorization Header are set, only 1 is permitted"
                .to_string(),
        ));
    }

    let title = if raw.title.is_empty() {
        ctx.defaults.title.clone()
    } else {
        raw.title
    };

    let message = if raw.message.is_empty() {
        ctx.defaults.message.clone()
    } else {
        raw.message
    };

    tracing::debug!(method = %http_method, max_alerts, "validated webhook receiver settings");

    Ok(Config {
        url: raw.url,
        http_method,
        max_alerts,
        authorization_scheme,
        authorization_credentials: raw.authorization_credentials,
        user: raw.user,
        password: raw.password,
        title,
        message,
    })
}

// ============================================================================
// Tests
// ============================================================================
