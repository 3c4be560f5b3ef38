//! Shared plumbing for notification receivers.
//!
//! Receivers decode operator-supplied settings payloads through a
//! caller-supplied [`SettingsDecoder`], so the wire format (JSON or YAML)
//! is the caller's choice. Credential fields decode into
//! [`secrecy::SecretString`], which keeps them out of `Debug` output and
//! forces explicit exposure downstream.

pub mod webhook;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::error::DecodeCause;
use crate::templates::TemplateDefaults;

// ============================================================================
// Decoder capability
// ============================================================================

/// Format-agnostic decoder for raw settings payloads.
///
/// Implementations decode the payload into whatever shape the receiver
/// asks for; they do not interpret the settings themselves.
pub trait SettingsDecoder {
    /// Decodes `raw` into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying parser error when the payload is malformed
    /// or does not match the target shape.
    fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, DecodeCause>;
}

/// Decoder for JSON settings payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl SettingsDecoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, DecodeCause> {
        serde_json::from_slice(raw).map_err(Into::into)
    }
}

/// Decoder for YAML settings payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl SettingsDecoder for YamlDecoder {
    fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, DecodeCause> {
        serde_yaml::from_slice(raw).map_err(Into::into)
    }
}

// ============================================================================
// Factory context
// ============================================================================

/// Ambient context handed to receiver validation.
///
/// Bundles the decoder for the settings wire format with the system-wide
/// default templates owned by the formatting subsystem.
#[derive(Debug, Clone)]
pub struct FactoryContext<D> {
    /// Decoder for the settings payload.
    pub decoder: D,

    /// Fallback title/message templates for empty settings.
    pub defaults: TemplateDefaults,
}

impl<D: SettingsDecoder> FactoryContext<D> {
    /// Creates a context with the system default templates.
    #[must_use]
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            defaults: TemplateDefaults::default(),
        }
    }

    /// Creates a context with caller-supplied default templates.
    #[must_use]
    pub const fn with_defaults(decoder: D, defaults: TemplateDefaults) -> Self {
        Self { decoder, defaults }
    }
}

// ============================================================================
// Secret helpers
// ============================================================================

/// Returns `true` when an optional secret field carries a non-empty value.
///
/// Absent fields and empty strings both count as unset; operators commonly
/// submit empty strings for fields they left blank in a form.
#[must_use]
pub fn secret_is_set(secret: Option<&SecretString>) -> bool {
    secret.is_some_and(|s| !s.expose_secret().is_empty())
}
