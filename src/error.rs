//! Error types for receiver configuration validation.
//!
//! There are exactly two failure modes: the payload could not be decoded
//! into the expected shape, or it decoded fine but is semantically invalid.
//! Neither is retriable with the same input.

use thiserror::Error;

/// Boxed cause returned by a [`SettingsDecoder`](crate::receivers::SettingsDecoder).
pub type DecodeCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Receiver configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings payload could not be decoded into the expected shape.
    ///
    /// Wraps the underlying decoder error as the source.
    #[error("failed to unmarshal settings: {0}")]
    Decode(#[source] DecodeCause),

    /// The payload decoded, but the settings are semantically invalid.
    ///
    /// The message is human-readable and surfaced to the operator verbatim.
    #[error("{0}")]
    Validation(String),
}

/// Result type alias for receiver configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
