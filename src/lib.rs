//! `alert-receivers` - Validation for alert notification receiver configurations
//!
//! This library turns untyped, operator-supplied settings payloads (JSON or
//! YAML) into strongly typed, fully defaulted receiver configurations, or
//! rejects them with a precise error. It performs no I/O: dispatching the
//! notification, rendering templates, and storing secrets are all downstream
//! concerns.

pub mod error;
pub mod receivers;
pub mod templates;
