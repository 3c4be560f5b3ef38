//! Default message templates shared by all receivers.
//!
//! These are opaque template expressions owned by the message-formatting
//! subsystem; receivers only need them as fallback values for empty
//! title/message settings. Validation injects them via [`TemplateDefaults`]
//! so it stays testable in isolation.

/// Default template expression for the notification title.
pub const DEFAULT_MESSAGE_TITLE_EMBED: &str = r#"{{ template "default.title" . }}"#;

/// Default template expression for the notification body.
pub const DEFAULT_MESSAGE_EMBED: &str = r#"{{ template "default.message" . }}"#;

/// System-wide default title/message templates, injected into validation.
#[derive(Debug, Clone)]
pub struct TemplateDefaults {
    /// Fallback for an empty `title` setting.
    pub title: String,

    /// Fallback for an empty `message` setting.
    pub message: String,
}

impl Default for TemplateDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_MESSAGE_TITLE_EMBED.to_string(),
            message: DEFAULT_MESSAGE_EMBED.to_string(),
        }
    }
}
