//! UI Ports
//!
//! Notification and confirmation seams injected into the manager so list
//! logic runs without a real UI.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { tone: Tone::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { tone: Tone::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { tone: Tone::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { tone: Tone::Error, message: message.into() }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Text of a blocking confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            confirm_label: "Yes, delete it!".to_string(),
        }
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

/// Resolves to `true` only when the user explicitly confirms.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}
