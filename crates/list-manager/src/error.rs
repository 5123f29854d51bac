//! List Errors
//!
//! Failure taxonomy shared by every list operation.

use thiserror::Error;

pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A required field was blank; raised before any request is sent
    #[error("{0}")]
    Validation(String),

    /// Network failure or a response that could not be read
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered `status: false`
    #[error("{0}")]
    Application(String),

    /// JSON arrived but not in the expected envelope shape
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("{0} is not supported here")]
    Unsupported(&'static str),

    /// A mutation is already in flight
    #[error("another request is still in progress")]
    Busy,
}

impl ListError {
    /// Message to show the user. Validation and server messages are shown
    /// verbatim, everything else gets the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ListError::Validation(msg) | ListError::Application(msg) if !msg.trim().is_empty() => {
                msg.clone()
            }
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ListError::Transport(_) | ListError::Decode(_))
    }
}

impl From<serde_json::Error> for ListError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            ListError::Decode(error.to_string())
        } else {
            ListError::Transport(format!("invalid JSON: {}", error))
        }
    }
}
