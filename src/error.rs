use std::fmt;

use midining_client::ClientError;
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("API error: {0}")]
    ClientError(#[from] ClientError),

    #[error("Render error: {0}")]
    RenderError(#[from] askama::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<midining_shared::Error> for AppError {
    fn from(err: midining_shared::Error) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Blocking notice shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_owned(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            message: message.into(),
        }
    }

    /// Maps a failed request to an alert. A non-success status shows the
    /// body's `error` field, or `status_fallback` when it has none; transport
    /// and decode failures show the generic server error.
    pub fn from_client_error(err: &ClientError, status_fallback: &str) -> Self {
        match err {
            ClientError::Status { error, .. } => {
                Self::error(error.as_deref().unwrap_or(status_fallback))
            }
            _ => Self::error(SERVER_ERROR_MESSAGE),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}
