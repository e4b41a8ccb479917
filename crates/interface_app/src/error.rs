//! Console error handling

use thiserror::Error;

use domain_claims::ClaimError;
use crate::telemetry::TelemetryError;

/// Console error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// How prominently a notice should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Error,
}

/// A titled message for the person at the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Information,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Claim(ClaimError::Validation(kind)) => {
                let mut message = kind.to_string();
                if let Some(first) = message.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                Notice::warning("Validation Error", format!("{message}."))
            }
            AppError::Claim(ClaimError::DocumentTooLarge { .. }) => Notice::warning(
                "File Too Large",
                "File size exceeds 5MB limit. Please choose a smaller file.",
            ),
            AppError::Claim(ClaimError::InvalidStatusTransition { id, from, .. }) => Notice::warning(
                "Claim Already Decided",
                format!("Claim {id} is already {from}."),
            ),
            other => Notice::error("Error", other.to_string()),
        }
    }
}
