//! Unified error handling for cogkit core.
//!
//! Wraps domain and application errors in one type so callers deal with a
//! single `Result`, and gives every error a category and a list of
//! suggestions the CLI can show.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for cogkit core operations.
#[derive(Debug, Error, Clone)]
pub enum CogkitError {
    /// Input rejected by a domain rule.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failure: missing paths, copy or filesystem errors.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CogkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Inspect the active settings with: cogkit config list".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in cogkit".into(),
                "Re-run with -vvv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input: missing or unusable names.
    Validation,
    /// A required directory does not exist.
    NotFound,
    /// Copying the starter kit failed part way.
    Copy,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CogkitResult<T> = Result<T, CogkitError>;
