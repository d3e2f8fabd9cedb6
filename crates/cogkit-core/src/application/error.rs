//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input rules.
//! Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while scaffolding a theme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The directory the destination would be created in is missing.
    #[error("The parent directory of the destination does not exist: {path}")]
    DestinationParentMissing { path: PathBuf },

    /// The template directory is missing.
    #[error("The STARTERKIT directory was not found in: {path}")]
    StarterkitMissing { path: PathBuf },

    /// Copying the template tree did not complete.
    #[error("Could not copy {path}: {reason}")]
    CopyFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationParentMissing { path } => vec![
                format!("Create it first: mkdir -p {}", path.display()),
                "Or choose another destination with --path".into(),
                "Run from the Drupal web root, or pass --root".into(),
            ],
            Self::StarterkitMissing { path } => vec![
                format!("Expected the starter kit at: {}", path.display()),
                "Install the cog base theme, or point --starterkit at the template".into(),
            ],
            Self::CopyFailed { path, .. } => vec![
                format!("Failed to copy: {}", path.display()),
                "Check that you have write permissions on the destination".into(),
                "Files copied so far are left in place".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationParentMissing { .. } | Self::StarterkitMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::CopyFailed { .. } => ErrorCategory::Copy,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
