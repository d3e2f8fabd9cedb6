// ============================================================================
// domain/error.rs - INPUT VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside the root error)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("The name of the theme was not specified")]
    MissingThemeName,

    #[error("Machine name derived from '{input}' is empty: it must contain a letter a-z")]
    EmptyMachineName { input: String },

    #[error("Invalid machine name '{value}': {reason}")]
    InvalidMachineName { value: String, reason: String },

    #[error("Unknown build task: {name}")]
    UnknownTask { name: String },

    // ========================================================================
    // Rewrite rule construction
    // ========================================================================
    #[error("Invalid rewrite pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingThemeName => vec![
                "Pass a human-readable name: --name \"My Theme\"".into(),
                "Or pass a machine name directly: --machine-name my_theme".into(),
            ],
            Self::EmptyMachineName { input } => vec![
                format!("'{}' has no letter left after cleaning", input),
                "Machine names keep only a-z, 0-9 and '_' and must start with a letter".into(),
                "Example: --machine-name my_theme".into(),
            ],
            Self::InvalidMachineName { .. } => vec![
                "Machine names match [a-z][a-z0-9_]*".into(),
            ],
            Self::UnknownTask { .. } => vec!["List the build tasks with: cogkit tasks".into()],
            Self::InvalidPattern { .. } => vec!["This is a bug in a built-in rewrite rule".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingThemeName
            | Self::EmptyMachineName { .. }
            | Self::InvalidMachineName { .. }
            | Self::UnknownTask { .. } => ErrorCategory::Validation,
            Self::InvalidPattern { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
