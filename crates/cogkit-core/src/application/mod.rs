//! Application layer for cogkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService) and the tree walker
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules of its own. Machine names, rewrite rules and walk selection live
//! in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldPlan, ScaffoldService, ScaffoldedTheme};

// Re-export port traits (for adapter implementation)
pub use ports::{DirEntry, Filesystem, Notifier};

pub use error::ApplicationError;
