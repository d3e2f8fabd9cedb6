// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for cogkit.
//!
//! Pure rules, no I/O. Filesystem access and notifications are handled via
//! ports (traits) defined in the application layer.
//!
//! - `machine_name`: deriving and validating theme machine names
//! - `request`: the scaffold request and its validation
//! - `layout`: project root, starter kit, destination and theme paths
//! - `starterkit`: the placeholder token and the template's fixed files
//! - `selection`: which walked entries get rewritten
//! - `rewrite`: ordered literal/regex text rewriting
//! - `tasks`: the starter kit's declared build task graph
pub mod error;
pub mod layout;
pub mod machine_name;
pub mod request;
pub mod rewrite;
pub mod selection;
pub mod starterkit;
pub mod tasks;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use layout::{ThemeLayout, canonicalize};
pub use machine_name::MachineName;
pub use request::{ScaffoldRequest, ThemeIdentity};
pub use rewrite::{RewritePlan, RewriteStep, TokenReplacement};
pub use selection::{Selection, WalkEntry, select};
pub use starterkit::{PLACEHOLDER_TOKEN, StarterkitProfile};
pub use tasks::{TaskDefinition, TaskNode};
