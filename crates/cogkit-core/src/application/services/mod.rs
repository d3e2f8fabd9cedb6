//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a theme".

pub mod scaffold_service;
pub mod walker;

pub use scaffold_service::{ScaffoldPlan, ScaffoldService, ScaffoldedTheme};
