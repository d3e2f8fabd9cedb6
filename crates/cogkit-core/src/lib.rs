//! cogkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cogkit
//! theme scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cogkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ScaffoldService, walker)          │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Notifier)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cogkit-adapters (Infrastructure)     │
//! │ (LocalFilesystem, MemoryFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (MachineName, RewritePlan, select, ..)  │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cogkit_core::prelude::*;
//!
//! // 1. Describe the theme
//! let request = ScaffoldRequest::new().name("Test Theme");
//! let layout = ThemeLayout::with_defaults("/var/www/web");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, notifier);
//! let report = service.scaffold(&request, &layout)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldPlan, ScaffoldService, ScaffoldedTheme,
        ports::{DirEntry, Filesystem, Notifier},
    };
    pub use crate::domain::{
        MachineName, RewritePlan, ScaffoldRequest, StarterkitProfile, ThemeIdentity, ThemeLayout,
    };
    pub use crate::error::{CogkitError, CogkitResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
