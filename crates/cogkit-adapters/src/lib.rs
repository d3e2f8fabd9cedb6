//! Infrastructure adapters for cogkit.
//!
//! This crate implements the ports defined in `cogkit-core::application::ports`.
//! It contains all I/O: the real and in-memory filesystems and the notice
//! sinks.

pub mod filesystem;
pub mod notifier;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use notifier::{RecordingNotifier, TracingNotifier};
