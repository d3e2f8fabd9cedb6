//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cogkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: tree copy, directory listing, file read/write/rename
//!   - `Notifier`: progress notices for the person running the command
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DirEntry, Filesystem, Notifier};

#[cfg(test)]
pub use output::{MockFilesystem, MockNotifier};
