//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cogkit-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::CogkitResult;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    /// Final path component, lossily converted to UTF-8.
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, is_dir }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cogkit_adapters::filesystem::LocalFilesystem` (production)
/// - `cogkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are absolute (already joined to the project root by the caller)
/// - Existence checks return `bool`; everything that writes returns a result
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Copy the tree at `source` onto `destination`.
    ///
    /// Creates missing directories, overwrites colliding files and leaves
    /// files that only exist in `destination` alone. Fails with
    /// `ApplicationError::CopyFailed` naming the first path that could not
    /// be copied; whatever was copied before stays.
    fn mirror(&self, source: &Path, destination: &Path) -> CogkitResult<()>;

    /// Immediate children of a directory, sorted by name.
    fn read_dir(&self, path: &Path) -> CogkitResult<Vec<DirEntry>>;

    /// Read a whole file. Contents are bytes in whatever encoding the
    /// template ships; nothing here assumes UTF-8.
    fn read(&self, path: &Path) -> CogkitResult<Vec<u8>>;

    /// Replace the contents of a file.
    fn write(&self, path: &Path, content: &[u8]) -> CogkitResult<()>;

    /// Rename a file in place.
    fn rename(&self, from: &Path, to: &Path) -> CogkitResult<()>;
}

/// Port for user-facing progress notices.
///
/// Implemented by:
/// - `cogkit_adapters::notifier::TracingNotifier` (log only)
/// - `cogkit_adapters::notifier::RecordingNotifier` (testing)
/// - the CLI's console notifier
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}
