//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use cogkit_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{CogkitError, CogkitResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn mirror(&self, source: &Path, destination: &Path) -> CogkitResult<()> {
        // Symlinks are followed: a linked directory is copied as a directory,
        // a linked file as its contents.
        for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source).to_path_buf();
                copy_error(&path, e.to_string())
            })?;

            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| copy_error(entry.path(), e.to_string()))?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| copy_error(&target, e.to_string()))?;
            } else {
                fs::copy(entry.path(), &target)
                    .map_err(|e| copy_error(entry.path(), e.to_string()))?;
                trace!(path = %target.display(), "copied");
            }
        }
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> CogkitResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))? {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            let child = entry.path();
            let is_dir = child.is_dir();
            entries.push(DirEntry::new(child, is_dir));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, path: &Path) -> CogkitResult<Vec<u8>> {
        fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &[u8]) -> CogkitResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> CogkitResult<()> {
        fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CogkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn copy_error(path: &Path, reason: String) -> CogkitError {
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
