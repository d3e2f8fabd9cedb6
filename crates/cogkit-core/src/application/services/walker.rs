//! Recursive tree walk driven by a selection predicate.
//!
//! The walker only knows about directories and files. What to skip, what to
//! descend into and what to collect is decided by the caller's predicate,
//! usually [`crate::domain::select`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::application::ports::Filesystem;
use crate::domain::{Selection, WalkEntry};
use crate::error::CogkitResult;

/// Collect every file under `root` the predicate includes.
///
/// `root` itself is not offered to the predicate. Results are keyed by full
/// path, so files sharing a name in different directories are all kept.
pub fn collect<F>(filesystem: &dyn Filesystem, root: &Path, mut select: F) -> CogkitResult<BTreeSet<PathBuf>>
where
    F: FnMut(WalkEntry<'_>) -> Selection,
{
    let mut selected = BTreeSet::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in filesystem.read_dir(&dir)? {
            let verdict = select(WalkEntry {
                name: &entry.name,
                is_dir: entry.is_dir,
            });
            trace!(path = %entry.path.display(), ?verdict, "walk");

            match verdict {
                Selection::Descend if entry.is_dir => pending.push(entry.path),
                Selection::Include if !entry.is_dir => {
                    selected.insert(entry.path);
                }
                _ => {}
            }
        }
    }

    Ok(selected)
}
