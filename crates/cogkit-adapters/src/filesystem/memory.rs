//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use cogkit_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{CogkitError, CogkitResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    /// Files `mirror` refuses to copy.
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_all(path.as_ref());
        }
        self
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> &Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make `mirror` fail when it reaches this file.
    pub fn deny_copy(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content as UTF-8 (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        String::from_utf8(self.read_bytes(path)?).ok()
    }

    /// Read a file's raw content (testing helper).
    pub fn read_bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// File paths under `root`, sorted.
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.list_files()
            .into_iter()
            .filter(|p| p.starts_with(root))
            .collect()
    }

    fn tree(&self) -> CogkitResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn tree_mut(&self) -> CogkitResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.tree()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.tree()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn mirror(&self, source: &Path, destination: &Path) -> CogkitResult<()> {
        let mut inner = self.tree_mut()?;

        if !inner.directories.contains(source) {
            return Err(ApplicationError::CopyFailed {
                path: source.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(source))
            .cloned()
            .collect();
        let files: Vec<(PathBuf, Vec<u8>)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(source))
            .map(|(p, c)| (p.clone(), c.clone()))
            .collect();

        for dir in directories {
            let target = rebase(&dir, source, destination);
            inner.add_dir_all(&target);
        }

        for (path, content) in files {
            if inner.unreadable.contains(&path) {
                return Err(ApplicationError::CopyFailed {
                    path,
                    reason: "Permission denied".into(),
                }
                .into());
            }
            inner.files.insert(rebase(&path, source, destination), content);
        }

        Ok(())
    }

    fn read_dir(&self, path: &Path) -> CogkitResult<Vec<DirEntry>> {
        let inner = self.tree()?;

        if !inner.directories.contains(path) {
            return Err(not_found(path, "list directory"));
        }

        let dirs = inner
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .map(|d| DirEntry::new(d.clone(), true));
        let files = inner
            .files
            .keys()
            .filter(|f| f.parent() == Some(path))
            .map(|f| DirEntry::new(f.clone(), false));

        let mut entries: Vec<DirEntry> = dirs.chain(files).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, path: &Path) -> CogkitResult<Vec<u8>> {
        self.tree()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "read file"))
    }

    fn write(&self, path: &Path, content: &[u8]) -> CogkitResult<()> {
        let mut inner = self.tree_mut()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> CogkitResult<()> {
        let mut inner = self.tree_mut()?;
        let content = inner
            .files
            .remove(from)
            .ok_or_else(|| not_found(from, "rename file"))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }
}

fn rebase(path: &Path, from: &Path, onto: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(relative) if relative.as_os_str().is_empty() => onto.to_path_buf(),
        Ok(relative) => onto.join(relative),
        Err(_) => path.to_path_buf(),
    }
}

fn not_found(path: &Path, operation: &str) -> CogkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: No such file or directory", operation),
    }
    .into()
}

fn lock_poisoned() -> CogkitError {
    CogkitError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/kit/templates/page.html.twig", "x");

        assert!(fs.is_dir(Path::new("/kit")));
        assert!(fs.is_dir(Path::new("/kit/templates")));
        assert!(fs.is_file(Path::new("/kit/templates/page.html.twig")));
    }

    #[test]
    fn mirror_rebases_and_keeps_existing_files() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/kit/a.txt", "new")
            .add_dir("/kit/empty")
            .add_file("/out/a.txt", "old")
            .add_file("/out/b.txt", "mine");

        fs.mirror(Path::new("/kit"), Path::new("/out")).unwrap();

        assert_eq!(fs.read_file("/out/a.txt").as_deref(), Some("new"));
        assert_eq!(fs.read_file("/out/b.txt").as_deref(), Some("mine"));
        assert!(fs.is_dir(Path::new("/out/empty")));
        assert_eq!(fs.read_file("/kit/a.txt").as_deref(), Some("new"));
    }

    #[test]
    fn mirror_stops_at_a_denied_file() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/kit/a.txt", "a")
            .add_file("/kit/b.txt", "b")
            .deny_copy("/kit/b.txt");

        let err = fs.mirror(Path::new("/kit"), Path::new("/out")).unwrap_err();

        assert!(matches!(
            err,
            CogkitError::Application(ApplicationError::CopyFailed { .. })
        ));
        assert!(fs.is_file(Path::new("/out/a.txt")));
        assert!(!fs.is_file(Path::new("/out/b.txt")));
    }

    #[test]
    fn read_dir_lists_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/z.txt", "")
            .add_file("/t/sub/deep.txt", "")
            .add_dir("/t/a");

        let names: Vec<_> = fs
            .read_dir(Path::new("/t"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "sub", "z.txt"]);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write(Path::new("/missing/x"), b"x").is_err());
    }

    #[test]
    fn files_hold_arbitrary_bytes() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/logo.png", &b"\x89PNG\xff\xfe"[..]);

        assert_eq!(fs.read(Path::new("/t/logo.png")).unwrap(), b"\x89PNG\xff\xfe");
        assert_eq!(fs.read_file("/t/logo.png"), None);
    }

    #[test]
    fn rename_moves_content() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/STARTERKIT.theme", "x");
        fs.rename(Path::new("/t/STARTERKIT.theme"), Path::new("/t/acme.theme"))
            .unwrap();

        assert_eq!(fs.list_files(), vec![PathBuf::from("/t/acme.theme")]);
    }
}
