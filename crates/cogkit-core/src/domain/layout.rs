//! Where things live: project root, starter kit, destination, new theme.
//!
//! Path arithmetic only. Existence checks belong to the scaffold service,
//! which asks the `Filesystem` port.

use std::path::{Component, Path, PathBuf};

use crate::domain::machine_name::MachineName;
use crate::domain::starterkit::{DEFAULT_DESTINATION, DEFAULT_HOST_THEME_PATH, STARTERKIT_DIR};

/// Lexically canonicalise a path.
///
/// Resolves `.` and `..` without touching the filesystem and rebuilds the
/// path with native separators. A `..` that would climb above the root of an
/// absolute path is dropped; leading `..` segments of a relative path are
/// kept. The empty path stays empty.
pub fn canonicalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Resolved locations for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLayout {
    project_root: PathBuf,
    destination: PathBuf,
    starterkit: PathBuf,
}

impl ThemeLayout {
    /// Layout with the starter kit at its conventional place in the host
    /// theme (`<root>/themes/contrib/cog/STARTERKIT`).
    pub fn new(project_root: impl Into<PathBuf>, destination: impl AsRef<Path>) -> Self {
        let project_root = project_root.into();
        let starterkit = Self::starterkit_in(&project_root, DEFAULT_HOST_THEME_PATH);
        Self {
            destination: canonicalize(destination.as_ref()),
            project_root,
            starterkit,
        }
    }

    /// Layout for the default destination, `themes/custom`.
    pub fn with_defaults(project_root: impl Into<PathBuf>) -> Self {
        Self::new(project_root, DEFAULT_DESTINATION)
    }

    /// Override the starter kit location (absolute, or relative to the root).
    pub fn with_starterkit(mut self, starterkit: impl AsRef<Path>) -> Self {
        self.starterkit = canonicalize(&self.join_root(starterkit.as_ref()));
        self
    }

    /// `<root>/<host_theme>/STARTERKIT`, canonicalised.
    pub fn starterkit_in(project_root: &Path, host_theme: impl AsRef<Path>) -> PathBuf {
        canonicalize(&project_root.join(host_theme).join(STARTERKIT_DIR))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Canonical destination as given (relative to the root unless absolute).
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn starterkit(&self) -> &Path {
        &self.starterkit
    }

    /// `<root>/<destination>`.
    pub fn destination_dir(&self) -> PathBuf {
        self.join_root(&self.destination)
    }

    /// The directory that must already exist: the parent of the destination.
    ///
    /// The destination itself may be created by the copy, its ancestors may
    /// not.
    pub fn destination_parent(&self) -> PathBuf {
        match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.join_root(parent),
            _ if self.destination.is_absolute() => self.destination.clone(),
            _ => self.project_root.clone(),
        }
    }

    /// `<root>/<destination>/<machine_name>`.
    pub fn sub_theme_path(&self, machine_name: &MachineName) -> PathBuf {
        self.destination_dir().join(machine_name.as_str())
    }

    fn join_root(&self, path: &Path) -> PathBuf {
        if path.as_os_str().is_empty() {
            self.project_root.clone()
        } else {
            self.project_root.join(path)
        }
    }
}
