//! Walk selection: which entries of a scaffolded tree get rewritten.
//!
//! The predicate is pure; the recursive walk that consumes it lives in the
//! application layer (`services::walker`) and knows nothing about the rules.

use crate::domain::starterkit::StarterkitProfile;

/// The facts about one directory entry the predicate may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkEntry<'a> {
    pub name: &'a str,
    pub is_dir: bool,
}

impl<'a> WalkEntry<'a> {
    pub fn dir(name: &'a str) -> Self {
        Self { name, is_dir: true }
    }

    pub fn file(name: &'a str) -> Self {
        Self {
            name,
            is_dir: false,
        }
    }
}

/// What the walker should do with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Drop the entry; directories are not descended into.
    Skip,
    /// Recurse into this directory.
    Descend,
    /// Collect this file for rewriting.
    Include,
    /// A file that is walked past but not collected.
    Ignore,
}

/// Selection rules for the placeholder pass.
///
/// Order matters: hidden entries and excluded directory names are rejected
/// before the directory/file split, so a *file* named `node_modules` is
/// skipped too.
pub fn select(profile: &StarterkitProfile, entry: WalkEntry<'_>) -> Selection {
    if entry.name.starts_with('.') {
        return Selection::Skip;
    }
    if profile.is_excluded_dir_name(entry.name) {
        return Selection::Skip;
    }
    if entry.is_dir {
        return Selection::Descend;
    }
    if entry.name.contains(profile.template_marker) || entry.name.contains(profile.token) {
        Selection::Include
    } else {
        Selection::Ignore
    }
}
