//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole theme scaffolding workflow:
//! 1. Validate the request and derive the machine name
//! 2. Check the destination parent and the starter kit exist
//! 3. Mirror the starter kit into `<root>/<destination>/<machine_name>`
//! 4. Rewrite the manifest
//! 5. Replace the placeholder in selected files and rename them
//!
//! Steps 1 and 2 never write; a failure there leaves the disk untouched.
//! Nothing is rolled back after step 3 has started.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Notifier},
        services::walker,
    },
    domain::{
        MachineName, RewritePlan, ScaffoldRequest, StarterkitProfile, ThemeLayout,
        TokenReplacement, select,
    },
    error::CogkitResult,
};

/// Resolved outcome of validation and path checks.
///
/// Returned by [`ScaffoldService::plan`] without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub name: String,
    pub machine_name: MachineName,
    pub starterkit: PathBuf,
    pub path: PathBuf,
    /// The theme directory is already there and will be mirrored over.
    pub exists: bool,
}

/// Report of a finished scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedTheme {
    pub name: String,
    pub machine_name: MachineName,
    pub path: PathBuf,
    /// Files whose contents changed, by their path before renaming.
    pub rewritten: Vec<PathBuf>,
    /// `(from, to)` for every renamed file.
    pub renamed: Vec<(PathBuf, PathBuf)>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    notifier: Box<dyn Notifier>,
    profile: StarterkitProfile,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use cogkit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(notifier),   // impl Notifier
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            filesystem,
            notifier,
            profile: StarterkitProfile::cog(),
        }
    }

    /// Use a different starter kit contract.
    pub fn with_profile(mut self, profile: StarterkitProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Validate and resolve paths without writing anything.
    ///
    /// # Errors
    /// - `DomainError::MissingThemeName` / `EmptyMachineName`
    /// - `ApplicationError::DestinationParentMissing`
    /// - `ApplicationError::StarterkitMissing`
    #[instrument(skip_all, fields(destination = %layout.destination().display()))]
    pub fn plan(&self, request: &ScaffoldRequest, layout: &ThemeLayout) -> CogkitResult<ScaffoldPlan> {
        let identity = request.identify()?;

        let parent = layout.destination_parent();
        if !self.filesystem.is_dir(&parent) {
            return Err(ApplicationError::DestinationParentMissing { path: parent }.into());
        }

        let starterkit = layout.starterkit().to_path_buf();
        if !self.filesystem.is_dir(&starterkit) {
            return Err(ApplicationError::StarterkitMissing { path: starterkit }.into());
        }

        let path = layout.sub_theme_path(&identity.machine_name);
        let exists = self.filesystem.is_dir(&path);

        Ok(ScaffoldPlan {
            name: identity.name,
            machine_name: identity.machine_name,
            starterkit,
            path,
            exists,
        })
    }

    /// Scaffold a new theme.
    ///
    /// This is the main use case.
    #[instrument(skip_all, fields(destination = %layout.destination().display()))]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        layout: &ThemeLayout,
    ) -> CogkitResult<ScaffoldedTheme> {
        let plan = self.plan(request, layout)?;
        info!(
            machine_name = %plan.machine_name,
            path = %plan.path.display(),
            "Scaffolding theme"
        );

        self.notifier.notice("Copying files from STARTERKIT...");
        self.filesystem.mirror(&plan.starterkit, &plan.path)?;

        self.notifier.notice("Updating .info.yml file...");
        self.rewrite_manifest(&plan.path, &plan.name, request.description_text())?;

        self.notifier
            .notice(&format!("Replacing \"{}\" in all files...", self.profile.token));
        let targets = self.rewrite_targets(&plan.path)?;
        let (rewritten, renamed) = self.replace_placeholder(&targets, &plan.machine_name)?;

        self.notifier.notice(&format!(
            "Starter kit for \"{}\" created in: {}",
            plan.name,
            plan.path.display()
        ));
        info!(
            rewritten = rewritten.len(),
            renamed = renamed.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldedTheme {
            name: plan.name,
            machine_name: plan.machine_name,
            path: plan.path,
            rewritten,
            renamed,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Apply the manifest rules. A manifest that cannot be read, is empty,
    /// or is not UTF-8 is left as it is; the token pass still covers it.
    fn rewrite_manifest(&self, theme: &Path, name: &str, description: Option<&str>) -> CogkitResult<()> {
        let manifest = theme.join(self.profile.manifest_file);

        let bytes = match self.filesystem.read(&manifest) {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                debug!(path = %manifest.display(), "Manifest is empty, skipping");
                return Ok(());
            }
            Err(e) => {
                warn!(path = %manifest.display(), error = %e, "Manifest not readable, skipping");
                return Ok(());
            }
        };
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %manifest.display(), error = %e, "Manifest is not UTF-8, skipping");
                return Ok(());
            }
        };

        let updated = RewritePlan::manifest(name, description)?.apply(&content);
        if updated != content {
            self.filesystem.write(&manifest, updated.as_bytes())?;
        }
        Ok(())
    }

    /// Walk selection plus the seed files that exist.
    fn rewrite_targets(&self, theme: &Path) -> CogkitResult<BTreeSet<PathBuf>> {
        let profile = &self.profile;
        let mut targets = walker::collect(self.filesystem.as_ref(), theme, |entry| {
            select(profile, entry)
        })?;

        for seed in profile.seed_files {
            let path = theme.join(seed);
            if self.filesystem.is_file(&path) {
                targets.insert(path);
            } else {
                debug!(path = %path.display(), "Seed file absent");
            }
        }

        Ok(targets)
    }

    fn replace_placeholder(
        &self,
        targets: &BTreeSet<PathBuf>,
        machine_name: &MachineName,
    ) -> CogkitResult<(Vec<PathBuf>, Vec<(PathBuf, PathBuf)>)> {
        let replace = TokenReplacement::new(self.profile.token, machine_name.as_str());
        let mut rewritten = Vec::new();
        let mut renamed = Vec::new();

        for path in targets {
            let content = self.filesystem.read(path)?;
            if let Some(updated) = replace.apply(&content) {
                self.filesystem.write(path, &updated)?;
                debug!(path = %path.display(), "Rewrote");
                rewritten.push(path.clone());
            }

            if let Some(to) = self.renamed_path(path, machine_name) {
                self.filesystem.rename(path, &to)?;
                debug!(from = %path.display(), to = %to.display(), "Renamed");
                renamed.push((path.clone(), to));
            }
        }

        Ok((rewritten, renamed))
    }

    /// New path if the file name carries the token. Directories in the path
    /// are never renamed.
    fn renamed_path(&self, path: &Path, machine_name: &MachineName) -> Option<PathBuf> {
        let name = path.file_name()?.to_str()?;
        if !name.contains(self.profile.token) {
            return None;
        }
        Some(path.with_file_name(self.profile.rename(name, machine_name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::Sequence;

    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem, MockNotifier};
    use crate::domain::DomainError;
    use crate::error::{CogkitError, ErrorCategory};

    fn layout() -> ThemeLayout {
        ThemeLayout::with_defaults("/site")
    }

    fn quiet() -> Box<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_notice().return_const(());
        Box::new(notifier)
    }

    #[test]
    fn validation_failure_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_mirror().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_notice().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(notifier));
        let err = service
            .scaffold(&ScaffoldRequest::new(), &layout())
            .unwrap_err();

        assert!(matches!(
            err,
            CogkitError::Domain(DomainError::MissingThemeName)
        ));
    }

    #[test]
    fn missing_destination_parent_fails_before_copying() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/site/themes"))
            .return_const(false);
        fs.expect_mirror().never();

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let err = service
            .scaffold(&ScaffoldRequest::new().name("Test Theme"), &layout())
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(matches!(
            err,
            CogkitError::Application(ApplicationError::DestinationParentMissing { .. })
        ));
    }

    #[test]
    fn missing_starterkit_fails_before_copying() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| !p.ends_with("STARTERKIT"));
        fs.expect_mirror().never();

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let err = service
            .scaffold(&ScaffoldRequest::new().name("Test Theme"), &layout())
            .unwrap_err();

        match err {
            CogkitError::Application(ApplicationError::StarterkitMissing { path }) => {
                assert_eq!(path, PathBuf::from("/site/themes/contrib/cog/STARTERKIT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plan_reports_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p != Path::new("/site/themes/custom/test_theme"));
        fs.expect_mirror().never();
        fs.expect_write().never();

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let plan = service
            .plan(&ScaffoldRequest::new().name("Test Theme"), &layout())
            .unwrap();

        assert_eq!(plan.name, "Test Theme");
        assert_eq!(plan.machine_name.as_str(), "test_theme");
        assert_eq!(plan.path, PathBuf::from("/site/themes/custom/test_theme"));
        assert!(!plan.exists);
    }

    #[test]
    fn copy_failure_stops_the_pipeline() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_mirror().times(1).returning(|_, dst| {
            Err(ApplicationError::CopyFailed {
                path: dst.join("css"),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_read().never();

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let err = service
            .scaffold(&ScaffoldRequest::new().name("Test Theme"), &layout())
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Copy);
    }

    #[test]
    fn notices_are_emitted_in_order() {
        let theme = Path::new("/site/themes/custom/acme");

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_is_file().return_const(false);
        fs.expect_mirror().returning(|_, _| Ok(()));
        fs.expect_read().returning(|_| Ok(Vec::new()));
        fs.expect_read_dir().returning(|_| Ok(Vec::new()));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut seq = Sequence::new();
        let mut notifier = MockNotifier::new();
        for _ in 0..4 {
            let seen = Arc::clone(&seen);
            notifier
                .expect_notice()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |m| seen.lock().unwrap().push(m.to_string()));
        }

        let service = ScaffoldService::new(Box::new(fs), Box::new(notifier));
        let report = service
            .scaffold(&ScaffoldRequest::new().name("Acme"), &layout())
            .unwrap();

        assert_eq!(report.path, theme);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "Copying files from STARTERKIT...".to_string(),
                "Updating .info.yml file...".to_string(),
                "Replacing \"STARTERKIT\" in all files...".to_string(),
                "Starter kit for \"Acme\" created in: /site/themes/custom/acme".to_string(),
            ]
        );
    }

    #[test]
    fn unreadable_manifest_is_skipped_but_unreadable_target_is_not() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_is_file().return_const(false);
        fs.expect_mirror().returning(|_, _| Ok(()));
        fs.expect_read_dir().returning(|dir| {
            Ok(vec![DirEntry::new(dir.join("STARTERKIT.theme"), false)])
        });
        fs.expect_read().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        fs.expect_rename().never();

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let err = service
            .scaffold(&ScaffoldRequest::new().name("Acme"), &layout())
            .unwrap_err();

        match err {
            CogkitError::Application(ApplicationError::FilesystemError { path, .. }) => {
                assert!(path.ends_with("STARTERKIT.theme"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_utf8_target_is_rewritten_as_bytes_and_renamed() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_is_file().return_const(false);
        fs.expect_mirror().returning(|_, _| Ok(()));
        fs.expect_read_dir().returning(|dir| {
            Ok(vec![DirEntry::new(dir.join("STARTERKIT-logo.png"), false)])
        });
        fs.expect_read().returning(|p| {
            if p.ends_with("STARTERKIT-logo.png") {
                Ok(b"\x89PNG\xff\xfeSTARTERKIT".to_vec())
            } else {
                Ok(Vec::new())
            }
        });
        fs.expect_write()
            .withf(|p, content| {
                p.ends_with("STARTERKIT-logo.png") && content == b"\x89PNG\xff\xfeacme"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_rename()
            .withf(|from, to| {
                from == Path::new("/site/themes/custom/acme/STARTERKIT-logo.png")
                    && to == Path::new("/site/themes/custom/acme/acme-logo.png")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), quiet());
        let report = service
            .scaffold(&ScaffoldRequest::new().name("Acme"), &layout())
            .unwrap();

        assert_eq!(report.rewritten.len(), 1);
        assert_eq!(report.renamed.len(), 1);
    }

    #[test]
    fn only_the_file_name_is_renamed() {
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()), quiet());
        let machine = MachineName::derive("acme").unwrap();

        assert_eq!(
            service.renamed_path(Path::new("/t/STARTERKIT_dir/STARTERKIT.theme"), &machine),
            Some(PathBuf::from("/t/STARTERKIT_dir/acme.theme"))
        );
        assert_eq!(service.renamed_path(Path::new("/t/page.html.twig"), &machine), None);
    }
}
