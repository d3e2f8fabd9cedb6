//! End-to-end scaffolds through `ScaffoldService` with real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use cogkit_adapters::{LocalFilesystem, MemoryFilesystem, RecordingNotifier};
use cogkit_core::prelude::*;
use cogkit_core::application::ApplicationError;
use tempfile::TempDir;

const MANIFEST: &str = "\
name: Cog Sub-theme Starter Kit
type: theme
description: 'Read the included README.md on how to create a theme with cog.'
# core: 8.x
core: '8.x'
base theme: cog
hidden: true
libraries:
  - STARTERKIT/global-styling

# Information added by Drupal.org packaging script on 2019-03-04
version: '8.x-1.7'
project: 'cog'
datestamp: 1551711234
";

/// Relative path and contents of every file in the fixture starter kit.
fn starterkit_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("STARTERKIT.info.yml", MANIFEST),
        ("STARTERKIT.libraries.yml", "global-styling:\n  css: STARTERKIT.css\n"),
        ("STARTERKIT.theme", "<?php\nfunction STARTERKIT_preprocess_page() {}\n"),
        ("package.json", "{ \"name\": \"STARTERKIT\" }\n"),
        ("theme-settings.php", "<?php // STARTERKIT settings\n"),
        ("README.md", "Replace STARTERKIT by hand.\n"),
        ("templates/page.html.twig", "{{ attach_library('STARTERKIT/global-styling') }}\n"),
        ("templates/layout/page.html.twig", "<div class=\"STARTERKIT\"></div>\n"),
        ("node_modules/pkg/STARTERKIT.js", "STARTERKIT\n"),
        ("asset-builds/css/STARTERKIT.css", "STARTERKIT\n"),
        (".hidden/STARTERKIT.twig", "STARTERKIT\n"),
    ]
}

fn memory_site() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/site/themes/custom");
    for (path, content) in starterkit_files() {
        fs.add_file(Path::new("/site/themes/contrib/cog/STARTERKIT").join(path), content);
    }
    fs
}

fn service(fs: &MemoryFilesystem, notifier: &RecordingNotifier) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(notifier.clone()))
}

fn test_theme() -> ScaffoldRequest {
    ScaffoldRequest::new().name("Test Theme")
}

#[test]
fn scaffolds_test_theme_in_memory() {
    let fs = memory_site();
    let notifier = RecordingNotifier::new();
    let theme = PathBuf::from("/site/themes/custom/test_theme");

    let report = service(&fs, &notifier)
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(report.name, "Test Theme");
    assert_eq!(report.machine_name.as_str(), "test_theme");
    assert_eq!(report.path, theme);

    let info = fs.read_file(theme.join("test_theme.info.yml")).unwrap();
    assert!(info.starts_with("name: Test Theme\n"));
    assert!(info.contains("core: 8.x\n"));
    assert!(info.contains("  - test_theme/global-styling\n"));
    for gone in ["version:", "project:", "datestamp:", "hidden: true", "core: '8.x'"] {
        assert!(!info.contains(gone), "{gone} left in manifest");
    }

    assert_eq!(
        fs.read_file(theme.join("test_theme.theme")).as_deref(),
        Some("<?php\nfunction test_theme_preprocess_page() {}\n")
    );
    assert_eq!(
        fs.read_file(theme.join("package.json")).as_deref(),
        Some("{ \"name\": \"test_theme\" }\n")
    );
    assert_eq!(
        fs.read_file(theme.join("theme-settings.php")).as_deref(),
        Some("<?php // test_theme settings\n")
    );
    assert!(!fs.is_file(&theme.join("STARTERKIT.info.yml")));

    assert_eq!(
        notifier.messages().last().map(String::as_str),
        Some("Starter kit for \"Test Theme\" created in: /site/themes/custom/test_theme")
    );
}

#[test]
fn unselected_and_excluded_files_are_copied_verbatim() {
    let fs = memory_site();
    let theme = PathBuf::from("/site/themes/custom/test_theme");

    service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(
        fs.read_file(theme.join("README.md")).as_deref(),
        Some("Replace STARTERKIT by hand.\n")
    );
    assert_eq!(
        fs.read_file(theme.join("node_modules/pkg/STARTERKIT.js")).as_deref(),
        Some("STARTERKIT\n")
    );
    assert_eq!(
        fs.read_file(theme.join("asset-builds/css/STARTERKIT.css")).as_deref(),
        Some("STARTERKIT\n")
    );
    assert_eq!(
        fs.read_file(theme.join(".hidden/STARTERKIT.twig")).as_deref(),
        Some("STARTERKIT\n")
    );
}

#[test]
fn same_named_files_are_all_rewritten() {
    let fs = memory_site();
    let theme = PathBuf::from("/site/themes/custom/test_theme");

    let report = service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(
        fs.read_file(theme.join("templates/page.html.twig")).as_deref(),
        Some("{{ attach_library('test_theme/global-styling') }}\n")
    );
    assert_eq!(
        fs.read_file(theme.join("templates/layout/page.html.twig")).as_deref(),
        Some("<div class=\"test_theme\"></div>\n")
    );
    assert!(report.rewritten.contains(&theme.join("templates/layout/page.html.twig")));
}

#[test]
fn template_is_never_modified() {
    let fs = memory_site();
    let before = fs.files_under("/site/themes/contrib/cog/STARTERKIT");

    service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(fs.files_under("/site/themes/contrib/cog/STARTERKIT"), before);
    assert_eq!(
        fs.read_file("/site/themes/contrib/cog/STARTERKIT/STARTERKIT.info.yml")
            .as_deref(),
        Some(MANIFEST)
    );
}

#[test]
fn validation_failure_writes_nothing() {
    let fs = memory_site();
    let before = fs.list_files();
    let notifier = RecordingNotifier::new();

    let err = service(&fs, &notifier)
        .scaffold(&ScaffoldRequest::new(), &ThemeLayout::with_defaults("/site"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(fs.list_files(), before);
    assert!(notifier.messages().is_empty());
}

#[test]
fn missing_destination_parent_writes_nothing() {
    let fs = memory_site();
    let before = fs.list_files();

    let err = service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::new("/site", "themes/nowhere/deeper"))
        .unwrap_err();

    assert!(matches!(
        err,
        CogkitError::Application(ApplicationError::DestinationParentMissing { .. })
    ));
    assert_eq!(fs.list_files(), before);
}

#[test]
fn copy_failure_leaves_partial_copy() {
    let fs = memory_site();
    fs.deny_copy("/site/themes/contrib/cog/STARTERKIT/templates/page.html.twig");

    let err = service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Copy);
    assert!(fs.is_file(Path::new(
        "/site/themes/custom/test_theme/STARTERKIT.info.yml"
    )));
}

#[test]
fn starterkit_without_seed_files_is_valid() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/site/themes/custom")
        .add_file("/site/themes/contrib/cog/STARTERKIT/STARTERKIT.info.yml", MANIFEST);

    let report = service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(report.renamed.len(), 1);
}

#[test]
fn non_utf8_files_are_rewritten_and_renamed() {
    let fs = memory_site();
    let kit = Path::new("/site/themes/contrib/cog/STARTERKIT");
    fs.add_file(kit.join("STARTERKIT-logo.png"), &b"\x89PNG\xff\xfe"[..])
        .add_file(kit.join("templates/latin1.html.twig"), &b"caf\xe9 STARTERKIT\n"[..]);
    let theme = PathBuf::from("/site/themes/custom/test_theme");

    let report = service(&fs, &RecordingNotifier::new())
        .scaffold(&test_theme(), &ThemeLayout::with_defaults("/site"))
        .unwrap();

    assert_eq!(
        fs.read_bytes(theme.join("test_theme-logo.png")).as_deref(),
        Some(&b"\x89PNG\xff\xfe"[..])
    );
    assert!(!fs.is_file(&theme.join("STARTERKIT-logo.png")));
    assert_eq!(
        fs.read_bytes(theme.join("templates/latin1.html.twig")).as_deref(),
        Some(&b"caf\xe9 test_theme\n"[..])
    );
    // Files after the binary ones in walk order are still handled.
    assert!(fs.is_file(&theme.join("test_theme.theme")));
    assert!(report.rewritten.contains(&theme.join("templates/latin1.html.twig")));
}

// ----------------------------------------------------------------------------
// Real filesystem
// ----------------------------------------------------------------------------

fn local_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let kit = tmp.path().join("themes/contrib/cog/STARTERKIT");
    for (path, content) in starterkit_files() {
        let file = kit.join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, content).unwrap();
    }
    fs::create_dir_all(tmp.path().join("themes/custom")).unwrap();
    tmp
}

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(RecordingNotifier::new()))
}

#[test]
fn scaffolds_test_theme_on_disk() {
    let site = local_site();
    let theme = site.path().join("themes/custom/test_theme");

    let report = local_service()
        .scaffold(
            &test_theme().description("A theme for tests."),
            &ThemeLayout::with_defaults(site.path()),
        )
        .unwrap();

    assert_eq!(report.path, theme);
    let info = fs::read_to_string(theme.join("test_theme.info.yml")).unwrap();
    assert!(info.contains("description: 'A theme for tests.'"));
    assert!(!info.contains("version: '8.x-1.7'"));
    assert!(!info.contains("project: 'cog'"));
    assert!(info.starts_with("name: Test Theme\n"));
    assert!(theme.join("test_theme.libraries.yml").is_file());
    assert!(!theme.join("STARTERKIT.theme").exists());
}

#[test]
fn rerun_keeps_unrelated_files() {
    let site = local_site();
    let theme = site.path().join("themes/custom/test_theme");
    let layout = ThemeLayout::with_defaults(site.path());

    local_service().scaffold(&test_theme(), &layout).unwrap();
    fs::write(theme.join("custom.css"), "body {}").unwrap();

    local_service().scaffold(&test_theme(), &layout).unwrap();

    assert_eq!(fs::read_to_string(theme.join("custom.css")).unwrap(), "body {}");
    assert!(theme.join("test_theme.theme").is_file());
}

#[test]
fn binary_file_on_disk_does_not_abort_the_scaffold() {
    let site = local_site();
    let kit = site.path().join("themes/contrib/cog/STARTERKIT");
    fs::write(kit.join("STARTERKIT-logo.png"), b"\x89PNG\xff\xfe").unwrap();
    let theme = site.path().join("themes/custom/acme");

    local_service()
        .scaffold(&ScaffoldRequest::new().name("Acme"), &ThemeLayout::with_defaults(site.path()))
        .unwrap();

    assert_eq!(fs::read(theme.join("acme-logo.png")).unwrap(), b"\x89PNG\xff\xfe");
    assert!(theme.join("acme.theme").is_file());
    assert!(!theme.join("STARTERKIT.theme").exists());
}

#[test]
fn missing_starterkit_on_disk_is_a_path_error() {
    let site = TempDir::new().unwrap();
    fs::create_dir_all(site.path().join("themes/custom")).unwrap();

    let err = local_service()
        .scaffold(&test_theme(), &ThemeLayout::with_defaults(site.path()))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(!site.path().join("themes/custom/test_theme").exists());
}
