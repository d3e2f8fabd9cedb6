//! Shared fixtures for the CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const MANIFEST: &str = "\
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

/// A Drupal web root with the Cog starter kit and an empty `themes/custom`.
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let site = Self::bare();
        site.write("themes/contrib/cog/STARTERKIT/STARTERKIT.info.yml", MANIFEST);
        site.write(
            "themes/contrib/cog/STARTERKIT/STARTERKIT.theme",
            "<?php\nfunction STARTERKIT_preprocess_page() {}\n",
        );
        site.write(
            "themes/contrib/cog/STARTERKIT/templates/page.html.twig",
            "{{ attach_library('STARTERKIT/global-styling') }}\n",
        );
        site.write(
            "themes/contrib/cog/STARTERKIT/package.json",
            "{ \"name\": \"STARTERKIT\" }\n",
        );
        site.write_bytes(
            "themes/contrib/cog/STARTERKIT/images/STARTERKIT-logo.png",
            b"\x89PNG\xff\xfe",
        );
        site
    }

    /// Site without a starter kit.
    pub fn bare() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("themes/custom")).unwrap();
        // Empty config file: keeps the user's real config out of the tests.
        fs::write(dir.path().join("cogkit.toml"), "").unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.join(relative)).unwrap()
    }

    /// `cogkit` running in the site root with an isolated config.
    pub fn cogkit(&self) -> Command {
        let mut cmd = Command::cargo_bin("cogkit").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.join("cogkit.toml"));
        cmd
    }
}
