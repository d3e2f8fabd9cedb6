//! The starter kit contract.
//!
//! Everything the scaffolder assumes about the template directory lives in
//! [`StarterkitProfile`]: the placeholder token, the manifest file, which
//! directories are never touched, and which files always get rewritten.

/// Literal token embedded throughout the starter kit.
pub const PLACEHOLDER_TOKEN: &str = "STARTERKIT";

/// Name of the starter kit directory inside the host theme.
pub const STARTERKIT_DIR: &str = "STARTERKIT";

/// Default install location of the host theme, relative to the project root.
pub const DEFAULT_HOST_THEME_PATH: &str = "themes/contrib/cog";

/// Default destination for new themes, relative to the project root.
pub const DEFAULT_DESTINATION: &str = "themes/custom";

/// Static description of a starter kit layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterkitProfile {
    /// Placeholder replaced by the machine name in contents and file names.
    pub token: &'static str,
    /// Manifest file name, relative to the theme root.
    pub manifest_file: &'static str,
    /// Substring marking template-language files.
    pub template_marker: &'static str,
    /// Directory names never descended into.
    pub excluded_dirs: &'static [&'static str],
    /// Files at the theme root that are always rewritten when present.
    pub seed_files: &'static [&'static str],
}

impl StarterkitProfile {
    /// The Cog starter kit.
    pub const fn cog() -> Self {
        Self {
            token: PLACEHOLDER_TOKEN,
            manifest_file: "STARTERKIT.info.yml",
            template_marker: ".twig",
            excluded_dirs: &["node_modules", "asset-builds"],
            seed_files: &["package.json", "theme-settings.php"],
        }
    }

    pub fn is_excluded_dir_name(&self, name: &str) -> bool {
        self.excluded_dirs.contains(&name)
    }

    /// Replace every occurrence of the token in a file name.
    pub fn rename(&self, file_name: &str, machine_name: &str) -> String {
        file_name.replace(self.token, machine_name)
    }
}

impl Default for StarterkitProfile {
    fn default() -> Self {
        Self::cog()
    }
}
