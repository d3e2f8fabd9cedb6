//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `COGKIT__<SECTION>__<KEY>`, e.g.
//!    `COGKIT__DEFAULTS__PATH=themes`
//! 3. Config file: `--config FILE`, otherwise the platform config file and
//!    then `.cogkit.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use cogkit_core::domain::starterkit::{DEFAULT_DESTINATION, DEFAULT_HOST_THEME_PATH};

use crate::error::{CliError, CliResult};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COGKIT";
/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".cogkit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for `cogkit create`.
    pub defaults: Defaults,
    /// Where the Drupal project and the starter kit live.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Destination for new themes, relative to the project root.
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root; the current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Host theme directory, relative to the root.
    pub host_theme: PathBuf,
    /// Full starter kit path; `<host_theme>/STARTERKIT` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starterkit: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DESTINATION),
            description: None,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            host_theme: PathBuf::from(DEFAULT_HOST_THEME_PATH),
            starterkit: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cogkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "cog", "cogkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
