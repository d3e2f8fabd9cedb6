//! `cogkit config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let path = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "defaults.path" => Ok(config.defaults.path.display().to_string()),
        "defaults.description" => Ok(config.defaults.description.clone().unwrap_or_default()),
        "project.root" => Ok(path(&config.project.root)),
        "project.host_theme" => Ok(config.project.host_theme.display().to_string()),
        "project.starterkit" => Ok(path(&config.project.starterkit)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "logging.file" => Ok(path(&config.logging.file)),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.path").unwrap(), "themes/custom");
        assert_eq!(
            get_config_value(&cfg, "project.host_theme").unwrap(),
            "themes/contrib/cog"
        );
    }

    #[test]
    fn unset_optional_key_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "project.root").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
