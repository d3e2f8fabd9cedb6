//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cogkit",
    bin_name = "cogkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create Cog sub-themes from the STARTERKIT template",
    long_about = "cogkit copies the Cog STARTERKIT into a new theme directory, \
                  rewrites its .info.yml manifest and replaces the STARTERKIT \
                  placeholder with the theme's machine name.",
    after_help = "EXAMPLES:\n\
        \x20 cogkit create --name \"Theme name\"\n\
        \x20 cogkit create --machine-name some_theme --name \"Theme name\"\n\
        \x20 cogkit create --name \"Theme name\" --path themes --description \"This is a theme.\"\n\
        \x20 cogkit tasks build",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a sub-theme from the starter kit.
    #[command(
        visible_alias = "cog-helper",
        about = "Create a sub-theme",
        after_help = "EXAMPLES:\n\
            \x20 cogkit create --name \"Theme name\"\n\
            \x20 cogkit create --machine-name some_theme --name \"Theme name\"\n\
            \x20 cogkit create --name \"Theme name\" --root /var/www/web --dry-run"
    )]
    Create(CreateArgs),

    /// Show the starter kit's build tasks.
    #[command(
        about = "Show the front-end build task graph",
        after_help = "EXAMPLES:\n\
            \x20 cogkit tasks\n\
            \x20 cogkit tasks serve\n\
            \x20 cogkit tasks build --flat"
    )]
    Tasks(TasksArgs),

    /// Initialise a cogkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cogkit init                      # default location\n\
            \x20 cogkit -c .cogkit.toml init      # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cogkit completions bash > ~/.local/share/bash-completion/completions/cogkit\n\
            \x20 cogkit completions zsh  > ~/.zfunc/_cogkit\n\
            \x20 cogkit completions fish > ~/.config/fish/completions/cogkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the cogkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cogkit config get defaults.path\n\
            \x20 cogkit config list\n\
            \x20 cogkit config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `cogkit create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Human-readable theme name.
    #[arg(long = "name", value_name = "NAME", help = "A name for the theme")]
    pub name: Option<String>,

    /// Machine name; derived from `--name` when absent.
    #[arg(
        long = "machine-name",
        value_name = "MACHINE",
        help = "[a-z0-9_] A machine-readable name for the theme"
    )]
    pub machine_name: Option<String>,

    /// Destination, relative to the project root.
    #[arg(
        long = "path",
        value_name = "PATH",
        help = "The path where to place the theme [default: themes/custom]"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        long = "description",
        value_name = "TEXT",
        help = "A description of the theme"
    )]
    pub description: Option<String>,

    /// Drupal web root the paths are relative to.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Project root [default: current directory]"
    )]
    pub root: Option<PathBuf>,

    /// Starter kit directory (absolute, or relative to the root).
    #[arg(
        long = "starterkit",
        value_name = "DIR",
        help = "Starter kit location [default: themes/contrib/cog/STARTERKIT]"
    )]
    pub starterkit: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Copy over an existing theme directory without asking"
    )]
    pub yes: bool,
}

// ── tasks ─────────────────────────────────────────────────────────────────────

/// Arguments for `cogkit tasks`.
#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Composite task to show; all of them when absent.
    #[arg(value_name = "TASK")]
    pub task: Option<String>,

    /// List task names one per line instead of the composition.
    #[arg(long = "flat", help = "List task names only")]
    pub flat: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cogkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cogkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cogkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
