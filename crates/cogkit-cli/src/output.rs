//! Output management and formatting.

use std::io::{self, IsTerminal};

use cogkit_core::application::ports::Notifier;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over `output.format`; Auto resolves to Human (TTY)
        // or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document on stdout.  Printed even in quiet mode:
    /// the caller asked for it explicitly.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)
    }

    /// A [`Notifier`] that prints core progress notices the way
    /// [`Self::info`] does.
    pub fn notifier(&self) -> ConsoleNotifier {
        ConsoleNotifier {
            term: self.term.clone(),
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// Progress notices from the scaffold service, printed to stdout.
pub struct ConsoleNotifier {
    term: Term,
    quiet: bool,
    no_color: bool,
}

impl Notifier for ConsoleNotifier {
    fn notice(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("\u{203a} {message}") // ›
        } else {
            format!("{} {}", "\u{203a}".cyan().bold(), message)
        };
        if let Err(e) = self.term.write_line(&line) {
            tracing::debug!(error = %e, "Failed to print notice");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
