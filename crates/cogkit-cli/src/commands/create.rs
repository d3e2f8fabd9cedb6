//! Implementation of the `cogkit create` command.
//!
//! Responsibility: merge CLI arguments with configuration, call the core
//! scaffold service, and display results. No scaffolding rules live here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use cogkit_adapters::{LocalFilesystem, TracingNotifier};
use cogkit_core::{
    application::{ScaffoldPlan, ScaffoldService, ports::Notifier},
    domain::{ScaffoldRequest, ThemeLayout, starterkit::STARTERKIT_DIR},
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `cogkit create` command.
///
/// Dispatch sequence:
/// 1. Resolve root, destination, starter kit and description
/// 2. Validate and check paths (`ScaffoldService::plan`)
/// 3. Early-exit if `--dry-run`
/// 4. Confirm before copying over an existing theme unless `--yes`
/// 5. Scaffold and print the report
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(&args, &config)?;
    let (request, layout) = build_request(&args, &config, root);

    debug!(
        root = %layout.project_root().display(),
        destination = %layout.destination().display(),
        starterkit = %layout.starterkit().display(),
        "Layout resolved"
    );

    // JSON output must stay parseable: notices go to the log instead.
    let notifier: Box<dyn Notifier> = if output.is_json() {
        Box::new(TracingNotifier)
    } else {
        Box::new(output.notifier())
    };
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), notifier);

    let plan = service.plan(&request, &layout)?;

    if args.dry_run {
        return show_plan(&plan, &output);
    }

    if plan.exists && !args.yes && !global.quiet && !confirm_overwrite(&plan)? {
        return Err(CliError::Cancelled);
    }

    info!(machine_name = %plan.machine_name, "Scaffold started");
    let report = service.scaffold(&request, &layout)?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        output.success(&format!(
            "{} file(s) rewritten, {} renamed",
            report.rewritten.len(),
            report.renamed.len()
        ))?;
    }

    Ok(())
}

/// `--root`, then `project.root`, then the current directory.
fn resolve_root(args: &CreateArgs, config: &AppConfig) -> CliResult<PathBuf> {
    match args.root.clone().or_else(|| config.project.root.clone()) {
        Some(root) => Ok(root),
        None => std::env::current_dir().with_cli_context(|| "cannot read the current directory"),
    }
}

/// Flags win over configuration; configuration wins over built-in defaults.
fn build_request(
    args: &CreateArgs,
    config: &AppConfig,
    root: PathBuf,
) -> (ScaffoldRequest, ThemeLayout) {
    let destination = args.path.clone().unwrap_or_else(|| config.defaults.path.clone());

    let mut request = ScaffoldRequest::new();
    if let Some(name) = &args.name {
        request = request.name(name);
    }
    if let Some(machine_name) = &args.machine_name {
        request = request.machine_name(machine_name);
    }
    if let Some(description) = args.description.as_ref().or(config.defaults.description.as_ref()) {
        request = request.description(description);
    }

    let starterkit = args
        .starterkit
        .clone()
        .or_else(|| config.project.starterkit.clone())
        .unwrap_or_else(|| config.project.host_theme.join(STARTERKIT_DIR));

    let layout = ThemeLayout::new(root, destination).with_starterkit(starterkit);
    (request, layout)
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create \"{}\" at {}",
        plan.name,
        plan.path.display()
    ))?;
    output.print(&format!("  Machine name: {}", plan.machine_name))?;
    output.print(&format!("  Starter kit:  {}", plan.starterkit.display()))?;
    if plan.exists {
        output.warning("The theme directory exists; files would be copied over it")?;
    }
    Ok(())
}

// ── Confirmation prompt ───────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm_overwrite(plan: &ScaffoldPlan) -> CliResult<bool> {
    use std::io::IsTerminal;

    // Nobody to ask: keep the copy-over behaviour.
    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!(
            "{} already exists. Copy the starter kit over it?",
            plan.path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(plan: &ScaffoldPlan) -> CliResult<bool> {
    tracing::warn!(path = %plan.path.display(), "Copying over an existing theme");
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
