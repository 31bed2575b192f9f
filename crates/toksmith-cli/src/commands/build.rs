//! Implementation of the `toksmith build` command.
//!
//! Responsibility: translate CLI arguments into build options, call the core
//! build service, and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use toksmith_adapters::{LocalFilesystem, load_alias_map, load_token_table};
use toksmith_core::application::{BuildOptions, BuildService};

use crate::{
    cli::{BuildArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `toksmith build` command.
///
/// Dispatch sequence:
/// 1. Load and parse the token source (and alias map, if given)
/// 2. Resolve scheme / prefix / output directory from flags and config
/// 3. Early-exit if `--dry-run`
/// 4. Run the build service
/// 5. Print the report
#[instrument(skip_all, fields(source = %args.source.display()))]
pub fn execute(
    args: BuildArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Load sources
    let table = load_token_table(&args.source)?;
    let aliases = args.aliases.as_deref().map(load_alias_map).transpose()?;

    debug!(
        groups = table.len(),
        variants = table.variant_count(),
        aliases = aliases.as_ref().map_or(0, |a| a.retired_count()),
        "sources loaded"
    );

    // 2. Build options from flags + config
    let scheme = super::resolve_scheme(args.scheme, args.prefix.as_deref(), &config)?;
    let mut options = BuildOptions::new(
        args.out_dir.unwrap_or_else(|| config.defaults.out_dir.clone()),
    );
    options.scheme = scheme;
    options.removal_version = args
        .removal_version
        .unwrap_or_else(|| config.defaults.removal_version.clone());
    options.emit_constants = !args.no_constants;

    let service = BuildService::new(Box::new(LocalFilesystem::new()));

    // 3. Dry run: render and describe, write nothing.
    if args.dry_run {
        let artifacts = service.plan(&table, aliases.as_ref(), &options)?;
        output.info(&format!(
            "Dry run: would write {} files to {}",
            artifacts.len(),
            options.out_dir.display(),
        ))?;
        for artifact in &artifacts {
            output.print(&format!(
                "  {}  ({} bytes)",
                options.out_dir.join(&artifact.relative_path).display(),
                artifact.content.len(),
            ))?;
        }
        return Ok(());
    }

    // 4. Build
    output.header(&format!("Building tokens from '{}'...", args.source.display()))?;
    info!(out_dir = %options.out_dir.display(), "build started");

    let report = service.build(&table, aliases.as_ref(), &options)?;

    info!(files = report.files.len(), "build completed");

    // 5. Report
    output.success(&format!(
        "Wrote {} files ({} groups, {} variants{})",
        report.files.len(),
        report.group_count,
        report.variant_count,
        if report.alias_count > 0 {
            format!(", {} aliases", report.alias_count)
        } else {
            String::new()
        },
    ))?;

    if !global.quiet {
        for file in &report.files {
            output.print(&format!("  {}", file.display()))?;
        }
    }

    Ok(())
}
