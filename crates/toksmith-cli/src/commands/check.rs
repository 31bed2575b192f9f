//! Implementation of the `toksmith check` command.
//!
//! Parses and validates the sources exactly as `build` would, then stops.
//! Nothing is ever written.

use tracing::instrument;

use toksmith_adapters::{load_alias_map, load_token_table};

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `toksmith check` command.
#[instrument(skip_all, fields(source = %args.source.display()))]
pub fn execute(args: CheckArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // Parsing runs the full set of table invariants; any violation
    // propagates as a CliError with suggestions.
    let table = load_token_table(&args.source)?;

    let alias_count = match args.aliases.as_deref() {
        Some(path) => {
            let aliases = load_alias_map(path)?;
            aliases
                .validate_against(&table)
                .map_err(toksmith_core::error::TokError::from)?;
            aliases.retired_count()
        }
        None => 0,
    };

    output.success(&format!(
        "'{}' is valid: {} groups, {} variants{}",
        args.source.display(),
        table.len(),
        table.variant_count(),
        if alias_count > 0 {
            format!(", {alias_count} aliases")
        } else {
            String::new()
        },
    ))?;

    if !global.quiet && table.is_empty() {
        output.warning("Source contains no token groups")?;
    }

    Ok(())
}
