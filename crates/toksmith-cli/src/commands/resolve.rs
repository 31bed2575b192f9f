//! Implementation of the `toksmith resolve` command.
//!
//! Prints the property name, the `var()` reference, and the raw value for
//! one `(group, variant)` pair — the lookup surface components use when
//! wiring tokens into styles by hand.

use tracing::instrument;

use toksmith_adapters::load_token_table;
use toksmith_core::domain::Resolver;

use crate::{cli::ResolveArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `toksmith resolve` command.
#[instrument(skip_all, fields(group = %args.group))]
pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let table = load_token_table(&args.source)?;
    let scheme = super::resolve_scheme(args.scheme, args.prefix.as_deref(), &config)?;

    let resolver = Resolver::new(&table, scheme);
    let variant = args.variant.as_deref().unwrap_or(Resolver::DEFAULT_VARIANT);
    let token = resolver
        .resolve(&args.group, variant)
        .map_err(toksmith_core::error::TokError::from)?;

    output.key_value("key", &token.key)?;
    output.key_value("var", &token.reference)?;
    output.key_value("value", &token.value)?;

    Ok(())
}
