//! `toksmith init` — write starter token sources.

use std::path::Path;

use toksmith_adapters::builtin::{STARTER_ALIASES, STARTER_DEFINITIONS};

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// File written for the token source.
const TOKENS_FILE: &str = "tokens.def";
/// File written for the alias mapping (with `--with-aliases`).
const ALIASES_FILE: &str = "deprecated.json";

/// Create starter sources in the current directory.
pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    write_starter(Path::new(TOKENS_FILE), STARTER_DEFINITIONS, args.force, &output)?;

    if args.with_aliases {
        write_starter(Path::new(ALIASES_FILE), STARTER_ALIASES, args.force, &output)?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  $EDITOR {TOKENS_FILE}"))?;
    output.print(&format!("  toksmith build {TOKENS_FILE}"))?;

    Ok(())
}

fn write_starter(
    path: &Path,
    content: &str,
    force: bool,
    output: &OutputManager,
) -> CliResult<()> {
    // Bail early if the file already exists and --force was not given.
    if path.exists() && !force {
        return Err(CliError::FileExists {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, content).map_err(|e| CliError::IoError {
        message: format!("Failed to write '{}'", path.display()),
        source: e,
    })?;

    output.success(&format!("Created {}", path.display()))?;
    Ok(())
}
