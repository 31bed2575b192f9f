//! Implementation of the `toksmith list` command.

use toksmith_adapters::load_token_table;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let table = load_token_table(&args.source)?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Token groups in '{}':", args.source.display()))?;
            for group in table.groups() {
                output.print(&format!(
                    "  {:<24} --{:<24} {} variants",
                    group.name(),
                    group.css_prefix(),
                    group.variants().len(),
                ))?;
            }
            output.print(&format!(
                "\n{} groups, {} variants",
                table.len(),
                table.variant_count()
            ))?;
        }

        ListFormat::List => {
            for group in table.groups() {
                println!("{}", group.name());
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let groups: Vec<serde_json::Value> = table
                .groups()
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "name": g.name(),
                        "cssPrefix": g.css_prefix(),
                        "variants": g.variants().iter().map(|v| v.key()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&groups).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
