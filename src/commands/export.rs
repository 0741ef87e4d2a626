//! `routegraph export` command - print the active dataset
//!
//! Output is TOML by default so it can be saved and passed back via
//! `--dataset`. `--format json` prints the same dataset as JSON. There is no
//! records rendering of a dataset, so `--format records` is a usage error.

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::print_json;
use routegraph_core::config::Dataset;
use routegraph_core::error::{Result, RouteError};

/// Execute the export command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let store = dataset.build()?;
    let snapshot = Dataset::from_store(dataset.name, &store);

    match ctx.format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Human => print!("{}", snapshot.to_toml()?),
        OutputFormat::Records => {
            return Err(RouteError::UsageError(
                "export supports human (TOML) or json output, not records".to_string(),
            ))
        }
    }

    Ok(())
}
