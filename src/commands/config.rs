//! `routegraph config` command handlers

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::config::{ConfigCommands, ConfigKey};
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::print_json;
use routegraph_core::config::{Dataset, GlobalConfig};
use routegraph_core::error::Result;
use routegraph_core::records::{self, escape_quotes, or_dash};

#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    path: &'a Path,
    dataset: Option<&'a Path>,
    format: Option<OutputFormat>,
}

/// Execute a config subcommand
pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(ctx),
        ConfigCommands::Set { key, value } => handle_set(*key, value),
        ConfigCommands::Unset { key } => handle_unset(*key),
    }
}

fn handle_show(ctx: &CommandContext) -> Result<()> {
    let path = GlobalConfig::config_path()?;
    let config = GlobalConfig::load_from(&path)?;

    match ctx.format {
        OutputFormat::Human => {
            println!("Config file: {}", path.display());
            match &config.dataset {
                Some(dataset) => println!("dataset: {}", dataset.display()),
                None => println!("dataset: (built-in reference network)"),
            }
            match config.format {
                Some(format) => println!("format: {}", format),
                None => println!("format: (default: human)"),
            }
        }
        OutputFormat::Json => print_json(&ConfigReport {
            path: &path,
            dataset: config.dataset.as_deref(),
            format: config.format,
        })?,
        OutputFormat::Records => {
            println!(
                "{}",
                records::header(
                    "config",
                    &[("path", format!("\"{}\"", escape_quotes(&path.to_string_lossy())))],
                )
            );
            println!(
                "K dataset {}",
                or_dash(
                    config
                        .dataset
                        .as_ref()
                        .map(|d| format!("\"{}\"", escape_quotes(&d.to_string_lossy())))
                )
            );
            println!("K format {}", or_dash(config.format));
        }
    }

    Ok(())
}

fn handle_set(key: ConfigKey, value: &str) -> Result<()> {
    let mut config = GlobalConfig::load()?;

    match key {
        ConfigKey::Dataset => {
            let dataset = absolute(PathBuf::from(value))?;
            // Refuse to point the default at a file that cannot be used
            Dataset::load(&dataset)?.build()?;
            println!("Set dataset = {}", dataset.display());
            config.dataset = Some(dataset);
        }
        ConfigKey::Format => {
            let format: OutputFormat = value.parse()?;
            println!("Set format = {}", format);
            config.format = Some(format);
        }
    }

    config.save()?;
    tracing::debug!(%key, "config_saved");
    Ok(())
}

fn handle_unset(key: ConfigKey) -> Result<()> {
    let mut config = GlobalConfig::load()?;

    match key {
        ConfigKey::Dataset => config.dataset = None,
        ConfigKey::Format => config.format = None,
    }

    config.save()?;
    println!("Unset {}", key);
    Ok(())
}

/// Anchor a relative path at the current directory so the stored value does
/// not depend on where later commands run
fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
