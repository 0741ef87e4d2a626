//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::dataset;
use routegraph_core::config::{Dataset, GlobalConfig};
use routegraph_core::error::Result;
use routegraph_core::graph::GraphStore;
use routegraph_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub format: OutputFormat,
    pub dataset_path: Option<PathBuf>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// CLI flags take precedence over the global config
    pub fn new(cli: &'a Cli, config: &GlobalConfig, start: Instant) -> Self {
        Self {
            cli,
            format: cli.format.or(config.format).unwrap_or_default(),
            dataset_path: cli.dataset.clone().or_else(|| config.dataset.clone()),
            start,
        }
    }

    /// Load the dataset from `--dataset`/config, or the built-in reference network
    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.dataset_path {
            Some(path) => Dataset::load(path),
            None => Ok(dataset::reference()),
        }
    }

    pub fn load_graph(&self) -> Result<GraphStore> {
        let store = self.load_dataset()?.build()?;
        trace_time!(self.start, "load_graph", nodes = store.node_count());
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths, BFS levels and connected components over a road network.");
        println!();
        println!("Run `routegraph --help` for usage information.");
        Ok(())
    }
}
