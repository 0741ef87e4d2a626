//! CLI argument parsing for routegraph
//!
//! Uses clap derive. Global flags: --dataset, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod config;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use parse::NodeRef;
use config::ConfigCommands;
use parse::{parse_node_ref, parse_output_format};
pub use routegraph_core::format::OutputFormat;

/// Routegraph - weighted road network analysis
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph dataset file (TOML, or JSON by extension); defaults to the built-in city network
    #[arg(long, global = true, env = "ROUTEGRAPH_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Output format: human, json, or records (defaults to the global config, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter level or directive (e.g. `trace`, `routegraph_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every node with its index and degree
    Nodes,

    /// Weighted shortest distances from a source node (Dijkstra)
    #[command(alias = "shortest")]
    Dijkstra {
        /// Source node index or label
        #[arg(value_parser = parse_node_ref)]
        source: NodeRef,
    },

    /// Hop levels from a source node (breadth-first search)
    #[command(alias = "levels")]
    Bfs {
        /// Source node index or label
        #[arg(value_parser = parse_node_ref)]
        source: NodeRef,
    },

    /// Partition the graph into connected components
    Components,

    /// Cheapest route between two nodes
    Path {
        /// Starting node index or label
        #[arg(value_parser = parse_node_ref)]
        from: NodeRef,

        /// Destination node index or label
        #[arg(value_parser = parse_node_ref)]
        to: NodeRef,
    },

    /// Print the active dataset as TOML, or JSON with --format json (records is rejected)
    Export,

    /// Interactive graph analysis menu
    Menu,

    /// Show or change the defaults stored in the global config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
