//! Command implementations for all routegraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{bfs, components, config, dijkstra, export, menu, nodes, path};
use routegraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Nodes => nodes::execute(ctx),
            Commands::Dijkstra { source } => dijkstra::execute(ctx, source),
            Commands::Bfs { source } => bfs::execute(ctx, source),
            Commands::Components => components::execute(ctx),
            Commands::Path { from, to } => path::execute(ctx, from, to),
            Commands::Export => export::execute(ctx),
            Commands::Menu => menu::execute(ctx),
            Commands::Config { command } => config::execute(ctx, command),
        }
    }
}
