//! Command dispatch logic for routegraph

use routegraph_core::error::Result;
use tracing::debug;

pub mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(ctx: &CommandContext) -> Result<()> {
    debug!(
        elapsed = ?ctx.start.elapsed(),
        format = %ctx.format,
        dataset = ?ctx.dataset_path,
        "dispatch"
    );

    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}
