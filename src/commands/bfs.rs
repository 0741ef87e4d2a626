//! `routegraph bfs` command - hop levels from a source

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{NodeRef, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{node_record, print_json, NodeEntry};
use routegraph_core::error::Result;
use routegraph_core::graph::{levels_from_source, GraphStore, Levels, NodeIndex};
use routegraph_core::records::{self, or_dash};
use routegraph_core::trace_time;

#[derive(Debug, Serialize)]
struct LevelEntry<'a> {
    index: NodeIndex,
    label: &'a str,
    level: Option<u32>,
}

#[derive(Debug, Serialize)]
struct BfsReport<'a> {
    source: NodeEntry<'a>,
    reachable: usize,
    max_level: u32,
    levels: Vec<LevelEntry<'a>>,
}

/// Execute the bfs command
pub fn execute(ctx: &CommandContext, source: &NodeRef) -> Result<()> {
    let store = ctx.load_graph()?;
    let source = source.resolve(&store)?;
    let levels = levels_from_source(&store, source)?;
    trace_time!(ctx.start, "bfs", reachable = levels.reachable_count());

    match ctx.format {
        OutputFormat::Human => render_human(&store, &levels, &mut io::stdout().lock())?,
        OutputFormat::Json => {
            let entries = store
                .labels()
                .iter()
                .enumerate()
                .map(|(index, label)| LevelEntry {
                    index,
                    label,
                    level: levels.level(index),
                })
                .collect();
            print_json(&BfsReport {
                source: NodeEntry::new(&store, source)?,
                reachable: levels.reachable_count(),
                max_level: levels.max_level(),
                levels: entries,
            })?
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records::header(
                    "bfs",
                    &[
                        ("source", source.to_string()),
                        ("nodes", store.node_count().to_string()),
                        ("reachable", levels.reachable_count().to_string()),
                        ("max_level", levels.max_level().to_string()),
                    ],
                )
            );
            for (index, label) in store.labels().iter().enumerate() {
                println!(
                    "{} level={}",
                    node_record(index, label),
                    or_dash(levels.level(index))
                );
            }
        }
    }

    Ok(())
}

/// Write the level table in console wording
pub fn render_human(store: &GraphStore, levels: &Levels, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "BFS levels from {}:", store.label(levels.source)?)?;
    for (node, label) in store.labels().iter().enumerate() {
        match levels.level(node) {
            Some(level) => writeln!(out, "{}: {} edge(s) away", label, level)?,
            None => writeln!(out, "{}: Not reachable", label)?,
        }
    }
    Ok(())
}
