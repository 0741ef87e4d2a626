//! `routegraph dijkstra` command - weighted shortest distances from a source

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{NodeRef, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{node_record, print_json, NodeEntry};
use routegraph_core::error::Result;
use routegraph_core::format::format_distance;
use routegraph_core::graph::{shortest_paths, GraphStore, NodeIndex, ShortestPaths};
use routegraph_core::records::{self, or_dash};
use routegraph_core::trace_time;

#[derive(Debug, Serialize)]
struct DistanceEntry<'a> {
    index: NodeIndex,
    label: &'a str,
    distance: Option<f64>,
    predecessor: Option<NodeIndex>,
}

#[derive(Debug, Serialize)]
struct DijkstraReport<'a> {
    source: NodeEntry<'a>,
    reachable: usize,
    distances: Vec<DistanceEntry<'a>>,
}

/// Execute the dijkstra command
pub fn execute(ctx: &CommandContext, source: &NodeRef) -> Result<()> {
    let store = ctx.load_graph()?;
    let source = source.resolve(&store)?;
    let paths = shortest_paths(&store, source)?;
    trace_time!(ctx.start, "dijkstra", reachable = paths.reachable_count());

    match ctx.format {
        OutputFormat::Human => render_human(&store, &paths, &mut io::stdout().lock())?,
        OutputFormat::Json => output_json(&store, &paths)?,
        OutputFormat::Records => output_records(&store, &paths),
    }

    Ok(())
}

/// Write the distance table in console wording
pub fn render_human(store: &GraphStore, paths: &ShortestPaths, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Dijkstra's shortest paths from {}:",
        store.label(paths.source)?
    )?;
    for (node, label) in store.labels().iter().enumerate() {
        match paths.distance(node) {
            Some(distance) => writeln!(out, "To {}: {} units", label, format_distance(distance))?,
            None => writeln!(out, "To {}: No path", label)?,
        }
    }
    Ok(())
}

fn output_json(store: &GraphStore, paths: &ShortestPaths) -> Result<()> {
    let distances = store
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| DistanceEntry {
            index,
            label,
            distance: paths.distance(index),
            predecessor: paths.predecessors.get(index).copied().flatten(),
        })
        .collect();

    print_json(&DijkstraReport {
        source: NodeEntry::new(store, paths.source)?,
        reachable: paths.reachable_count(),
        distances,
    })
}

fn output_records(store: &GraphStore, paths: &ShortestPaths) {
    println!(
        "{}",
        records::header(
            "dijkstra",
            &[
                ("source", paths.source.to_string()),
                ("nodes", store.node_count().to_string()),
                ("reachable", paths.reachable_count().to_string()),
            ],
        )
    );
    for (index, label) in store.labels().iter().enumerate() {
        println!(
            "{} distance={} via={}",
            node_record(index, label),
            or_dash(paths.distance(index).map(format_distance)),
            or_dash(paths.predecessors.get(index).copied().flatten()),
        );
    }
}
