//! `routegraph components` command - connected component partition

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{join_labels, node_record, print_json, NodeEntry};
use routegraph_core::error::Result;
use routegraph_core::graph::{connected_components, Components, GraphStore};
use routegraph_core::records;
use routegraph_core::trace_time;

#[derive(Debug, Serialize)]
struct ComponentEntry<'a> {
    id: usize,
    size: usize,
    members: Vec<NodeEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ComponentsReport<'a> {
    count: usize,
    connected: bool,
    assignment: &'a [usize],
    components: Vec<ComponentEntry<'a>>,
}

/// Execute the components command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_graph()?;
    let components = connected_components(&store)?;
    trace_time!(ctx.start, "components", count = components.count);

    match ctx.format {
        OutputFormat::Human => render_human(&store, &components, &mut io::stdout().lock())?,
        OutputFormat::Json => output_json(&store, &components)?,
        OutputFormat::Records => output_records(&store, &components),
    }

    Ok(())
}

/// Write the component summary in console wording
pub fn render_human(store: &GraphStore, components: &Components, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Graph has {} connected component(s)", components.count)?;
    for (id, members) in components.groups().iter().enumerate() {
        writeln!(out, "Component {}: {}", id, join_labels(store, members)?)?;
    }
    Ok(())
}

fn output_json(store: &GraphStore, components: &Components) -> Result<()> {
    let entries = components
        .groups()
        .into_iter()
        .enumerate()
        .map(|(id, members)| -> Result<ComponentEntry> {
            Ok(ComponentEntry {
                id,
                size: members.len(),
                members: members
                    .into_iter()
                    .map(|node| NodeEntry::new(store, node))
                    .collect::<Result<Vec<_>>>()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_json(&ComponentsReport {
        count: components.count,
        connected: components.is_connected(),
        assignment: &components.assignment,
        components: entries,
    })
}

fn output_records(store: &GraphStore, components: &Components) {
    println!(
        "{}",
        records::header(
            "components",
            &[
                ("nodes", store.node_count().to_string()),
                ("components", components.count.to_string()),
            ],
        )
    );
    for (id, size) in components.sizes().into_iter().enumerate() {
        println!("C {} size={}", id, size);
    }
    for (index, label) in store.labels().iter().enumerate() {
        println!(
            "{} component={}",
            node_record(index, label),
            components.assignment[index]
        );
    }
}
