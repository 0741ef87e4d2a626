//! `routegraph nodes` command - list nodes with their degree

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{node_record, print_json};
use routegraph_core::error::Result;
use routegraph_core::graph::{GraphStore, NodeIndex};
use routegraph_core::records;

#[derive(Debug, Serialize)]
struct NodeSummary<'a> {
    index: NodeIndex,
    label: &'a str,
    degree: usize,
}

#[derive(Debug, Serialize)]
struct NodesReport<'a> {
    name: Option<&'a str>,
    node_count: usize,
    edge_count: usize,
    nodes: Vec<NodeSummary<'a>>,
}

/// Execute the nodes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let store = dataset.build()?;
    let nodes = summarize(&store)?;

    match ctx.format {
        OutputFormat::Human => render_human(&nodes, &mut io::stdout().lock())?,
        OutputFormat::Json => print_json(&NodesReport {
            name: dataset.name.as_deref(),
            node_count: store.node_count(),
            edge_count: store.edge_count(),
            nodes,
        })?,
        OutputFormat::Records => {
            println!(
                "{}",
                records::header(
                    "nodes",
                    &[
                        ("nodes", store.node_count().to_string()),
                        ("edges", store.edge_count().to_string()),
                    ],
                )
            );
            for node in &nodes {
                println!("{} degree={}", node_record(node.index, node.label), node.degree);
            }
        }
    }

    Ok(())
}

fn summarize(store: &GraphStore) -> Result<Vec<NodeSummary<'_>>> {
    let mut nodes = Vec::with_capacity(store.node_count());
    for (index, label) in store.labels().iter().enumerate() {
        nodes.push(NodeSummary {
            index,
            label,
            degree: store.degree(index)?,
        });
    }
    Ok(nodes)
}

fn render_human(nodes: &[NodeSummary], out: &mut dyn Write) -> Result<()> {
    let width = nodes.len().saturating_sub(1).to_string().len();
    for node in nodes {
        writeln!(
            out,
            "{:>width$}. {} ({} road(s))",
            node.index,
            node.label,
            node.degree,
            width = width
        )?;
    }
    Ok(())
}
