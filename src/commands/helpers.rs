//! Helper functions shared across commands

use serde::Serialize;

use routegraph_core::error::Result;
use routegraph_core::graph::{GraphStore, NodeIndex};
use routegraph_core::records::escape_quotes;

/// A node as it appears in JSON reports
#[derive(Debug, Clone, Serialize)]
pub struct NodeEntry<'a> {
    pub index: NodeIndex,
    pub label: &'a str,
}

impl<'a> NodeEntry<'a> {
    pub fn new(store: &'a GraphStore, index: NodeIndex) -> Result<Self> {
        Ok(NodeEntry {
            index,
            label: store.label(index)?,
        })
    }
}

/// Print a serializable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Comma-separated labels for a list of nodes
pub fn join_labels(store: &GraphStore, nodes: &[NodeIndex]) -> Result<String> {
    let labels = nodes
        .iter()
        .map(|&node| store.label(node))
        .collect::<Result<Vec<_>>>()?;
    Ok(labels.join(", "))
}

/// Start of a records `N` line: index and quoted label
pub fn node_record(index: NodeIndex, label: &str) -> String {
    format!("N {} \"{}\"", index, escape_quotes(label))
}
