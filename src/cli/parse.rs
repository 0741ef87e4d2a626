use std::fmt;

use routegraph_core::error::{Result, RouteError};
use routegraph_core::format::OutputFormat;
use routegraph_core::graph::{GraphStore, NodeIndex};

/// A node named on the command line, either by index or by label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    Index(NodeIndex),
    Label(String),
}

impl NodeRef {
    /// All-digit input is an index, anything else is a label
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("node reference cannot be empty".to_string());
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            trimmed
                .parse::<NodeIndex>()
                .map(NodeRef::Index)
                .map_err(|e| format!("invalid node index '{}': {}", trimmed, e))
        } else {
            Ok(NodeRef::Label(trimmed.to_string()))
        }
    }

    /// Resolve to a node index of `store`
    pub fn resolve(&self, store: &GraphStore) -> Result<NodeIndex> {
        match self {
            NodeRef::Index(index) => {
                store.label(*index)?;
                Ok(*index)
            }
            NodeRef::Label(label) => store.find(label).ok_or_else(|| RouteError::UnknownNode {
                label: label.clone(),
            }),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Index(index) => write!(f, "{}", index),
            NodeRef::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Parse a node reference from a CLI argument
pub fn parse_node_ref(s: &str) -> std::result::Result<NodeRef, String> {
    NodeRef::parse(s)
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
