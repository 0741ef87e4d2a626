//! Graph dataset files
//!
//! A dataset names its nodes and lists weighted undirected edges between them
//! by node index:
//!
//! ```toml
//! name = "Eastern corridor"
//! nodes = ["New York", "Philadelphia"]
//!
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 94.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{EdgeSpec, GraphStore};

/// Serialized form of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Node labels, indexed by node
    pub nodes: Vec<String>,

    /// Undirected weighted edges
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Dataset {
    pub fn new(name: Option<String>, nodes: Vec<String>, edges: Vec<EdgeSpec>) -> Self {
        Dataset { name, nodes, edges }
    }

    /// Snapshot the labels and edges of an existing store
    pub fn from_store(name: Option<String>, store: &GraphStore) -> Self {
        Dataset {
            name,
            nodes: store.labels().to_vec(),
            edges: store.edges().to_vec(),
        }
    }

    /// Load a dataset from disk.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::invalid_dataset(path, format!("failed to read file: {}", e))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let dataset = if is_json {
            serde_json::from_str(&content).map_err(|e| RouteError::invalid_dataset(path, e))?
        } else {
            Self::from_toml(&content).map_err(|e| RouteError::invalid_dataset(path, e))?
        };

        tracing::debug!(path = %path.display(), "dataset_loaded");
        Ok(dataset)
    }

    /// Parse a dataset from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize dataset: {}", e)))
    }

    /// Validate the edges and build the graph
    pub fn build(&self) -> Result<GraphStore> {
        GraphStore::build(self.nodes.iter().cloned(), self.edges.iter().copied())
    }
}
