//! Graph storage and traversal operations
//!
//! Provides the weighted undirected graph and the queries that run over it:
//! - Dijkstra for weighted single-source distances
//! - BFS for unweighted hop levels
//! - Connected components over the whole graph
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{connected_components, levels_from_source, shortest_paths};
pub use store::GraphStore;
pub use traversal::GraphProvider;
pub use types::{Components, EdgeSpec, Levels, Neighbor, NodeIndex, ShortestPaths};
