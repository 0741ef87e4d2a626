//! Graph algorithm implementations
//!
//! Contains the read-only queries over a [`GraphProvider`](crate::graph::GraphProvider):
//! - `dijkstra`: Weighted single-source shortest paths
//! - `bfs`: Unweighted hop levels from a source
//! - `components`: Connected components of the whole graph

pub mod bfs;
pub mod components;
pub mod dijkstra;

pub use bfs::levels_from_source;
pub use components::connected_components;
pub use dijkstra::shortest_paths;
