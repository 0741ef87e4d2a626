//! Routegraph Core Library
//!
//! In-memory weighted graph store and the read-only queries that run over it:
//! Dijkstra shortest paths, breadth-first levels and connected components.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
