//! CLI commands for routegraph

pub mod bfs;
pub mod components;
pub mod config;
pub mod dijkstra;
pub mod dispatch;
pub mod export;
pub mod helpers;
pub mod menu;
pub mod nodes;
pub mod path;
