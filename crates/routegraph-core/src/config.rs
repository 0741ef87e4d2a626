//! Configuration for routegraph
//!
//! Two kinds of configuration live here:
//! - [`Dataset`]: a graph definition file (TOML or JSON) with node labels and edges
//! - [`GlobalConfig`]: per-user defaults stored in `~/.config/routegraph/config.toml`

pub mod dataset;
pub mod global;

pub use dataset::Dataset;
pub use global::GlobalConfig;
