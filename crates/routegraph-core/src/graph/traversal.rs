use crate::error::Result;
use crate::graph::types::{Neighbor, NodeIndex};

/// Read-only adjacency access used by the graph algorithms.
///
/// Nodes are dense indices in `0..node_count()`. Implementations must return
/// `RouteError::OutOfRange` from `neighbors` for indices outside that range,
/// and must list every undirected edge from both of its endpoints.
pub trait GraphProvider {
    /// Number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Neighbors of `node` with the weight of the connecting edge
    fn neighbors(&self, node: NodeIndex) -> Result<&[Neighbor]>;

    /// Validate that `node` is a node of this graph
    fn check_node(&self, node: NodeIndex) -> Result<()> {
        let node_count = self.node_count();
        if node < node_count {
            Ok(())
        } else {
            Err(crate::error::RouteError::out_of_range(node, node_count))
        }
    }
}
