use crate::error::Result;
use crate::graph::types::{Levels, NodeIndex};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Minimum number of edges from `source` to every node.
///
/// Queue-based BFS; each node is enqueued at most once, so the run is
/// O(V + E). Neighbor order only changes which equal-length path is found
/// first, never the levels.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn levels_from_source(graph: &dyn GraphProvider, source: NodeIndex) -> Result<Levels> {
    graph.check_node(source)?;

    let mut levels: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    levels[source] = Some(0);
    queue.push_back((source, 0u32));

    while let Some((node, level)) = queue.pop_front() {
        for neighbor in graph.neighbors(node)? {
            if levels[neighbor.node].is_none() {
                levels[neighbor.node] = Some(level + 1);
                queue.push_back((neighbor.node, level + 1));
            }
        }
    }

    let result = Levels { source, levels };
    tracing::debug!(
        source,
        reachable = result.reachable_count(),
        depth = result.max_level(),
        "bfs_complete"
    );
    Ok(result)
}
