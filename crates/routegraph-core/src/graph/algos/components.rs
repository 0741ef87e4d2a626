use crate::error::Result;
use crate::graph::types::Components;
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Partition every node into connected components.
///
/// Scans nodes in ascending index order and flood-fills from each node not
/// yet assigned, so component ids follow the lowest index in each component.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn connected_components(graph: &dyn GraphProvider) -> Result<Components> {
    let node_count = graph.node_count();
    let mut assignment: Vec<Option<usize>> = vec![None; node_count];
    let mut count = 0usize;
    let mut queue = VecDeque::new();

    for start in 0..node_count {
        if assignment[start].is_some() {
            continue;
        }

        let id = count;
        count += 1;
        assignment[start] = Some(id);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            for neighbor in graph.neighbors(node)? {
                if assignment[neighbor.node].is_none() {
                    assignment[neighbor.node] = Some(id);
                    queue.push_back(neighbor.node);
                }
            }
        }
    }

    tracing::debug!(components = count, "components_complete");

    // The scan assigns every start node, so no entry is left unset
    Ok(Components {
        assignment: assignment.into_iter().flatten().collect(),
        count,
    })
}
