use crate::error::Result;
use crate::graph::types::{NodeIndex, ShortestPaths};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeIndex,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<Option<f64>>,
    predecessors: Vec<Option<NodeIndex>>,
    settled: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(node_count: usize) -> Self {
        Self {
            distances: vec![None; node_count],
            predecessors: vec![None; node_count],
            settled: vec![false; node_count],
            heap: BinaryHeap::new(),
        }
    }

    /// Record `distance` for `node` if it beats the best known one
    fn relax(&mut self, node: NodeIndex, via: NodeIndex, distance: f64) {
        let improves = self.distances[node].is_none_or(|best| distance < best);
        if improves {
            self.distances[node] = Some(distance);
            self.predecessors[node] = Some(via);
            self.heap.push(Reverse(HeapEntry { node, distance }));
        }
    }
}

/// Weighted shortest distances from `source` to every node.
///
/// Binary-heap Dijkstra with lazy deletion: superseded heap entries are
/// skipped when popped. Edge weights are non-negative by construction of
/// the graph, which is what makes the first settlement of a node final.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn shortest_paths(graph: &dyn GraphProvider, source: NodeIndex) -> Result<ShortestPaths> {
    graph.check_node(source)?;

    let mut state = DijkstraState::new(graph.node_count());
    state.distances[source] = Some(0.0);
    state.heap.push(Reverse(HeapEntry {
        node: source,
        distance: 0.0,
    }));

    let mut settled_count = 0usize;
    let mut stale_pops = 0usize;

    while let Some(Reverse(HeapEntry { node, distance })) = state.heap.pop() {
        if state.settled[node] || state.distances[node].is_some_and(|best| distance > best) {
            stale_pops += 1;
            continue;
        }
        state.settled[node] = true;
        settled_count += 1;

        for neighbor in graph.neighbors(node)? {
            if state.settled[neighbor.node] {
                continue;
            }
            state.relax(neighbor.node, node, distance + neighbor.weight);
        }
    }

    tracing::debug!(
        source,
        settled = settled_count,
        stale = stale_pops,
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}
