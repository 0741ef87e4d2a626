use serde::{Deserialize, Serialize};

/// Dense zero-based node identifier
pub type NodeIndex = usize;

/// An undirected weighted edge as supplied at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: NodeIndex, to: NodeIndex, weight: f64) -> Self {
        EdgeSpec { from, to, weight }
    }
}

impl From<(NodeIndex, NodeIndex, f64)> for EdgeSpec {
    fn from((from, to, weight): (NodeIndex, NodeIndex, f64)) -> Self {
        EdgeSpec { from, to, weight }
    }
}

/// Adjacency entry: the node on the other end of an edge and its weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: NodeIndex,
    pub weight: f64,
}

/// Dijkstra output: weighted distance from `source` to every node.
///
/// `None` marks a node that cannot be reached from the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeIndex,
    pub distances: Vec<Option<f64>>,
    pub predecessors: Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    /// Distance to `node`, or `None` when unreachable or not in the graph
    pub fn distance(&self, node: NodeIndex) -> Option<f64> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reconstruct the cheapest route from the source to `target`.
    ///
    /// Returns the node sequence starting at the source and ending at
    /// `target`, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors.get(current).copied().flatten()?;
            path.push(current);
            // A predecessor chain longer than the graph means corrupted input
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// BFS output: minimum edge count from `source` to every node.
///
/// `None` marks a node that cannot be reached from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Levels {
    pub source: NodeIndex,
    pub levels: Vec<Option<u32>>,
}

impl Levels {
    pub fn level(&self, node: NodeIndex) -> Option<u32> {
        self.levels.get(node).copied().flatten()
    }

    pub fn reachable_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_some()).count()
    }

    /// Deepest level reached (eccentricity of the source within its component)
    pub fn max_level(&self) -> u32 {
        self.levels.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Partition of nodes into connected components.
///
/// Component ids are numbered in the order their lowest-indexed node appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    pub assignment: Vec<usize>,
    pub count: usize,
}

impl Components {
    pub fn component_of(&self, node: NodeIndex) -> Option<usize> {
        self.assignment.get(node).copied()
    }

    /// Nodes belonging to component `id`, in ascending index order
    pub fn members(&self, id: usize) -> Vec<NodeIndex> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == id)
            .map(|(node, _)| node)
            .collect()
    }

    /// Size of each component, indexed by component id
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &id in &self.assignment {
            sizes[id] += 1;
        }
        sizes
    }

    /// All components as member lists, indexed by component id
    pub fn groups(&self) -> Vec<Vec<NodeIndex>> {
        let mut groups = vec![Vec::new(); self.count];
        for (node, &id) in self.assignment.iter().enumerate() {
            groups[id].push(node);
        }
        groups
    }

    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }
}
