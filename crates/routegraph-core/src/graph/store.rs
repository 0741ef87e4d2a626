//! Immutable adjacency-list graph store

use crate::error::{EdgeDefect, Result, RouteError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{EdgeSpec, Neighbor, NodeIndex};

/// Weighted undirected graph over labeled, densely indexed nodes.
///
/// Built once from labels and edge triples, read-only afterwards. Each edge
/// appears in the neighbor list of both endpoints, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStore {
    labels: Vec<String>,
    edges: Vec<EdgeSpec>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl GraphStore {
    /// Build a store from node labels and edges.
    ///
    /// Fails on the first edge with an endpoint outside `0..labels.len()`,
    /// a self-loop, or a negative or non-finite weight.
    #[tracing::instrument(skip_all)]
    pub fn build<L, E>(labels: L, edges: E) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<EdgeSpec>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let node_count = labels.len();
        let mut adjacency = vec![Vec::new(); node_count];
        let mut stored = Vec::new();

        for (position, edge) in edges.into_iter().map(Into::into).enumerate() {
            validate_edge(&edge, node_count).map_err(|defect| RouteError::InvalidEdge {
                position,
                from: edge.from,
                to: edge.to,
                defect,
            })?;

            adjacency[edge.from].push(Neighbor {
                node: edge.to,
                weight: edge.weight,
            });
            adjacency[edge.to].push(Neighbor {
                node: edge.from,
                weight: edge.weight,
            });
            stored.push(edge);
        }

        tracing::debug!(nodes = node_count, edges = stored.len(), "graph_built");

        Ok(GraphStore {
            labels,
            edges: stored,
            adjacency,
        })
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display label of `node`
    pub fn label(&self, node: NodeIndex) -> Result<&str> {
        self.labels
            .get(node)
            .map(String::as_str)
            .ok_or_else(|| RouteError::out_of_range(node, self.node_count()))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    /// Neighbors of `node`, in insertion order of the edges touching it
    pub fn neighbors(&self, node: NodeIndex) -> Result<&[Neighbor]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| RouteError::out_of_range(node, self.node_count()))
    }

    /// Number of edge endpoints at `node` (parallel edges count separately)
    pub fn degree(&self, node: NodeIndex) -> Result<usize> {
        self.neighbors(node).map(<[Neighbor]>::len)
    }

    /// Find a node by label, ignoring case and surrounding whitespace.
    ///
    /// Returns the lowest index when several nodes share a label.
    pub fn find(&self, label: &str) -> Option<NodeIndex> {
        let wanted = label.trim().to_lowercase();
        self.labels
            .iter()
            .position(|l| l.trim().to_lowercase() == wanted)
    }
}

impl GraphProvider for GraphStore {
    fn node_count(&self) -> usize {
        GraphStore::node_count(self)
    }

    fn neighbors(&self, node: NodeIndex) -> Result<&[Neighbor]> {
        GraphStore::neighbors(self, node)
    }
}

fn validate_edge(edge: &EdgeSpec, node_count: usize) -> std::result::Result<(), EdgeDefect> {
    for node in [edge.from, edge.to] {
        if node >= node_count {
            return Err(EdgeDefect::EndpointOutOfRange { node, node_count });
        }
    }
    if edge.from == edge.to {
        return Err(EdgeDefect::SelfLoop { node: edge.from });
    }
    if !edge.weight.is_finite() {
        return Err(EdgeDefect::NonFiniteWeight(edge.weight));
    }
    if edge.weight < 0.0 {
        return Err(EdgeDefect::NegativeWeight(edge.weight));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(NodeIndex, NodeIndex, f64)]) -> Vec<EdgeSpec> {
        list.iter().copied().map(EdgeSpec::from).collect()
    }

    fn triangle() -> GraphStore {
        GraphStore::build(
            ["A", "B", "C"],
            edges(&[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 4.0)]),
        )
        .unwrap()
    }

    #[test]
    fn test_build_counts() {
        let store = triangle();
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
        assert!(!store.is_empty());
        assert_eq!(store.label(2).unwrap(), "C");
    }

    #[test]
    fn test_neighbors_are_symmetric_and_ordered() {
        let store = triangle();
        let from_a: Vec<_> = store
            .neighbors(0)
            .unwrap()
            .iter()
            .map(|n| (n.node, n.weight))
            .collect();
        assert_eq!(from_a, vec![(1, 1.0), (2, 4.0)]);

        let from_c: Vec<_> = store
            .neighbors(2)
            .unwrap()
            .iter()
            .map(|n| (n.node, n.weight))
            .collect();
        assert_eq!(from_c, vec![(1, 2.0), (0, 4.0)]);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let store = GraphStore::build(["A", "B"], edges(&[(0, 1, 5.0), (1, 0, 3.0)])).unwrap();
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.degree(0).unwrap(), 2);
        assert_eq!(store.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_zero_weight_is_allowed() {
        let store = GraphStore::build(["A", "B"], edges(&[(0, 1, 0.0)])).unwrap();
        assert_eq!(store.neighbors(1).unwrap()[0].weight, 0.0);
    }

    #[test]
    fn test_rejects_self_loop() {
        let err =
            GraphStore::build(["A", "B"], edges(&[(0, 1, 1.0), (1, 1, 1.0)])).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidEdge {
                position: 1,
                defect: EdgeDefect::SelfLoop { node: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_endpoint_out_of_range() {
        let err = GraphStore::build(["A", "B"], edges(&[(0, 2, 1.0)])).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidEdge {
                position: 0,
                defect: EdgeDefect::EndpointOutOfRange {
                    node: 2,
                    node_count: 2
                },
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = GraphStore::build(["A", "B"], edges(&[(0, 1, -1.0)])).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidEdge {
                defect: EdgeDefect::NegativeWeight(_),
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = GraphStore::build(["A", "B"], edges(&[(0, 1, weight)])).unwrap_err();
            assert!(matches!(
                err,
                RouteError::InvalidEdge {
                    defect: EdgeDefect::NonFiniteWeight(_),
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_out_of_range_queries() {
        let store = triangle();
        assert!(matches!(
            store.neighbors(3),
            Err(RouteError::OutOfRange {
                index: 3,
                node_count: 3
            })
        ));
        assert!(matches!(store.label(7), Err(RouteError::OutOfRange { .. })));
    }

    #[test]
    fn test_find_by_label() {
        let store = GraphStore::build(["New York", "Boston", "boston"], Vec::<EdgeSpec>::new())
            .unwrap();
        assert_eq!(store.find("new york"), Some(0));
        assert_eq!(store.find("  BOSTON "), Some(1));
        assert_eq!(store.find("Chicago"), None);
    }

    #[test]
    fn test_empty_graph() {
        let store = GraphStore::build(Vec::<String>::new(), Vec::<EdgeSpec>::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.edge_count(), 0);
    }
}
