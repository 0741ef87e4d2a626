//! Cross-check the traversal algorithms against exhaustive simple-path
//! enumeration on small fixed graphs.

use routegraph_core::graph::{
    connected_components, levels_from_source, shortest_paths, EdgeSpec, GraphStore, NodeIndex,
};

/// Every simple path from `source`, reported as (end node, total weight, hop count)
fn enumerate_paths(store: &GraphStore, source: NodeIndex) -> Vec<(NodeIndex, f64, u32)> {
    fn walk(
        store: &GraphStore,
        node: NodeIndex,
        weight: f64,
        hops: u32,
        on_path: &mut Vec<bool>,
        out: &mut Vec<(NodeIndex, f64, u32)>,
    ) {
        out.push((node, weight, hops));
        for neighbor in store.neighbors(node).unwrap() {
            if !on_path[neighbor.node] {
                on_path[neighbor.node] = true;
                walk(
                    store,
                    neighbor.node,
                    weight + neighbor.weight,
                    hops + 1,
                    on_path,
                    out,
                );
                on_path[neighbor.node] = false;
            }
        }
    }

    let mut on_path = vec![false; store.node_count()];
    on_path[source] = true;
    let mut out = Vec::new();
    walk(store, source, 0.0, 0, &mut on_path, &mut out);
    out
}

fn fixtures() -> Vec<GraphStore> {
    let specs: Vec<(usize, Vec<(usize, usize, f64)>)> = vec![
        // Weighted square with a diagonal
        (
            4,
            vec![(0, 1, 4.0), (1, 2, 1.0), (2, 3, 2.0), (3, 0, 8.0), (0, 2, 6.0)],
        ),
        // Two components, parallel edges, zero weight
        (
            7,
            vec![
                (0, 1, 3.0),
                (1, 2, 0.0),
                (0, 2, 5.0),
                (0, 2, 2.5),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (5, 3, 7.0),
            ],
        ),
        // Ladder where fewest hops and lowest weight disagree
        (
            6,
            vec![
                (0, 5, 50.0),
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (1, 4, 10.0),
            ],
        ),
    ];

    specs
        .into_iter()
        .map(|(n, edges)| {
            let labels: Vec<String> = (0..n).map(|i| format!("N{}", i)).collect();
            GraphStore::build(labels, edges.into_iter().map(EdgeSpec::from)).unwrap()
        })
        .collect()
}

#[test]
fn test_dijkstra_matches_exhaustive_minimum() {
    for store in fixtures() {
        for source in 0..store.node_count() {
            let paths = enumerate_paths(&store, source);
            let result = shortest_paths(&store, source).unwrap();

            for target in 0..store.node_count() {
                let best = paths
                    .iter()
                    .filter(|(end, _, _)| *end == target)
                    .map(|(_, weight, _)| *weight)
                    .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.min(w))));

                assert_eq!(result.distance(target), best, "{} -> {}", source, target);
            }
        }
    }
}

#[test]
fn test_bfs_matches_exhaustive_minimum_hops() {
    for store in fixtures() {
        for source in 0..store.node_count() {
            let paths = enumerate_paths(&store, source);
            let result = levels_from_source(&store, source).unwrap();

            for target in 0..store.node_count() {
                let fewest = paths
                    .iter()
                    .filter(|(end, _, _)| *end == target)
                    .map(|(_, _, hops)| *hops)
                    .min();

                assert_eq!(result.level(target), fewest, "{} -> {}", source, target);
            }
        }
    }
}

#[test]
fn test_reconstructed_paths_sum_to_distance() {
    for store in fixtures() {
        for source in 0..store.node_count() {
            let result = shortest_paths(&store, source).unwrap();
            for target in 0..store.node_count() {
                let Some(path) = result.path_to(target) else {
                    assert!(!result.is_reachable(target));
                    continue;
                };
                assert_eq!(path.first(), Some(&source));
                assert_eq!(path.last(), Some(&target));

                let total: f64 = path
                    .windows(2)
                    .map(|hop| {
                        store
                            .neighbors(hop[0])
                            .unwrap()
                            .iter()
                            .filter(|n| n.node == hop[1])
                            .map(|n| n.weight)
                            .fold(f64::INFINITY, f64::min)
                    })
                    .sum();
                assert_eq!(Some(total), result.distance(target));
            }
        }
    }
}

#[test]
fn test_components_agree_with_reachability() {
    for store in fixtures() {
        let components = connected_components(&store).unwrap();

        for u in 0..store.node_count() {
            let levels = levels_from_source(&store, u).unwrap();
            for v in 0..store.node_count() {
                let same = components.component_of(u) == components.component_of(v);
                assert_eq!(same, levels.level(v).is_some(), "{} ~ {}", u, v);
            }
        }

        assert_eq!(
            components.sizes().iter().sum::<usize>(),
            store.node_count()
        );
        let mut distinct = components.assignment.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), components.count);
    }
}

#[test]
fn test_unreachable_agree_between_dijkstra_and_bfs() {
    for store in fixtures() {
        for source in 0..store.node_count() {
            let distances = shortest_paths(&store, source).unwrap();
            let levels = levels_from_source(&store, source).unwrap();
            for node in 0..store.node_count() {
                assert_eq!(distances.is_reachable(node), levels.level(node).is_some());
            }
        }
    }
}
