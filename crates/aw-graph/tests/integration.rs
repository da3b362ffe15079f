//! Integration tests for aw-graph.

use std::collections::HashSet;

use aw_graph::{ConnectivityGraph, EdgeState, GraphError};

/// Two components: v1..v4 and v5-v6 (the first pair is declared twice).
const SPLIT_PAIRS: [(&str, &str); 5] = [
    ("v1", "v2"),
    ("v2", "v3"),
    ("v3", "v4"),
    ("v1", "v2"),
    ("v5", "v6"),
];

/// Connected, with a cycle v2-v3-v4.
const CONNECTED_PAIRS: [(&str, &str); 6] = [
    ("v1", "v2"),
    ("v2", "v3"),
    ("v3", "v4"),
    ("v2", "v4"),
    ("v1", "v5"),
    ("v5", "v6"),
];

fn split_graph() -> ConnectivityGraph<&'static str> {
    ConnectivityGraph::from_edge_pairs(SPLIT_PAIRS).unwrap()
}

fn connected_graph() -> ConnectivityGraph<&'static str> {
    ConnectivityGraph::from_edge_pairs(CONNECTED_PAIRS).unwrap()
}

#[test]
fn connectivity_after_adding() {
    let cases = [
        ("v1", "v2", false),
        ("v1", "v5", true),
        ("v3", "v5", true),
        ("v4", "v6", true),
    ];
    for (from, to, expected) in cases {
        let mut graph = split_graph();
        assert!(!graph.is_connected());
        graph.add_edge(&from, &to).unwrap();
        assert_eq!(graph.is_connected(), expected, "adding {from}-{to}");
    }
}

#[test]
fn connectivity_after_removal() {
    let cases = [
        ("v1", "v2", false),
        ("v5", "v6", false),
        ("v3", "v5", true),
        ("v2", "v4", true),
    ];
    for (from, to, expected) in cases {
        let mut graph = connected_graph();
        assert!(graph.is_connected());
        graph.remove_edge(&from, &to).unwrap();
        assert_eq!(graph.is_connected(), expected, "removing {from}-{to}");
    }
}

#[test]
fn removing_reachable_non_edge_keeps_direct_state() {
    let mut graph = connected_graph();
    let before: Vec<_> = graph
        .direct_edges()
        .map(|(a, b)| (*a, *b))
        .collect();

    graph.remove_edge(&"v3", &"v5").unwrap();
    let after: Vec<_> = graph
        .direct_edges()
        .map(|(a, b)| (*a, *b))
        .collect();

    assert_eq!(before, after);
    assert!(graph.is_reachable(&"v3", &"v5").unwrap());
}

#[test]
fn splitting_connected_graph_yields_itself() {
    let mut graph = connected_graph();
    let pristine = graph.clone();

    let parts: Vec<_> = graph.split_into_connected_graphs().collect();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], pristine);
}

#[test]
fn splitting_two_components() {
    let mut graph = split_graph();
    let parts: Vec<_> = graph.split_into_connected_graphs().collect();

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].vertices(), &["v1", "v2", "v3", "v4"]);
    assert_eq!(parts[1].vertices(), &["v5", "v6"]);

    let first = &parts[0];
    assert_eq!(first.direct_edges().count(), 3);
    assert_eq!(first.edge_state(&"v1", &"v4").unwrap(), EdgeState::Absent);

    // The source graph keeps all of its vertices and edges.
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.direct_edges().count(), 4);
}

#[test]
fn split_after_removal_separates_bridge_ends() {
    let mut graph = connected_graph();
    graph.remove_edge(&"v1", &"v5").unwrap();
    assert!(!graph.is_reachable(&"v1", &"v5").unwrap());

    let parts: Vec<_> = graph.split_into_connected_graphs().collect();
    assert_eq!(parts.len(), 2);

    let with_v1 = parts.iter().find(|g| g.contains(&"v1")).unwrap();
    let with_v5 = parts.iter().find(|g| g.contains(&"v5")).unwrap();
    assert_eq!(with_v1.vertices(), &["v1", "v2", "v3", "v4"]);
    assert_eq!(with_v5.vertices(), &["v5", "v6"]);
}

#[test]
fn add_then_remove_restores_reachability() {
    let mut graph = split_graph();
    let vertices = graph.vertices().to_vec();
    let snapshot = |graph: &mut ConnectivityGraph<&'static str>| {
        let mut table = Vec::new();
        for a in &vertices {
            for b in &vertices {
                table.push(graph.is_reachable(a, b).unwrap());
            }
        }
        table
    };

    let before = snapshot(&mut graph);
    graph.add_edge(&"v4", &"v5").unwrap();
    assert!(graph.is_connected());
    graph.remove_edge(&"v4", &"v5").unwrap();
    assert_eq!(snapshot(&mut graph), before);
}

#[test]
fn empty_input_fails() {
    let pairs: Vec<(u32, u32)> = Vec::new();
    assert!(matches!(
        ConnectivityGraph::from_edge_pairs(pairs),
        Err(GraphError::InvalidInput { .. })
    ));
    assert!(matches!(
        ConnectivityGraph::<u32>::from_vertices(Vec::new()),
        Err(GraphError::InvalidInput { .. })
    ));
}

#[test]
fn large_chain() {
    let pairs: Vec<(u32, u32)> = (0..99).map(|i| (i, i + 1)).collect();
    let mut graph = ConnectivityGraph::from_edge_pairs(pairs).unwrap();

    assert_eq!(graph.vertex_count(), 100);
    assert!(graph.is_connected());
    assert!(graph.is_reachable(&0, &99).unwrap());

    graph.remove_edge(&49, &50).unwrap();
    let parts: Vec<_> = graph.split_into_connected_graphs().collect();
    assert_eq!(parts.len(), 2);

    let sizes: HashSet<usize> = parts.iter().map(|g| g.vertex_count()).collect();
    assert_eq!(sizes, HashSet::from([50]));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0_u8..8, 0_u8..8), 1..16)
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(pairs in edges(), extra in (0_u8..8, 0_u8..8)) {
            let mut graph = ConnectivityGraph::from_edge_pairs(pairs).unwrap();
            let (a, b) = extra;
            if graph.contains(&a) && graph.contains(&b) {
                graph.remove_edge(&a, &b).unwrap();
            }
            graph.is_connected();

            let vertices = graph.vertices().to_vec();
            for u in &vertices {
                for v in &vertices {
                    prop_assert_eq!(
                        graph.edge_state(u, v).unwrap(),
                        graph.edge_state(v, u).unwrap()
                    );
                }
            }
        }

        #[test]
        fn split_partitions_vertices(pairs in edges()) {
            let mut graph = ConnectivityGraph::from_edge_pairs(pairs).unwrap();
            let original: Vec<u8> = graph.vertices().to_vec();
            let direct: HashSet<(u8, u8)> = graph
                .direct_edges()
                .map(|(a, b)| (*a, *b))
                .collect();

            let parts: Vec<_> = graph.split_into_connected_graphs().collect();
            let mut seen = HashSet::new();
            for part in &parts {
                let mut part = part.clone();
                prop_assert!(part.is_connected());
                for v in part.vertices() {
                    prop_assert!(seen.insert(*v), "vertex {} in two components", v);
                }
                for (a, b) in part.direct_edges() {
                    prop_assert!(direct.contains(&(*a, *b)) || direct.contains(&(*b, *a)));
                }
            }
            prop_assert_eq!(seen.len(), original.len());

            // Components are exactly the reachability classes.
            for a in &original {
                for b in &original {
                    let together = parts.iter().any(|p| p.contains(a) && p.contains(b));
                    prop_assert_eq!(together, graph.is_reachable(a, b).unwrap());
                }
            }
        }

        #[test]
        fn add_remove_round_trip(pairs in edges(), pick in 0_usize..64) {
            let mut graph = ConnectivityGraph::from_edge_pairs(pairs).unwrap();
            let vertices = graph.vertices().to_vec();

            let mut before = Vec::new();
            let mut unreachable = Vec::new();
            for u in &vertices {
                for v in &vertices {
                    let reachable = graph.is_reachable(u, v).unwrap();
                    if !reachable {
                        unreachable.push((*u, *v));
                    }
                    before.push(reachable);
                }
            }
            if unreachable.is_empty() {
                return Ok(());
            }
            let (a, b) = unreachable[pick % unreachable.len()];

            graph.add_edge(&a, &b).unwrap();
            prop_assert!(graph.is_reachable(&a, &b).unwrap());
            graph.remove_edge(&a, &b).unwrap();

            let mut after = Vec::new();
            for u in &vertices {
                for v in &vertices {
                    after.push(graph.is_reachable(u, v).unwrap());
                }
            }
            prop_assert_eq!(before, after);
        }
    }
}
