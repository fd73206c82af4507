use depot_routes::algorithm::dijkstra::Dijkstra;
use depot_routes::algorithm::traits::ShortestPathAlgorithm;
use depot_routes::algorithm::{EventRecorder, SearchEvent};
use depot_routes::graph::generators::{depot_network, generate_grid, generate_random_graph, DEPOT};
use depot_routes::graph::{DirectedGraph, Graph, MutableGraph};
use depot_routes::Error;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn s(name: &str) -> String {
    name.to_string()
}

// Minimum path weight to every vertex by enumerating all simple paths
fn brute_force_distances(
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> BTreeMap<usize, f64> {
    fn walk(
        graph: &DirectedGraph<usize, OrderedFloat<f64>>,
        at: usize,
        cost: f64,
        on_path: &mut BTreeSet<usize>,
        best: &mut BTreeMap<usize, f64>,
    ) {
        let entry = best.entry(at).or_insert(f64::INFINITY);
        if cost < *entry {
            *entry = cost;
        }
        for (next, weight) in graph.outgoing_edges(&at) {
            if on_path.insert(*next) {
                walk(graph, *next, cost + weight.into_inner(), on_path, best);
                on_path.remove(next);
            }
        }
    }

    let mut best = BTreeMap::new();
    let mut on_path = BTreeSet::from([source]);
    walk(graph, source, 0.0, &mut on_path, &mut best);
    best
}

// Shortest route from the warehouse goes through the northern branch
#[test]
fn test_depot_route_to_cliente_3() {
    let graph = depot_network();
    let dijkstra = Dijkstra::new();

    let path = dijkstra.shortest_path(&graph, &s(DEPOT), &s("CLIENTE_3")).unwrap();

    assert_eq!(path.distance, OrderedFloat(22.0));
    assert_eq!(path.vertices, vec![s(DEPOT), s("SUCURSAL_NORTE"), s("CLIENTE_3")]);
}

// All-nodes mode reports the full distance table
#[test]
fn test_depot_distance_table() {
    let graph = depot_network();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &s(DEPOT)).unwrap();

    let table: BTreeMap<String, f64> = result
        .distances
        .iter()
        .map(|(k, d)| (k.clone(), d.into_inner()))
        .collect();
    let expected = BTreeMap::from([
        (s(DEPOT), 0.0),
        (s("CLIENTE_1"), 12.0),
        (s("SUCURSAL_NORTE"), 15.0),
        (s("CLIENTE_2"), 20.0),
        (s("CLIENTE_3"), 22.0),
    ]);
    assert_eq!(table, expected);
    assert_eq!(result.predecessor(&s("CLIENTE_2")), Some(&s("CLIENTE_1")));
    assert_eq!(result.predecessor(&s(DEPOT)), None);
}

#[test]
fn test_target_equals_source() {
    let graph = depot_network();
    let path = Dijkstra::new()
        .shortest_path(&graph, &s("CLIENTE_1"), &s("CLIENTE_1"))
        .unwrap();

    assert_eq!(path.vertices, vec![s("CLIENTE_1")]);
    assert_eq!(path.distance, OrderedFloat(0.0));
    assert_eq!(path.hops(), 0);
}

#[test]
fn test_isolated_target_has_no_path() {
    let mut graph = depot_network();
    graph.add_vertex(s("Z"));

    let result = Dijkstra::new().compute_shortest_paths(&graph, &s(DEPOT)).unwrap();
    assert!(result.distance(&s("Z")).unwrap().into_inner().is_infinite());
    assert_eq!(result.predecessor(&s("Z")), None);

    match result.path_to(&s("Z")) {
        Err(Error::NoPathFound { origin, target }) => {
            assert_eq!(origin, DEPOT);
            assert_eq!(target, "Z");
        }
        other => panic!("expected NoPathFound, got {:?}", other),
    }
}

#[test]
fn test_invalid_source_and_unknown_target() {
    let graph = depot_network();
    let dijkstra = Dijkstra::new();

    assert!(matches!(
        dijkstra.compute_shortest_paths(&graph, &s("ALMACEN_SUR")),
        Err(Error::InvalidSource(_))
    ));
    assert!(matches!(
        dijkstra.shortest_path(&graph, &s(DEPOT), &s("ALMACEN_SUR")),
        Err(Error::UnknownVertex(_))
    ));
}

// Upstream locations are unreachable on a directed network
#[test]
fn test_edges_are_directed() {
    let graph = depot_network();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &s("SUCURSAL_NORTE"))
        .unwrap();

    assert_eq!(result.reachable_count(), 2);
    assert!(!result.is_reachable(&s(DEPOT)));
    assert!(!result.is_reachable(&s("CLIENTE_1")));
}

// Neighbors that never appear as top-level keys are reached but not expanded
#[test]
fn test_neighbor_without_adjacency_entry() {
    let graph: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::from_adjacency(vec![
        ("hub", vec![("dock", OrderedFloat(3.0)), ("yard", OrderedFloat(9.0))]),
        ("dock", vec![("yard", OrderedFloat(2.0))]),
    ]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"hub").unwrap();

    assert_eq!(result.distance(&"yard"), Some(OrderedFloat(5.0)));
    assert_eq!(result.path_to(&"yard").unwrap().vertices, vec!["hub", "dock", "yard"]);
}

#[test]
fn test_negative_weights_are_rejected() {
    let graph: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::from_adjacency(vec![
        ("a", vec![("b", OrderedFloat(2.0))]),
        ("b", vec![("c", OrderedFloat(-5.0))]),
    ]);

    let err = Dijkstra::new().compute_shortest_paths(&graph, &"a").unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { .. }));
}

// Distances agree with exhaustive path enumeration on small random graphs
#[test]
fn test_matches_brute_force() {
    let dijkstra = Dijkstra::new();

    for seed in 0..40 {
        let graph = generate_random_graph(7, 2.5, 10, seed);
        let result = dijkstra.compute_shortest_paths(&graph, &0).unwrap();
        let expected = brute_force_distances(&graph, 0);

        for v in 0..7 {
            let got = result.distance(&v).unwrap().into_inner();
            let want = expected.get(&v).copied().unwrap_or(f64::INFINITY);
            assert_eq!(got, want, "seed {} vertex {}", seed, v);
        }
    }
}

// Summing the weights along each reconstructed path gives its distance
#[test]
fn test_path_weights_sum_to_distance() {
    let graph = generate_random_graph(60, 3.0, 25, 11);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    for target in 0..60 {
        let path = match result.path_to(&target) {
            Ok(path) => path,
            Err(Error::NoPathFound { .. }) => {
                assert!(result.predecessor(&target).is_none());
                continue;
            }
            Err(e) => panic!("unexpected error: {}", e),
        };

        assert_eq!(path.source(), Some(&0));
        assert_eq!(path.target(), Some(&target));
        let total: f64 = path
            .edges()
            .map(|(u, v)| graph.get_edge_weight(u, v).expect("path uses a missing edge").into_inner())
            .sum();
        assert_eq!(OrderedFloat(total), result.distances[&target]);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = generate_random_graph(200, 4.0, 50, 3);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, &5).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, &5).unwrap();

    assert_eq!(first, second);
}

// Every relaxation strictly lowers the vertex's distance, and every vertex settles once
#[test]
fn test_distances_only_decrease() {
    let graph = generate_random_graph(150, 5.0, 30, 21);
    let mut recorder: EventRecorder<usize, OrderedFloat<f64>> = EventRecorder::new();
    let result = Dijkstra::new()
        .compute_shortest_paths_observed(&graph, &0, &mut recorder)
        .unwrap();

    let mut latest: BTreeMap<usize, f64> = BTreeMap::from([(0, 0.0)]);
    let mut settled = BTreeSet::new();
    for event in recorder.events() {
        match event {
            SearchEvent::Relaxed { vertex, distance, .. } => {
                let previous = latest.get(vertex).copied().unwrap_or(f64::INFINITY);
                assert!(distance.into_inner() < previous, "distance of {} increased", vertex);
                assert!(!settled.contains(vertex), "{} relaxed after settling", vertex);
                latest.insert(*vertex, distance.into_inner());
            }
            SearchEvent::Settled { vertex, distance } => {
                assert!(settled.insert(*vertex), "{} settled twice", vertex);
                assert_eq!(result.distances[vertex], *distance);
            }
            SearchEvent::Stale { vertex, .. } => assert!(settled.contains(vertex)),
            SearchEvent::Source { vertex } => assert_eq!(*vertex, 0),
        }
    }
    assert_eq!(settled.len(), result.reachable_count());
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);
    let path = Dijkstra::new().shortest_path(&graph, &0, &99).unwrap();

    assert_eq!(path.vertices[0], 0, "Path should start at source");
    assert_eq!(path.target(), Some(&99), "Path should end at target");
    // Nine diagonal steps
    assert!((path.distance.into_inner() - 9.0 * 1.4).abs() < 1e-9);
    for (u, v) in path.edges() {
        assert!(graph.has_edge(u, v), "Path should only use existing edges");
    }
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // Create a wall of obstacles in column 5, open only at the bottom two rows
    for y in 0..8 {
        let obstacle = y * 10 + 5;
        let mut edges_to_remove = Vec::new();
        for v in 0..100 {
            if graph.has_edge(&v, &obstacle) {
                edges_to_remove.push((v, obstacle));
            }
            if graph.has_edge(&obstacle, &v) {
                edges_to_remove.push((obstacle, v));
            }
        }
        for (from, to) in edges_to_remove {
            graph.remove_edge(&from, &to);
        }
    }

    let path = Dijkstra::new().shortest_path(&graph, &0, &99).unwrap();
    assert_eq!(path.source(), Some(&0));
    assert_eq!(path.target(), Some(&99));
    assert!(path.vertices.iter().all(|v| v % 10 != 5 || v / 10 >= 8));
    for (u, v) in path.edges() {
        assert!(graph.has_edge(u, v), "Path should only use existing edges");
    }
}

// Independent queries over one shared graph give the same answers in parallel
#[test]
fn test_concurrent_queries_agree() {
    let graph = generate_random_graph(300, 4.0, 40, 99);
    let dijkstra = Dijkstra::new();
    let sources: Vec<usize> = (0..300).step_by(25).collect();

    let sequential: Vec<_> = sources
        .iter()
        .map(|s| dijkstra.compute_shortest_paths(&graph, s).unwrap())
        .collect();
    let parallel: Vec<_> = sources
        .par_iter()
        .map(|s| dijkstra.compute_shortest_paths(&graph, s).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
