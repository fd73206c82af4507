use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use depot_routes::algorithm::{ShortestPathAlgorithm, dijkstra::Dijkstra};
use depot_routes::graph::generators::generate_random_graph;
use depot_routes::graph::{DirectedGraph, Graph};

type RandomGraph = DirectedGraph<usize, OrderedFloat<f64>>;

// Time one query per source, one after the other
fn run_sequential(dijkstra: &Dijkstra, graph: &RandomGraph, sources: &[usize]) -> (Duration, usize) {
    let start = Instant::now();
    let reachable = sources
        .iter()
        .map(|s| dijkstra.compute_shortest_paths(graph, s).unwrap().reachable_count())
        .sum();
    (start.elapsed(), reachable)
}

// Same queries spread over the rayon pool; the graph is shared, the tables are not
fn run_parallel(dijkstra: &Dijkstra, graph: &RandomGraph, sources: &[usize]) -> (Duration, usize) {
    let start = Instant::now();
    let reachable = sources
        .par_iter()
        .map(|s| dijkstra.compute_shortest_paths(graph, s).unwrap().reachable_count())
        .sum();
    (start.elapsed(), reachable)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let queries = 16;

    println!("=====================================================");
    println!("Benchmark: Dijkstra, {} queries per graph", queries);
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, 100, size as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let sources: Vec<usize> = (0..queries).map(|i| i * size / queries).collect();

        let (sequential, reachable_seq) = run_sequential(&dijkstra, &graph, &sources);
        let (parallel, reachable_par) = run_parallel(&dijkstra, &graph, &sources);
        assert_eq!(reachable_seq, reachable_par, "parallel queries disagree with sequential ones");

        println!("  - Sequential: {:?}", sequential);
        println!("  - Parallel:   {:?}", parallel);
        results.push((size, graph.edge_count(), sequential, parallel));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
             "Vertices", "Edges", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, edges, sequential, parallel) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10.2}",
                 size,
                 edges,
                 sequential.as_millis(),
                 parallel.as_millis(),
                 speedup);
    }
}
