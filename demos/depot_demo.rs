use colored::*;
use ordered_float::OrderedFloat;

use depot_routes::algorithm::{dijkstra::Dijkstra, SearchEvent, ShortestPathAlgorithm};
use depot_routes::graph::generators::{depot_network, DEPOT};
use depot_routes::graph::{Graph, MutableGraph};
use depot_routes::Error;

fn main() {
    println!("{}", "Depot Routes Demo".green().bold());
    println!("Shortest delivery routes from the central warehouse\n");

    let mut graph = depot_network();
    println!("Network has {} locations and {} routes",
        graph.vertex_count(), graph.edge_count());

    // Narrate the search as it runs
    let source = DEPOT.to_string();
    let mut narrate = |event: &SearchEvent<String, OrderedFloat<f64>>| match event {
        SearchEvent::Source { .. } => println!("{}", event.to_string().cyan().bold()),
        SearchEvent::Settled { .. } => println!("{}", event.to_string().green()),
        SearchEvent::Relaxed { .. } => println!("{}", event.to_string().yellow()),
        SearchEvent::Stale { .. } => println!("{}", event.to_string().dimmed()),
    };

    let dijkstra = Dijkstra::new();
    let result = dijkstra
        .compute_shortest_paths_observed(&graph, &source, &mut narrate)
        .unwrap();

    println!("\n{}", "Distances from the warehouse".yellow().bold());
    for (location, distance) in &result.distances {
        println!("  {:<16} {} km", location, distance);
    }

    let target = "CLIENTE_3".to_string();
    let path = result.path_to(&target).unwrap();
    println!("\n{} {}", "Best route:".green().bold(), path);

    // An isolated depot nobody drives to
    graph.add_vertex("Z".to_string());
    let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
    match result.path_to(&"Z".to_string()) {
        Err(Error::NoPathFound { origin, target }) => {
            println!("{} {} -> {}", "No route:".red().bold(), origin, target)
        }
        other => println!("unexpected: {:?}", other),
    }
}
