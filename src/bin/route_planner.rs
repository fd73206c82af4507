use clap::Parser;
use ordered_float::OrderedFloat;
use std::path::PathBuf;

use depot_routes::algorithm::{NoopObserver, SearchEvent, SearchObserver};
use depot_routes::algorithm::ShortestPathResult;
use depot_routes::graph::generators::{depot_network, DEPOT};
use depot_routes::graph::io::{from_json_file, Network};
use depot_routes::graph::Graph;
use depot_routes::web::models::WebGraph;
use depot_routes::{Dijkstra, Error, ShortestPathAlgorithm};

/// Shortest delivery routes from a depot
#[derive(Parser, Debug)]
#[command(name = "route_planner", version, about)]
struct Cli {
    /// JSON adjacency document; the built-in depot network when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Location the routes start from
    #[arg(short, long, default_value = DEPOT)]
    source: String,

    /// Destination; omit to list the distance to every location
    #[arg(short, long)]
    target: Option<String>,

    /// Do not narrate the search
    #[arg(short, long)]
    quiet: bool,

    /// Write the graph with the route highlighted as JSON for a renderer
    #[arg(long)]
    render: Option<PathBuf>,
}

/// What a query prints, plus the graph a renderer would draw
struct Report {
    lines: Vec<String>,
    handoff: WebGraph,
}

// Superseded frontier entries stay silent
fn narration(event: &SearchEvent<String, OrderedFloat<f64>>) -> Option<String> {
    match event {
        SearchEvent::Stale { .. } => None,
        _ => Some(event.to_string()),
    }
}

fn narrate(event: &SearchEvent<String, OrderedFloat<f64>>) {
    if let Some(line) = narration(event) {
        println!("{}", line);
    }
}

fn describe_distances(result: &ShortestPathResult<String, OrderedFloat<f64>>, lines: &mut Vec<String>) {
    lines.push(format!("Distances from {}:", result.source));
    for (location, distance) in &result.distances {
        if distance.into_inner().is_finite() {
            lines.push(format!("  {:<20} {} km", location, distance));
        } else {
            lines.push(format!("  {:<20} unreachable", location));
        }
    }
}

/// Runs one query and builds its report
///
/// A missing route is part of the report, not an error. Unknown sources
/// and unknown targets are errors.
fn plan(
    graph: &Network,
    source: &str,
    target: Option<&str>,
    observer: &mut dyn SearchObserver<String, OrderedFloat<f64>>,
) -> depot_routes::Result<Report> {
    let result = Dijkstra::new().compute_shortest_paths_observed(graph, &source.to_string(), observer)?;

    let mut lines = Vec::new();
    let path = match target {
        Some(target) => match result.path_to(&target.to_string()) {
            Ok(path) => {
                lines.push(format!("Shortest route from {} to {}", source, target));
                lines.push(format!("Total distance: {} km", path.distance));
                lines.push(format!("Route: {}", path.vertices.join(" -> ")));
                Some(path)
            }
            Err(Error::NoPathFound { origin, target }) => {
                lines.push(format!("No route from {} to {} (distance: unreachable)", origin, target));
                None
            }
            Err(e) => return Err(e),
        },
        None => {
            describe_distances(&result, &mut lines);
            None
        }
    };

    let handoff = WebGraph::from_graph(graph, Some(&result), path.as_ref());
    Ok(Report { lines, handoff })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let graph: Network = match &cli.graph {
        Some(path) => from_json_file(path)?,
        None => depot_network(),
    };
    log::debug!(
        "Loaded network with {} locations and {} routes",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut narrator: Box<dyn SearchObserver<String, OrderedFloat<f64>>> = if cli.quiet {
        Box::new(NoopObserver)
    } else {
        Box::new(narrate)
    };

    let report = plan(&graph, &cli.source, cli.target.as_deref(), narrator.as_mut())?;
    println!();
    for line in &report.lines {
        println!("{}", line);
    }

    if let Some(render_path) = &cli.render {
        std::fs::write(render_path, serde_json::to_string_pretty(&report.handoff)?)?;
        log::info!("Wrote render data to {}", render_path.display());
    }

    Ok(())
}
