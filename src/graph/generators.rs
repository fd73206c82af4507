use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Depot the reference network is routed from
pub const DEPOT: &str = "BODEGA_CENTRAL";

/// Builds the reference delivery network
///
/// One central warehouse, a northern branch and three customers; every
/// customer route ends at `CLIENTE_3`, which has no outgoing edges.
pub fn depot_network() -> DirectedGraph<String, OrderedFloat<f64>> {
    let routes: [(&str, &[(&str, f64)]); 5] = [
        (DEPOT, &[("CLIENTE_1", 12.0), ("SUCURSAL_NORTE", 15.0)]),
        ("CLIENTE_1", &[("CLIENTE_2", 8.0)]),
        ("SUCURSAL_NORTE", &[("CLIENTE_3", 7.0)]),
        ("CLIENTE_2", &[("CLIENTE_3", 5.0)]),
        ("CLIENTE_3", &[]),
    ];

    DirectedGraph::from_adjacency(routes.iter().map(|(from, edges)| {
        let edges = edges
            .iter()
            .map(|(to, km)| (to.to_string(), OrderedFloat(*km)));
        (from.to_string(), edges)
    }))
}

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Weights are whole numbers in `0..max_weight` so path sums compare
/// exactly. The same seed always yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(0..max_weight.max(1)) as f64);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-neighbour moves
///
/// Cardinal steps cost 1.0 and diagonal steps 1.4. Vertex `y * width + x`
/// sits at column `x`, row `y`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();

    for vertex in 0..(width * height) {
        graph.add_vertex(vertex);
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn depot_network_matches_the_route_sheet() {
        let graph = depot_network();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.has_edge(&DEPOT.to_string(), &"SUCURSAL_NORTE".to_string()));
        assert!(!graph.has_edge(&"SUCURSAL_NORTE".to_string(), &DEPOT.to_string()));
        assert_eq!(graph.outgoing_edges(&"CLIENTE_3".to_string()).count(), 0);
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random_graph(30, 3.0, 20, 7);
        let b = generate_random_graph(30, 3.0, 20, 7);
        let edges_a: Vec<_> = a.edges().map(|(u, v, w)| (*u, *v, w)).collect();
        let edges_b: Vec<_> = b.edges().map(|(u, v, w)| (*u, *v, w)).collect();
        assert_eq!(edges_a, edges_b);
        assert_eq!(a.vertex_count(), 30);
    }
}
