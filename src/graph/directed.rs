use crate::graph::traits::{Graph, MutableGraph, VertexKey};
use num_traits::{Float, Zero};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A directed graph implementation using keyed adjacency maps
///
/// Top-level adjacency keys are the vertices whose outgoing edges are
/// known. Edge targets that never appear as a top-level key are still
/// known vertices; they simply have nothing to expand.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> {target -> weight}
    adjacency: BTreeMap<K, BTreeMap<K, W>>,

    /// Every vertex referenced anywhere in the graph
    known: BTreeSet<K>,
}

impl<K, W> DirectedGraph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: BTreeMap::new(),
            known: BTreeSet::new(),
        }
    }

    /// Builds a graph from a nested `vertex -> [(neighbor, weight)]` listing
    ///
    /// Weights are taken as given, and neighbors are not added as
    /// top-level keys. For a repeated neighbor the last weight wins.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = (K, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (vertex, neighbors) in adjacency {
            graph.known.insert(vertex.clone());
            let edges = graph.adjacency.entry(vertex).or_default();
            for (neighbor, weight) in neighbors {
                graph.known.insert(neighbor.clone());
                edges.insert(neighbor, weight);
            }
        }
        graph
    }

    /// Returns true if the vertex has its own adjacency entry
    pub fn is_expanded(&self, vertex: &K) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Iterates over the vertices that have an adjacency entry
    pub fn expanded_vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacency.keys()
    }

    /// Iterates over every edge as `(from, to, weight)` in key order
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, weight)| (from, to, *weight)))
    }
}

impl<K, W> Default for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> Graph<K, W> for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.known.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.known.iter())
    }

    fn outgoing_edges(&self, vertex: &K) -> Box<dyn Iterator<Item = (&K, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &K) -> bool {
        self.known.contains(vertex)
    }

    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: &K, to: &K) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<K, W> MutableGraph<K, W> for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: K) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.known.insert(vertex.clone());
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    fn add_edge(&mut self, from: K, to: K, weight: W) -> bool {
        if weight < W::zero() || weight.is_nan() {
            return false;
        }

        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.insert(to, weight);
        }
        true
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        match self.adjacency.get_mut(from) {
            Some(edges) => edges.remove(to).is_some(),
            None => false,
        }
    }
}
