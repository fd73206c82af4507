use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use num_traits::{Float, Zero};

use crate::algorithm::observer::{NoopObserver, SearchObserver};
use crate::graph::{Graph, VertexKey};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// Both tables hold an entry for every vertex known to the graph.
/// Unreached vertices keep an infinite distance and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: BTreeMap<K, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: BTreeMap<K, Option<K>>,

    /// Source vertex
    pub source: K,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Finalized distance to `vertex`, `None` if the vertex is unknown
    pub fn distance(&self, vertex: &K) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &K) -> Option<&K> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &K) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Reconstructs the route from the source to `target`
    ///
    /// Fails with [`Error::UnknownVertex`] when the graph never mentioned
    /// `target` and with [`Error::NoPathFound`] when it cannot be reached.
    pub fn path_to(&self, target: &K) -> Result<Path<K, W>> {
        let distance = self
            .distance(target)
            .ok_or_else(|| Error::UnknownVertex(target.to_string()))?;

        if distance.is_infinite() {
            return Err(Error::NoPathFound {
                origin: self.source.to_string(),
                target: target.to_string(),
            });
        }

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while let Some(Some(pred)) = self.predecessors.get(current) {
            // A chain longer than the table can only come from a cycle
            if vertices.len() > self.predecessors.len() {
                return Err(Error::AlgorithmError(format!(
                    "predecessor chain from {} does not terminate",
                    target
                )));
            }
            vertices.push(pred.clone());
            current = pred;
        }

        if *current != self.source {
            return Err(Error::AlgorithmError(format!(
                "predecessor chain from {} ends at {} instead of {}",
                target, current, self.source
            )));
        }

        vertices.reverse();
        Ok(Path { vertices, distance })
    }
}

/// A route from the source to a target, both endpoints included
#[derive(Debug, Clone, PartialEq)]
pub struct Path<K, W> {
    /// Vertices in travel order
    pub vertices: Vec<K>,

    /// Total weight of the route
    pub distance: W,
}

impl<K, W> Path<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// First vertex, `None` for a hand-built empty path
    pub fn source(&self) -> Option<&K> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&K> {
        self.vertices.last()
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the route
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns true if the route travels the edge `from -> to`
    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        self.edges().any(|(u, v)| u == from && v == to)
    }
}

impl<K, W> Display for Path<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.vertices.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "{} ({})",
            names.join(" -> "),
            self.distance.to_f64().unwrap_or(f64::NAN)
        )
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices,
    /// reporting every search step to `observer`
    fn compute_shortest_paths_observed(
        &self,
        graph: &G,
        source: &K,
        observer: &mut dyn SearchObserver<K, W>,
    ) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>> {
        self.compute_shortest_paths_observed(graph, source, &mut NoopObserver)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<K, W>, target: &K) -> Result<Path<K, W>> {
        result.path_to(target)
    }

    /// Runs a full search from `source` and returns the route to `target`
    fn shortest_path(&self, graph: &G, source: &K, target: &K) -> Result<Path<K, W>> {
        let result = self.compute_shortest_paths(graph, source)?;
        self.get_path(&result, target)
    }
}
