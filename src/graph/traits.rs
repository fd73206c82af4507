use std::fmt::{Debug, Display};
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Identifier of a location in a network
///
/// Any ordered, printable key works: location names (`String`, `&str`)
/// or plain integer ids.
pub trait VertexKey: Ord + Clone + Debug + Display {}

impl<K> VertexKey for K where K: Ord + Clone + Debug + Display {}

/// Trait representing a weighted directed graph keyed by `K`
pub trait Graph<K, W>: Debug
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of known vertices, including neighbors that
    /// only appear as edge targets
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every known vertex in key order
    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// A vertex without an adjacency entry yields nothing.
    fn outgoing_edges(&self, vertex: &K) -> Box<dyn Iterator<Item = (&K, W)> + '_>;

    /// Returns true if the vertex is known to the graph
    fn has_vertex(&self, vertex: &K) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &K, to: &K) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &K, to: &K) -> Option<W>;

    /// Validate that the graph doesn't have negative weights
    ///
    /// Reports the first offending edge in vertex order. NaN weights are
    /// rejected as well since they break distance comparisons.
    fn validate_non_negative(&self) -> Result<()> {
        for from in self.vertices() {
            for (to, weight) in self.outgoing_edges(from) {
                if weight < W::zero() || weight.is_nan() {
                    return Err(Error::NegativeWeight {
                        from: from.to_string(),
                        to: to.to_string(),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Construction operations for building a graph before it is queried
pub trait MutableGraph<K, W>: Graph<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex with no outgoing edges; returns false if it already had them
    fn add_vertex(&mut self, vertex: K) -> bool;

    /// Adds a directed edge, creating missing endpoints
    ///
    /// An existing edge between the same pair takes the new weight.
    /// Negative or NaN weights are refused and leave the graph unchanged.
    fn add_edge(&mut self, from: K, to: K, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &K, to: &K) -> bool;
}
