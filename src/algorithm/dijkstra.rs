use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::observer::{SearchEvent, SearchObserver};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexKey};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazily pruned frontier
///
/// Improving a vertex pushes a fresh frontier entry instead of updating
/// the old one; entries for vertices that were already settled are
/// dropped when popped. Ties between equal distances are not broken in
/// any documented order.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject graphs with negative or NaN weights before searching
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
        }
    }

    /// Turns the up-front weight check on or off
    ///
    /// With the check off, negative weights are not detected and the
    /// computed distances are unspecified.
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths_observed(
        &self,
        graph: &G,
        source: &K,
        observer: &mut dyn SearchObserver<K, W>,
    ) -> Result<ShortestPathResult<K, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source.to_string()));
        }
        if self.validate_weights {
            graph.validate_non_negative()?;
        }

        // Every known vertex starts unreached
        let mut distances: BTreeMap<K, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        let mut predecessors: BTreeMap<K, Option<K>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        let mut visited: BTreeSet<K> = BTreeSet::new();

        distances.insert(source.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());
        observer.on_event(&SearchEvent::Source {
            vertex: source.clone(),
        });

        // Main Dijkstra loop
        while let Some((u, dist_u)) = frontier.pop() {
            if visited.contains(&u) {
                observer.on_event(&SearchEvent::Stale {
                    vertex: u,
                    distance: dist_u,
                });
                continue;
            }
            visited.insert(u.clone());
            observer.on_event(&SearchEvent::Settled {
                vertex: u.clone(),
                distance: dist_u,
            });

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    observer.on_event(&SearchEvent::Relaxed {
                        vertex: v.clone(),
                        via: u.clone(),
                        distance: candidate,
                    });
                    frontier.push(v.clone(), candidate);
                }
            }
        }

        log::debug!(
            "Dijkstra from {} settled {} of {} vertices",
            source,
            visited.len(),
            distances.len()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
