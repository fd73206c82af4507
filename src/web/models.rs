use chrono::{DateTime, Utc};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use uuid::Uuid;

use crate::algorithm::{Path, SearchEvent, ShortestPathResult};
use crate::graph::io::AdjacencyDocument;
use crate::graph::{DirectedGraph, Graph, VertexKey};

/// Represents a node in the graph for visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
    pub label: String,
    /// Finalized distance from the source; absent when unreached or not computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default)]
    pub is_source: bool,
    #[serde(default)]
    pub is_target: bool,
    #[serde(default)]
    pub on_path: bool,
}

/// Represents an edge in the graph for visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// A graph ready to hand to a renderer, with the route highlighted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl WebGraph {
    /// Builds the render handoff for a graph
    ///
    /// With a result, nodes carry their finalized distances. With a path,
    /// exactly the edges travelled by the path are flagged `is_path`.
    pub fn from_graph<K, W>(
        graph: &DirectedGraph<K, W>,
        result: Option<&ShortestPathResult<K, W>>,
        path: Option<&Path<K, W>>,
    ) -> Self
    where
        K: VertexKey,
        W: Float + Zero + Debug + Copy,
    {
        let nodes = graph
            .vertices()
            .map(|vertex| {
                let distance = result
                    .and_then(|r| r.distance(vertex))
                    .filter(|d| d.is_finite())
                    .and_then(|d| d.to_f64());
                WebNode {
                    id: vertex.to_string(),
                    label: vertex.to_string(),
                    distance,
                    is_source: result.map_or(false, |r| &r.source == vertex),
                    is_target: path.map_or(false, |p| p.target() == Some(vertex)),
                    on_path: path.map_or(false, |p| p.vertices.contains(vertex)),
                }
            })
            .collect();

        let links = graph
            .edges()
            .map(|(from, to, weight)| WebEdge {
                source: from.to_string(),
                target: to.to_string(),
                weight: weight.to_f64().unwrap_or(f64::NAN),
                is_path: path.map_or(false, |p| p.contains_edge(from, to)),
            })
            .collect();

        WebGraph { nodes, links }
    }
}

/// Route query against an ad hoc network
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub graph: AdjacencyDocument,
    pub source: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// Route query against the network the server was started with
#[derive(Debug, Deserialize)]
pub struct NetworkRouteRequest {
    pub source: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// Response containing the computed distances and, in target mode, the route
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub target: Option<String>,
    pub execution_time_ms: f64,
    pub created_at: DateTime<Utc>,
    /// `null` marks an unreached location
    pub distances: BTreeMap<String, Option<f64>>,
    pub predecessors: BTreeMap<String, Option<String>>,
    pub path: Option<Vec<String>>,
    pub total_distance: Option<f64>,
    /// Set when the target exists but cannot be reached
    pub message: Option<String>,
    pub animation_steps: Vec<AnimationStep>,
    pub graph: WebGraph,
}

/// Animation step for visualizing algorithm execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationStep {
    pub step_id: usize,
    pub step_type: String,
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub description: String,
}

impl AnimationStep {
    pub fn from_event<K, W>(step_id: usize, event: &SearchEvent<K, W>) -> Self
    where
        K: VertexKey,
        W: Float + Zero + Debug + Copy,
    {
        let (via, distance) = match event {
            SearchEvent::Source { .. } => (None, W::zero().to_f64()),
            SearchEvent::Settled { distance, .. } | SearchEvent::Stale { distance, .. } => {
                (None, distance.to_f64())
            }
            SearchEvent::Relaxed { via, distance, .. } => (Some(via.to_string()), distance.to_f64()),
        };

        AnimationStep {
            step_id,
            step_type: event.kind().to_string(),
            node_id: event.vertex().to_string(),
            via,
            distance,
            description: event.to_string().trim().to_string(),
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
