//! Depot Routes - Dijkstra shortest routes over weighted delivery networks
//!
//! A delivery network is a small, static, weighted directed graph keyed by
//! location name. The engine computes the minimum distance from one depot
//! to every location it can reach and reconstructs the route to a chosen
//! destination.
//!
//! Edge weights must be non-negative. The engine checks this up front
//! unless validation is switched off with
//! [`Dijkstra::with_weight_validation`], in which case results on graphs
//! with negative weights are unspecified.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, Path, SearchEvent, SearchObserver, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex not found in graph: {0}")]
    InvalidSource(String),

    #[error("Vertex not known to the graph: {0}")]
    UnknownVertex(String),

    #[error("No path from {origin} to {target}")]
    NoPathFound { origin: String, target: String },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Invalid graph document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
