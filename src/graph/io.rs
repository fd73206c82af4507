//! Loading networks from JSON adjacency documents
//!
//! The document is a nested object, one entry per location, listing the
//! weighted outgoing edges:
//!
//! ```json
//! {
//!   "BODEGA_CENTRAL": { "CLIENTE_1": 12, "SUCURSAL_NORTE": 15 },
//!   "CLIENTE_3": {}
//! }
//! ```

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::path::Path;

use crate::graph::directed::DirectedGraph;
use crate::Result;

/// The serialized form of a network: location -> {neighbor -> weight}
pub type AdjacencyDocument = BTreeMap<String, BTreeMap<String, f64>>;

/// Network type produced by the loaders
pub type Network = DirectedGraph<String, OrderedFloat<f64>>;

/// Converts a parsed document into a graph, keeping weights as written
pub fn from_document(document: AdjacencyDocument) -> Network {
    DirectedGraph::from_adjacency(document.into_iter().map(|(vertex, neighbors)| {
        let edges = neighbors
            .into_iter()
            .map(|(neighbor, weight)| (neighbor, OrderedFloat(weight)));
        (vertex, edges)
    }))
}

/// Converts a graph back into its document form
///
/// Neighbors that were never top-level keys stay absent from the top level.
pub fn to_document(graph: &Network) -> AdjacencyDocument {
    let mut document = AdjacencyDocument::new();
    for (from, to, weight) in graph.edges() {
        document
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight.into_inner());
    }
    for vertex in graph.expanded_vertices() {
        document.entry(vertex.clone()).or_default();
    }
    document
}

/// Parses a network from a JSON string
pub fn from_json_str(json: &str) -> Result<Network> {
    let document: AdjacencyDocument = serde_json::from_str(json)?;
    Ok(from_document(document))
}

/// Reads and parses a network from a JSON file
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Network> {
    let path = path.as_ref();
    log::debug!("Loading network from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

/// Serializes a network to pretty-printed JSON
pub fn to_json_string(graph: &Network) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(graph))?)
}
