pub mod traits;
pub mod directed;
pub mod generators;
pub mod io;

pub use traits::{Graph, MutableGraph, VertexKey};
pub use directed::DirectedGraph;
