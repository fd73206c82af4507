pub mod traits;
pub mod observer;
pub mod dijkstra;

pub use observer::{EventRecorder, LogObserver, NoopObserver, SearchEvent, SearchObserver};
pub use traits::{Path, ShortestPathAlgorithm, ShortestPathResult};
