//! Search events and the observers that consume them
//!
//! The engine never prints. Everything a caller might want to narrate or
//! animate is reported as a [`SearchEvent`] to whatever observer the
//! caller passes in.

use std::fmt::{self, Debug, Display};
use num_traits::{Float, Zero};

use crate::graph::VertexKey;

/// One step of a shortest path search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<K, W> {
    /// The search starts from this vertex
    Source { vertex: K },

    /// A vertex left the frontier for the first time; its distance is final
    Settled { vertex: K, distance: W },

    /// A strictly shorter route to `vertex` was found through `via`
    Relaxed { vertex: K, via: K, distance: W },

    /// A superseded frontier entry for an already settled vertex was dropped
    Stale { vertex: K, distance: W },
}

impl<K, W> SearchEvent<K, W> {
    /// The vertex the event is about
    pub fn vertex(&self) -> &K {
        match self {
            SearchEvent::Source { vertex }
            | SearchEvent::Settled { vertex, .. }
            | SearchEvent::Relaxed { vertex, .. }
            | SearchEvent::Stale { vertex, .. } => vertex,
        }
    }

    /// Short machine-readable name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            SearchEvent::Source { .. } => "source",
            SearchEvent::Settled { .. } => "settled",
            SearchEvent::Relaxed { .. } => "relaxed",
            SearchEvent::Stale { .. } => "stale",
        }
    }
}

impl<K, W> Display for SearchEvent<K, W>
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let km = |w: &W| w.to_f64().unwrap_or(f64::NAN);
        match self {
            SearchEvent::Source { vertex } => write!(f, "Starting from {}", vertex),
            SearchEvent::Settled { vertex, distance } => {
                write!(f, "Visiting {} (distance {})", vertex, km(distance))
            }
            SearchEvent::Relaxed { vertex, via, distance } => {
                write!(f, "  Updated {} to {} via {}", vertex, km(distance), via)
            }
            SearchEvent::Stale { vertex, distance } => {
                write!(f, "  Skipping stale entry {} ({})", vertex, km(distance))
            }
        }
    }
}

/// Receives search events while the engine runs
pub trait SearchObserver<K, W> {
    fn on_event(&mut self, event: &SearchEvent<K, W>);
}

impl<K, W, F> SearchObserver<K, W> for F
where
    F: FnMut(&SearchEvent<K, W>),
{
    fn on_event(&mut self, event: &SearchEvent<K, W>) {
        self(event)
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<K, W> SearchObserver<K, W> for NoopObserver {
    fn on_event(&mut self, _event: &SearchEvent<K, W>) {}
}

/// Narrates the search through the `log` facade
///
/// Source and settled vertices go out at `info`, relaxations at `debug`
/// and stale entries at `trace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<K, W> SearchObserver<K, W> for LogObserver
where
    K: VertexKey,
    W: Float + Zero + Debug + Copy,
{
    fn on_event(&mut self, event: &SearchEvent<K, W>) {
        match event {
            SearchEvent::Source { .. } | SearchEvent::Settled { .. } => log::info!("{}", event),
            SearchEvent::Relaxed { .. } => log::debug!("{}", event),
            SearchEvent::Stale { .. } => log::trace!("{}", event),
        }
    }
}

/// Collects every event in order
#[derive(Debug, Clone)]
pub struct EventRecorder<K, W> {
    events: Vec<SearchEvent<K, W>>,
}

impl<K, W> EventRecorder<K, W> {
    pub fn new() -> Self {
        EventRecorder { events: Vec::new() }
    }

    pub fn events(&self) -> &[SearchEvent<K, W>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SearchEvent<K, W>> {
        self.events
    }
}

impl<K, W> Default for EventRecorder<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, W: Clone> SearchObserver<K, W> for EventRecorder<K, W> {
    fn on_event(&mut self, event: &SearchEvent<K, W>) {
        self.events.push(event.clone());
    }
}
