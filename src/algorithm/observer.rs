//! Instrumentation hooks for the relaxation loop.
//!
//! Observers see every queue operation and relaxation but cannot influence the
//! search. The unit type `()` is the default no-op observer.

use serde::Serialize;

/// Callbacks invoked by [`Search`](crate::algorithm::dijkstra::Search) at fixed points.
///
/// All methods default to doing nothing.
pub trait SearchObserver<W> {
    /// An entry `(vertex, distance)` was pushed onto the queue
    fn on_push(&mut self, _vertex: usize, _distance: W) {}

    /// An entry was popped, before it is checked for staleness
    fn on_pop(&mut self, _vertex: usize, _distance: W) {}

    /// A popped entry was discarded as stale
    fn on_stale(&mut self, _vertex: usize, _distance: W) {}

    /// A vertex received its final distance
    fn on_finalize(&mut self, _vertex: usize, _distance: W) {}

    /// The edge `from -> to` improved the tentative distance of `to`
    fn on_relax(&mut self, _from: usize, _to: usize, _distance: W) {}
}

impl<W> SearchObserver<W> for () {}

impl<W, O> SearchObserver<W> for &mut O
where
    O: SearchObserver<W> + ?Sized,
{
    fn on_push(&mut self, vertex: usize, distance: W) {
        (**self).on_push(vertex, distance)
    }

    fn on_pop(&mut self, vertex: usize, distance: W) {
        (**self).on_pop(vertex, distance)
    }

    fn on_stale(&mut self, vertex: usize, distance: W) {
        (**self).on_stale(vertex, distance)
    }

    fn on_finalize(&mut self, vertex: usize, distance: W) {
        (**self).on_finalize(vertex, distance)
    }

    fn on_relax(&mut self, from: usize, to: usize, distance: W) {
        (**self).on_relax(from, to, distance)
    }
}

/// Counts every event of a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationCounter {
    pub pushes: usize,
    pub pops: usize,
    pub stale_pops: usize,
    pub finalized: usize,
    pub relaxations: usize,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all queue operations and relaxations
    pub fn total(&self) -> usize {
        self.pushes + self.pops + self.relaxations
    }
}

impl<W> SearchObserver<W> for OperationCounter {
    fn on_push(&mut self, _vertex: usize, _distance: W) {
        self.pushes += 1;
    }

    fn on_pop(&mut self, _vertex: usize, _distance: W) {
        self.pops += 1;
    }

    fn on_stale(&mut self, _vertex: usize, _distance: W) {
        self.stale_pops += 1;
    }

    fn on_finalize(&mut self, _vertex: usize, _distance: W) {
        self.finalized += 1;
    }

    fn on_relax(&mut self, _from: usize, _to: usize, _distance: W) {
        self.relaxations += 1;
    }
}
