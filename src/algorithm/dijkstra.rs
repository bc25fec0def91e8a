use log::{debug, trace};
use rayon::prelude::*;

use crate::algorithm::observer::SearchObserver;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm, TargetPath};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm over a binary heap with lazy deletion
///
/// Every improvement of a tentative distance pushes a new queue entry; an entry
/// whose vertex is already finalized is dropped when popped. The first pop of a
/// vertex always carries its shortest distance, so the finalized bit-vector is
/// all that is needed to resolve staleness. Runs in `O((V + E) log E)`.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Skip edges into finalized vertices without computing a candidate
    prune_finalized: bool,
    /// Initial heap capacity; defaults to the vertex count
    queue_capacity: Option<usize>,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            prune_finalized: true,
            queue_capacity: None,
        }
    }

    /// Enable or disable skipping edges into finalized vertices.
    /// Results are identical either way.
    pub fn with_neighbor_pruning(mut self, enabled: bool) -> Self {
        self.prune_finalized = enabled;
        self
    }

    /// Set the initial capacity of the priority queue
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Starts a resumable query from `source`
    pub fn search<'g, W, G>(&self, graph: &'g G, source: usize) -> Result<Search<'g, W, G>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        self.search_observed(graph, source, ())
    }

    /// Starts a resumable query that reports its events to `observer`
    pub fn search_observed<'g, W, G, O>(
        &self,
        graph: &'g G,
        source: usize,
        observer: O,
    ) -> Result<Search<'g, W, G, O>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        O: SearchObserver<W>,
    {
        Search::new(graph, source, observer, self)
    }

    /// Shortest distances from `source` to every vertex
    pub fn compute_all<W, G>(&self, graph: &G, source: usize) -> Result<DistanceTable<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        self.compute_all_observed(graph, source, ())
    }

    pub fn compute_all_observed<W, G, O>(
        &self,
        graph: &G,
        source: usize,
        observer: O,
    ) -> Result<DistanceTable<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        O: SearchObserver<W>,
    {
        let mut search = self.search_observed(graph, source, observer)?;
        search.run()?;
        Ok(search.into_table())
    }

    /// Shortest distance and path from `source` to `target`.
    ///
    /// Stops as soon as `target` is finalized. Returns `Ok(None)` when `target`
    /// is unreachable and [`Error::DistanceOverflow`] when some vertex is only
    /// reachable through paths longer than the weight type can hold.
    pub fn compute_single_target<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<Option<TargetPath<W>>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        self.compute_single_target_observed(graph, source, target, ())
    }

    pub fn compute_single_target_observed<W, G, O>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
        observer: O,
    ) -> Result<Option<TargetPath<W>>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        O: SearchObserver<W>,
    {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        let mut search = self.search_observed(graph, source, observer)?;
        let Some(distance) = search.run_until(target)? else {
            debug!("Target {} unreachable from {}", target, source);
            return Ok(None);
        };
        let path = search.table().path_to(target)?;

        Ok(Some(TargetPath { distance, path }))
    }

    /// Runs one independent full query per source in parallel.
    ///
    /// The graph is only read, so all queries share it. Tables come back in
    /// the order of `sources`.
    pub fn compute_many<W, G>(&self, graph: &G, sources: &[usize]) -> Result<Vec<DistanceTable<W>>>
    where
        W: Weight + Send + Sync,
        G: Graph<W> + Sync + ?Sized,
    {
        debug!("Running {} queries in parallel", sources.len());
        sources
            .par_iter()
            .map(|&source| self.compute_all(graph, source))
            .collect()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceTable<W>> {
        self.compute_all(graph, source)
    }
}

/// Lifecycle of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Table and queue allocated, nothing popped yet
    Init,
    /// Popping and relaxing
    Relaxing,
    /// Queue exhausted or stop vertex finalized
    Done,
}

/// Outcome of a single [`Search::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<W> {
    /// `vertex` was finalized at `distance` and its edges were relaxed
    Finalized { vertex: usize, distance: W },
    /// A stale entry was popped and dropped
    Stale { vertex: usize, distance: W },
    /// Nothing left to do
    Done,
}

/// A single shortest path query that can be advanced one pop at a time.
///
/// All state lives in the search itself, so a caller may stop between two
/// calls to [`step`](Search::step) (for example on a deadline) and either drop
/// the search or keep going later. Distances of vertices that are not yet
/// finalized are tentative.
///
/// A candidate distance that overflows the weight type cannot beat any stored
/// distance and is dropped. If such a vertex is still unreached when the queue
/// runs dry, its true distance is unrepresentable and the search fails with
/// [`Error::DistanceOverflow`].
#[derive(Debug)]
pub struct Search<'g, W, G, O = ()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
    O: SearchObserver<W>,
{
    graph: &'g G,
    table: DistanceTable<W>,
    finalized: Vec<bool>,
    /// Vertices that saw a candidate distance too large for `W`
    overflowed: Vec<bool>,
    queue: MinQueue<usize, W>,
    observer: O,
    prune_finalized: bool,
    /// Vertex whose finalization ends the search early
    stop_at: Option<usize>,
    phase: SearchPhase,
    /// Set when the queue ran dry, as opposed to stopping at `stop_at`
    exhausted: bool,
    finalized_count: usize,
    pushed: usize,
}

impl<'g, W, G, O> Search<'g, W, G, O>
where
    W: Weight,
    G: Graph<W> + ?Sized,
    O: SearchObserver<W>,
{
    fn new(graph: &'g G, source: usize, mut observer: O, config: &Dijkstra) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        debug!("Dijkstra query from {} over {} vertices, {} edges", source, n, graph.edge_count());

        let mut table = DistanceTable::unreached(n, source);
        table.set(source, W::zero(), None);

        let mut queue = MinQueue::with_capacity(config.queue_capacity.unwrap_or(n));
        queue.push(source, W::zero());
        observer.on_push(source, W::zero());

        Ok(Search {
            graph,
            table,
            finalized: vec![false; n],
            overflowed: vec![false; n],
            queue,
            observer,
            prune_finalized: config.prune_finalized,
            stop_at: None,
            phase: SearchPhase::Init,
            exhausted: false,
            finalized_count: 0,
            pushed: 1,
        })
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Returns true once `vertex` holds its final distance
    pub fn is_finalized(&self, vertex: usize) -> bool {
        self.finalized.get(vertex).copied().unwrap_or(false)
    }

    /// Number of vertices finalized so far
    pub fn finalized_count(&self) -> usize {
        self.finalized_count
    }

    /// Entries currently in the queue, stale ones included
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// The table as it stands; only finalized entries are final
    pub fn table(&self) -> &DistanceTable<W> {
        &self.table
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Pops one entry and, unless it is stale, finalizes its vertex and relaxes
    /// the outgoing edges.
    ///
    /// Once the queue is exhausted this keeps returning `Ok(Step::Done)`, or
    /// [`Error::DistanceOverflow`] if an unreached vertex had an overflowing
    /// candidate distance.
    pub fn step(&mut self) -> Result<Step<W>> {
        if self.phase == SearchPhase::Done {
            return self.done();
        }
        self.phase = SearchPhase::Relaxing;

        let Some((u, d)) = self.queue.pop() else {
            self.exhausted = true;
            self.finish();
            return self.done();
        };
        self.observer.on_pop(u, d);

        if self.finalized[u] {
            trace!("Dropping stale entry ({}, {:?})", u, d);
            self.observer.on_stale(u, d);
            return Ok(Step::Stale { vertex: u, distance: d });
        }
        self.finalized[u] = true;

        // Cannot happen when pushes only follow improvements
        if self.table.distance(u).map_or(false, |current| d > current) {
            trace!("Dropping outdated entry ({}, {:?})", u, d);
            self.observer.on_stale(u, d);
            return Ok(Step::Stale { vertex: u, distance: d });
        }

        self.finalized_count += 1;
        self.observer.on_finalize(u, d);
        trace!("Finalized {} at {:?}", u, d);

        if self.stop_at == Some(u) {
            self.finish();
            return Ok(Step::Finalized { vertex: u, distance: d });
        }

        for &(v, weight) in self.graph.neighbors(u) {
            if self.prune_finalized && self.finalized[v] {
                continue;
            }

            let Some(candidate) = d.checked_sum(weight) else {
                trace!("Distance overflow on edge {} -> {}", u, v);
                self.overflowed[v] = true;
                continue;
            };
            let improves = match self.table.distance(v) {
                None => true,
                Some(current) => candidate < current,
            };

            if improves {
                self.table.set(v, candidate, Some(u));
                self.observer.on_relax(u, v, candidate);
                self.queue.push(v, candidate);
                self.observer.on_push(v, candidate);
                self.pushed += 1;
            }
        }

        Ok(Step::Finalized { vertex: u, distance: d })
    }

    /// Steps until the queue is exhausted
    pub fn run(&mut self) -> Result<()> {
        while self.step()? != Step::Done {}
        Ok(())
    }

    /// Steps until `target` is finalized and returns its distance, or `None`
    /// if the queue runs dry first.
    ///
    /// If `target` is already finalized its distance is returned and the search
    /// is left as it was. Otherwise the edges of `target` are not relaxed and
    /// the search ends in [`SearchPhase::Done`].
    pub fn run_until(&mut self, target: usize) -> Result<Option<W>> {
        if self.is_finalized(target) {
            return Ok(self.table.distance(target));
        }

        self.stop_at = Some(target);
        let outcome = self.run();
        self.stop_at = None;
        outcome?;

        if self.is_finalized(target) {
            Ok(self.table.distance(target))
        } else {
            Ok(None)
        }
    }

    /// Consumes the search and returns its distance table
    pub fn into_table(self) -> DistanceTable<W> {
        self.table
    }

    /// Result of stepping a finished search
    fn done(&self) -> Result<Step<W>> {
        if self.exhausted {
            // A reached vertex has a representable distance below any overflowing candidate
            let unrepresentable = (0..self.overflowed.len())
                .find(|&v| self.overflowed[v] && !self.table.is_reached(v));
            if let Some(vertex) = unrepresentable {
                return Err(Error::DistanceOverflow { vertex });
            }
        }
        Ok(Step::Done)
    }

    fn finish(&mut self) {
        self.phase = SearchPhase::Done;
        debug!(
            "Dijkstra query from {} done: {} finalized, {} entries pushed, {} left in queue",
            self.table.source(),
            self.finalized_count,
            self.pushed,
            self.queue.len()
        );
    }
}
