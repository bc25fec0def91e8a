use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Distances and predecessor links produced by one shortest path query
///
/// `None` marks a vertex that was never reached from the source. The table is
/// allocated fresh for each query and is read-only once handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable<W> {
    /// Source vertex ID
    source: usize,

    /// Distances from source to each vertex
    distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    predecessors: Vec<Option<usize>>,
}

impl<W> DistanceTable<W>
where
    W: Weight,
{
    /// Table for `vertices` vertices with everything unreached
    pub(crate) fn unreached(vertices: usize, source: usize) -> Self {
        DistanceTable {
            source,
            distances: vec![None; vertices],
            predecessors: vec![None; vertices],
        }
    }

    pub(crate) fn set(&mut self, vertex: usize, distance: W, predecessor: Option<usize>) {
        self.distances[vertex] = Some(distance);
        self.predecessors[vertex] = predecessor;
    }

    /// The vertex the query started from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered by the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance to `vertex`, `None` if unreached or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Previous vertex on the shortest path to `vertex`
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Shortest path from the table's source to `target`
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(self, self.source, target)
    }
}

/// Distance and vertex sequence of a single-target query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPath<W> {
    pub distance: W,
    pub path: Vec<usize>,
}

/// Walks predecessor links from `target` back to `source`.
///
/// Returns the vertices from `source` to `target` inclusive. `source == target`
/// yields `[source]`. Fails with [`Error::NoPath`] when `target` was not
/// reached or its predecessor chain does not lead back to `source`.
pub fn reconstruct_path<W>(table: &DistanceTable<W>, source: usize, target: usize) -> Result<Vec<usize>>
where
    W: Weight,
{
    for vertex in [source, target] {
        if vertex >= table.len() {
            return Err(Error::InvalidVertex(vertex));
        }
    }
    if source == target {
        return Ok(vec![source]);
    }

    let no_path = Error::NoPath {
        origin: source,
        target,
    };
    if !table.is_reached(target) {
        return Err(no_path);
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        // A simple path never has more vertices than the table
        if path.len() > table.len() {
            return Err(no_path);
        }
        match table.predecessor(current) {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Err(no_path),
        }
    }

    path.reverse();
    Ok(path)
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceTable<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &DistanceTable<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target).ok()
    }
}
