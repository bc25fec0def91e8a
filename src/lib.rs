//! Lazy Dijkstra - single-source shortest paths with a lazy-deletion heap
//!
//! The engine relaxes edges of a non-negative weighted directed graph and keeps
//! a binary min-heap of `(vertex, distance)` entries. Instead of a decrease-key
//! operation every improvement pushes a fresh entry; stale entries are skipped
//! on pop because their vertex is already finalized.
//!
//! ```
//! use lazy_dijkstra::{Dijkstra, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_edge(0, 1, 4).unwrap();
//! graph.add_edge(1, 2, 1).unwrap();
//! graph.add_edge(0, 2, 7).unwrap();
//!
//! let table = Dijkstra::new().compute_all(&graph, 0).unwrap();
//! assert_eq!(table.distance(2), Some(5));
//! assert_eq!(table.path_to(2).unwrap(), vec![0, 1, 2]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, Search, SearchPhase, Step},
    linear_scan::LinearScan,
    observer::{OperationCounter, SearchObserver},
    reconstruct_path, DistanceTable, ShortestPathAlgorithm, TargetPath,
};
/// Re-export main types for convenient use
pub use graph::{Graph, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid weight on edge {from} -> {to}: {weight}")]
    InvalidWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Pop from an empty priority queue")]
    EmptyQueue,

    #[error("Shortest distance to vertex {vertex} does not fit in the weight type")]
    DistanceOverflow { vertex: usize },

    #[error("No path from {origin} to {target}")]
    NoPath { origin: usize, target: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
