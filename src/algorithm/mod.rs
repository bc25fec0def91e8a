pub mod traits;
pub mod observer;
pub mod dijkstra;
pub mod linear_scan;

pub use traits::{reconstruct_path, DistanceTable, ShortestPathAlgorithm, TargetPath};
