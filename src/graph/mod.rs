pub mod traits;
pub mod weighted;
pub mod generators;
pub mod format;

pub use traits::{Graph, Weight};
pub use weighted::WeightedGraph;
