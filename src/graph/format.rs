//! JSON edge-list format.
//!
//! ```json
//! { "vertices": 3, "edges": [[0, 1, 4], [1, 2, 1]] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::WeightedGraph;
use crate::Result;

/// On-disk description of a graph with integer weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Number of vertices; vertex IDs are `0..vertices`
    pub vertices: usize,
    /// Directed edges as `[from, to, weight]`
    #[serde(default)]
    pub edges: Vec<(usize, usize, i64)>,
}

impl GraphFile {
    /// Parses a graph description from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a graph description from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Validates every edge and builds the graph
    pub fn into_graph(self) -> Result<WeightedGraph<i64>> {
        WeightedGraph::from_edges(self.vertices, self.edges)
    }
}

impl From<&WeightedGraph<i64>> for GraphFile {
    fn from(graph: &WeightedGraph<i64>) -> Self {
        use crate::graph::Graph;

        GraphFile {
            vertices: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}
