use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are the indices `0..vertex_count()`. Parallel edges and self-loops
/// are kept as ordinary edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of edges over all adjacency lists
    edge_count: usize,
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first invalid edge
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = WeightedGraph::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// Fails with [`Error::InvalidVertex`] if an endpoint is out of range and with
    /// [`Error::InvalidWeight`] if the weight is negative. The graph is left
    /// untouched on failure.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        for vertex in [from, to] {
            if !self.has_vertex(vertex) {
                return Err(Error::InvalidVertex(vertex));
            }
        }
        if !weight.is_admissible() {
            return Err(Error::InvalidWeight {
                from,
                to,
                weight: format!("{:?}", weight),
            });
        }

        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns true if there's at least one edge `from -> to`
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).iter().any(|&(target, _)| target == to)
    }

    /// Gets the lightest weight among the edges `from -> to`
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .iter()
            .filter(|&&(target, _)| target == to)
            .map(|&(_, weight)| weight)
            .min()
    }

    /// Iterates over all edges as `(from, to, weight)` in per-vertex insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
