use log::debug;

use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm without a priority queue.
///
/// Each round scans all vertices for the closest unvisited one, giving
/// `O(V^2 + E)`. Competitive only on small dense graphs; mostly useful as an
/// independent cross-check of [`Dijkstra`](crate::Dijkstra).
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl LinearScan {
    /// Creates a new linear-scan instance
    pub fn new() -> Self {
        LinearScan
    }

    fn closest_unvisited<W: Weight>(table: &DistanceTable<W>, visited: &[bool]) -> Option<(usize, W)> {
        table
            .distances()
            .iter()
            .enumerate()
            .filter(|&(v, _)| !visited[v])
            .filter_map(|(v, d)| d.map(|d| (v, d)))
            .min_by_key(|&(v, d)| (d, v))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LinearScan
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "LinearScan"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceTable<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut table = DistanceTable::unreached(n, source);
        table.set(source, W::zero(), None);
        let mut visited = vec![false; n];
        let mut overflowed = vec![false; n];
        let mut rounds = 0;

        while let Some((u, dist_u)) = Self::closest_unvisited(&table, &visited) {
            visited[u] = true;
            rounds += 1;

            for &(v, weight) in graph.neighbors(u) {
                if visited[v] {
                    continue;
                }
                let Some(candidate) = dist_u.checked_sum(weight) else {
                    overflowed[v] = true;
                    continue;
                };
                if table.distance(v).map_or(true, |current| candidate < current) {
                    table.set(v, candidate, Some(u));
                }
            }
        }

        debug!("Linear scan from {} finished after {} rounds", source, rounds);
        if let Some(vertex) = (0..n).find(|&v| overflowed[v] && !table.is_reached(v)) {
            return Err(Error::DistanceOverflow { vertex });
        }
        Ok(table)
    }
}
