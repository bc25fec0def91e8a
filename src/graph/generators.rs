use crate::graph::{Graph, WeightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `0..=max_weight`. Self-loops and parallel
/// edges may occur. The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: i64, seed: u64) -> WeightedGraph<i64> {
    let mut graph = WeightedGraph::new(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight.max(0));
        graph
            .add_edge(u, v, weight)
            .expect("generated edge is valid");
    }

    graph
}

/// Generates a `width * height` grid with edges pointing right and down.
///
/// Straight steps cost 2 and diagonal (down-right) shortcuts cost 3, so the
/// diagonal is cheaper than the two straight steps it replaces. Vertex
/// `(x, y)` has index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<i64> {
    let mut graph = WeightedGraph::new(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), 2).expect("generated edge is valid");
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), 2).expect("generated edge is valid");
            }
            if x + 1 < width && y + 1 < height {
                graph.add_edge(current, index(x + 1, y + 1), 3).expect("generated edge is valid");
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected both ways)
pub fn generate_geometric(n: usize, r: f64, seed: u64) -> WeightedGraph<OrderedFloat<f64>> {
    let mut graph = WeightedGraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for i in 0..graph.vertex_count() {
        for j in 0..graph.vertex_count() {
            if i == j {
                continue;
            }
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = f64::hypot(x1 - x2, y1 - y2);

            if dist <= r {
                graph.add_edge(i, j, OrderedFloat(dist)).expect("generated edge is valid");
            }
        }
    }

    graph
}
