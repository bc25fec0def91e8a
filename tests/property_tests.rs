use lazy_dijkstra::algorithm::ShortestPathAlgorithm;
use lazy_dijkstra::graph::generators::{generate_geometric, generate_random};
use lazy_dijkstra::graph::{Graph, WeightedGraph};
use lazy_dijkstra::{Dijkstra, Error, LinearScan, OperationCounter};
use rand::prelude::*;
use rand::rngs::StdRng;

// Plain Bellman-Ford over the edge list, used as a reference
fn bellman_ford(graph: &WeightedGraph<i64>, source: usize) -> Vec<Option<i64>> {
    let n = graph.vertex_count();
    let mut dist = vec![None; n];
    dist[source] = Some(0);

    for _ in 0..n {
        let mut changed = false;
        for (u, v, w) in graph.edges() {
            if let Some(du) = dist[u] {
                let candidate = du + w;
                if dist[v].map_or(true, |dv| candidate < dv) {
                    dist[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    dist
}

fn random_graphs() -> impl Iterator<Item = (WeightedGraph<i64>, usize)> {
    let mut rng = StdRng::seed_from_u64(2024);
    (0..40).map(move |seed| {
        let n = rng.gen_range(1..40);
        let factor = rng.gen_range(0.5..4.0);
        let graph = generate_random(n, factor, 20, seed);
        let source = rng.gen_range(0..n);
        (graph, source)
    })
}

#[test]
fn test_distances_match_bellman_ford() {
    let dijkstra = Dijkstra::new();
    for (graph, source) in random_graphs() {
        let table = dijkstra.compute_all(&graph, source).unwrap();
        let expected = bellman_ford(&graph, source);

        assert_eq!(table.distance(source), Some(0));
        assert_eq!(table.distances(), expected.as_slice(), "source {} on {:?}", source, graph);
    }
}

#[test]
fn test_linear_scan_matches_heap() {
    let dijkstra = Dijkstra::new();
    let scan = LinearScan::new();
    for (graph, source) in random_graphs() {
        let heap = dijkstra.compute_all(&graph, source).unwrap();
        let linear = <LinearScan as ShortestPathAlgorithm<i64, WeightedGraph<i64>>>::compute_shortest_paths(&scan, &graph, source).unwrap();
        assert_eq!(heap.distances(), linear.distances());
    }
}

#[test]
fn test_early_exit_equivalence_and_path_weights() {
    let dijkstra = Dijkstra::new();
    for (graph, source) in random_graphs() {
        let table = dijkstra.compute_all(&graph, source).unwrap();

        for target in 0..graph.vertex_count() {
            match dijkstra.compute_single_target(&graph, source, target).unwrap() {
                Some(found) => {
                    assert_eq!(Some(found.distance), table.distance(target));
                    assert_eq!(found.path.first(), Some(&source));
                    assert_eq!(found.path.last(), Some(&target));

                    let total: i64 = found
                        .path
                        .windows(2)
                        .map(|hop| graph.edge_weight(hop[0], hop[1]).expect("path uses existing edges"))
                        .sum();
                    assert_eq!(total, found.distance);
                }
                None => {
                    assert_eq!(table.distance(target), None);
                    assert!(matches!(table.path_to(target), Err(Error::NoPath { .. })));
                }
            }
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let dijkstra = Dijkstra::new();
    for (graph, source) in random_graphs() {
        let first = dijkstra.compute_all(&graph, source).unwrap();
        let second = dijkstra.compute_all(&graph, source).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_counter_invariants() {
    let dijkstra = Dijkstra::new();
    for (graph, source) in random_graphs() {
        let mut counter = OperationCounter::new();
        let table = dijkstra.compute_all_observed(&graph, source, &mut counter).unwrap();

        assert_eq!(counter.pushes, counter.pops, "every entry is popped by the end");
        assert_eq!(counter.finalized, table.reached_count());
        assert_eq!(counter.stale_pops, counter.pops - counter.finalized);
        assert_eq!(counter.pushes, counter.relaxations + 1);
        assert!(counter.pushes <= graph.edge_count() + 1);
    }
}

#[test]
fn test_geometric_graphs_against_linear_scan() {
    for seed in 0..5 {
        let graph = generate_geometric(60, 0.3, seed);
        let heap = Dijkstra::new().compute_all(&graph, 0).unwrap();
        let linear = <LinearScan as ShortestPathAlgorithm<_, WeightedGraph<_>>>::compute_shortest_paths(&LinearScan, &graph, 0).unwrap();

        for v in 0..graph.vertex_count() {
            match (heap.distance(v), linear.distance(v)) {
                (Some(a), Some(b)) => assert!((a.0 - b.0).abs() < 1e-9, "vertex {}: {} vs {}", v, a, b),
                (None, None) => {}
                other => panic!("reachability differs at {}: {:?}", v, other),
            }
        }
    }
}
