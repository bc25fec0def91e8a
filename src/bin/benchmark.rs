use std::time::{Duration, Instant};
use lazy_dijkstra::algorithm::ShortestPathAlgorithm;
use lazy_dijkstra::graph::generators::generate_random;
use lazy_dijkstra::graph::{Graph, WeightedGraph};
use lazy_dijkstra::{Dijkstra, LinearScan};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &WeightedGraph<i64>, source: usize) -> Result<Duration, lazy_dijkstra::Error>
where
    A: ShortestPathAlgorithm<i64, WeightedGraph<i64>>
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reached_count(), duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The linear scan is quadratic, keep sizes moderate
    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];
    let edge_factor = 5.0;
    let source = 0;

    println!("Heap-based Dijkstra vs linear-scan Dijkstra");
    println!("============================================");

    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices and ~{} edges...", size, (size as f64 * edge_factor) as usize);
        let graph = generate_random(size, edge_factor, 100, i as u64);

        let heap_time = benchmark_algorithm(&Dijkstra::new(), &graph, source)?;
        let scan_time = benchmark_algorithm(&LinearScan::new(), &graph, source)?;

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!("  Speedup of heap over linear scan: {:.2}x", speedup);

        let sources: Vec<usize> = (0..8).map(|k| k * size / 8).collect();
        let start = Instant::now();
        Dijkstra::new().compute_many(&graph, &sources)?;
        println!("  {} parallel queries in {:?}", sources.len(), start.elapsed());
    }

    Ok(())
}
