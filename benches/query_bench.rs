use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_dijkstra::algorithm::ShortestPathAlgorithm;
use lazy_dijkstra::graph::generators::{generate_grid, generate_random};
use lazy_dijkstra::{Dijkstra, LinearScan};

fn bench_full_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_all");
    for &n in &[1_000usize, 10_000] {
        let graph = generate_random(n, 4.0, 100, 42);
        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute_all(g, black_box(0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", n), &graph, |b, g| {
            b.iter(|| <LinearScan as ShortestPathAlgorithm<i64, _>>::compute_shortest_paths(&LinearScan, g, black_box(0)).unwrap())
        });
    }
    group.finish();
}

fn bench_early_exit(c: &mut Criterion) {
    let graph = generate_grid(200, 200);
    let near = 5 * 200 + 5;
    c.bench_function("single_target_near", |b| {
        b.iter(|| Dijkstra::new().compute_single_target(&graph, 0, black_box(near)).unwrap())
    });
    c.bench_function("compute_all_grid", |b| {
        b.iter(|| Dijkstra::new().compute_all(&graph, black_box(0)).unwrap())
    });
}

criterion_group!(benches, bench_full_queries, bench_early_exit);
criterion_main!(benches);
