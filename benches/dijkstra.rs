use criterion::{black_box, criterion_group, criterion_main, Criterion};

use minpath::graph::generators::generate_connected_graph;
use minpath::{Dijkstra, ShortestPathEngine};

fn bench_pair_queries(c: &mut Criterion) {
    let engine = Dijkstra::new();

    for &n in &[10usize, 50, 200] {
        let graph = generate_connected_graph(n, 3.0, 100);
        c.bench_function(&format!("dijkstra_pair_n{}", n), |b| {
            b.iter(|| engine.shortest_path(black_box(&graph), 0, n - 1))
        });
    }
}

fn bench_full_tree(c: &mut Criterion) {
    let engine = Dijkstra::new();
    let graph = generate_connected_graph(200, 3.0, 100);

    c.bench_function("dijkstra_tree_n200", |b| {
        b.iter(|| engine.shortest_path_tree(black_box(&graph), 0))
    });
}

criterion_group!(benches, bench_pair_queries, bench_full_tree);
criterion_main!(benches);
