//! Criterion microbenches for tree building and the cycle scan (group "tree").
//!
//! - Complete graphs at the default capacity (dense rows, star-shaped tree).
//! - Seeded random graphs at several edge probabilities.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use spantree::api::*;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let complete = Graph::complete(GraphCfg::default()).unwrap();
    group.bench_function(BenchmarkId::new("build_spanning_tree", "complete30"), |b| {
        b.iter_batched(
            || complete.clone(),
            |mut g| {
                let _ = g.build_spanning_tree(1);
            },
            BatchSize::SmallInput,
        )
    });
    for p in [0.1, 0.3, 0.6] {
        let cfg = RandomGraphCfg {
            edge_prob: p,
            ..RandomGraphCfg::default()
        };
        let g0 = draw_graph(cfg, ReplayToken { seed: 42, index: 0 }).unwrap();
        group.bench_function(BenchmarkId::new("build_spanning_forest", p), |b| {
            b.iter_batched(
                || g0.clone(),
                |mut g| {
                    let _ = g.build_spanning_forest(1);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let mut g = Graph::complete(GraphCfg::default()).unwrap();
    g.build_spanning_tree(1).unwrap();
    group.bench_function(BenchmarkId::new("find_cycles", "complete30"), |b| {
        b.iter(|| g.find_cycles().map(|s| s.cycles.len()))
    });
    let cfg = RandomGraphCfg {
        edge_prob: 0.15,
        ..RandomGraphCfg::default()
    };
    let mut sparse = draw_graph(cfg, ReplayToken { seed: 7, index: 3 }).unwrap();
    sparse.build_spanning_forest(1).unwrap();
    group.bench_function(BenchmarkId::new("find_cycles", "random0.15"), |b| {
        b.iter(|| sparse.find_cycles().map(|s| s.cycles.len()))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_cycles);
criterion_main!(benches);
