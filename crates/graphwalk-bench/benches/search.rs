//! BFS and DFS search benchmarks per size tier.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphwalk_bench::{SizeTier, generate, random_endpoints};
use graphwalk_core::{Graph, Strategy, Vertex, search};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for tier in SizeTier::ALL {
        let graph = generate(tier, 42).expect("tier generates");
        let last = graph.vertex_count() - 1;
        let endpoints = random_endpoints(&graph, 32, 7);

        for strategy in Strategy::ALL {
            group.bench_function(
                BenchmarkId::new(format!("{}_first_to_last", strategy.label()), tier.name()),
                |b| {
                    b.iter(|| search(&graph, 0, last, strategy).expect("in range"));
                },
            );

            group.bench_function(
                BenchmarkId::new(format!("{}_random_pairs", strategy.label()), tier.name()),
                |b| {
                    b.iter(|| {
                        for &(start, target) in &endpoints {
                            search(&graph, start, target, strategy).expect("in range");
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

/// Copies `graph` into one with an extra isolated vertex, so searching for
/// that vertex explores the whole component of the start.
fn with_isolated_target(graph: &Graph) -> (Graph, Vertex) {
    let isolated = graph.vertex_count();
    let mut padded = Graph::new(isolated + 1).expect("positive");
    for &(u, v) in graph.edges() {
        padded.add_edge(u, v).expect("in range");
    }
    (padded, isolated)
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sweep");

    for tier in SizeTier::ALL {
        let graph = generate(tier, 42).expect("tier generates");
        let (padded, isolated) = with_isolated_target(&graph);

        for strategy in Strategy::ALL {
            group.bench_function(BenchmarkId::new(strategy.label(), tier.name()), |b| {
                b.iter(|| search(&padded, 0, isolated, strategy).expect("in range"));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_full_sweep);
criterion_main!(benches);
