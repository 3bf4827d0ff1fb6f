//! Random graph generation benchmarks.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphwalk_bench::SizeTier;
use graphwalk_core::{GeneratorConfig, build_random_graph};

fn bench_generate_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for tier in SizeTier::ALL {
        let config = tier.config(42);
        group.bench_function(BenchmarkId::new("tier", tier.name()), |b| {
            b.iter(|| build_random_graph(&config).expect("generates"));
        });
    }

    group.finish();
}

fn bench_generate_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_density");

    for probability in [0u8, 10, 50, 100] {
        let config = GeneratorConfig::new(500, probability, 42);
        group.bench_function(BenchmarkId::new("n500", probability), |b| {
            b.iter(|| build_random_graph(&config).expect("generates"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_tiers, bench_generate_density);
criterion_main!(benches);
