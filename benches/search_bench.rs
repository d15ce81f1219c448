//! Criterion benchmarks for the parallel flip search.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pfannkuchen::{search, MAX_WORKERS, TARGET_CHUNKS};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for pancakes in [7usize, 8, 9] {
        group.bench_with_input(
            BenchmarkId::from_parameter(pancakes),
            &pancakes,
            |b, &pancakes| {
                b.iter(|| search(pancakes, TARGET_CHUNKS, MAX_WORKERS).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_9_by_workers");
    for workers in [1usize, 2, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                b.iter(|| search(9, TARGET_CHUNKS, workers).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_workers);
criterion_main!(benches);
