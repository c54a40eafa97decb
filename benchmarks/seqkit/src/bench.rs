//! seqkit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Top-N selection against a full sort (1K to 100K elements)
//! - Equality-scan dedup against hashed-key dedup
//! - Keyed merge of several sequences

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use seqkit::prelude::*;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn random_values(size: usize, max: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..max)).collect()
}

// ============================================================================
// Selection Benchmarks
// ============================================================================

fn bench_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("top");

    for size in [1_000, 10_000, 100_000] {
        let data = random_values(size, u64::MAX, 42);
        group.throughput(Throughput::Elements(size as u64));

        for n in [10, 100] {
            group.bench_with_input(
                BenchmarkId::new(format!("top_{n}"), size),
                &data,
                |b, data| b.iter(|| top(black_box(data), |x, y| x.cmp(y), n)),
            );
        }

        group.bench_with_input(BenchmarkId::new("full_sort", size), &data, |b, data| {
            b.iter(|| {
                let mut sorted = black_box(data).clone();
                sorted.sort();
                sorted.truncate(100);
                sorted
            })
        });
    }

    group.finish();
}

// ============================================================================
// Dedup Benchmarks
// ============================================================================

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");

    for size in [100, 1_000, 5_000] {
        let data = random_values(size, (size / 4) as u64, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("equality_scan", size), &data, |b, data| {
            b.iter(|| distinct(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("hashed_key", size), &data, |b, data| {
            b.iter(|| distinct_by_key(black_box(data), |x| *x))
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let parts: Vec<Vec<u64>> = (0..8).map(|i| random_values(10_000, 50_000, i)).collect();
    group.throughput(Throughput::Elements(80_000));

    group.bench_function("concat", |b| b.iter(|| merge::<u64, _>(black_box(&parts))));
    group.bench_function("by_key", |b| {
        b.iter(|| merge_by_key(black_box(&parts), |x: &u64| *x))
    });

    group.finish();
}

criterion_group!(benches, bench_top, bench_distinct, bench_merge);
criterion_main!(benches);
