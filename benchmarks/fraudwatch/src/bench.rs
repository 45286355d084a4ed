//! Notification counting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 200K days)
//! - Window length (per-day cost should not grow with `d`)
//! - Batch versus day-by-day processing
//! - Skewed spending patterns (flat, spiky, saturated)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fraudwatch::internals::math::median::histogram_median;
use fraudwatch::internals::primitives::histogram::Histogram;
use fraudwatch::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform daily spending over `[0, 200]`.
fn generate_uniform(size: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..=200)).collect()
}

/// Low everyday spending with occasional large purchases (2% of days).
fn generate_spiky(size: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            if rng.random_bool(0.02) {
                rng.random_range(100..=200)
            } else {
                rng.random_range(5..=20)
            }
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    for size in [10_000, 50_000, 200_000] {
        group.throughput(Throughput::Elements(size as u64));

        let values = generate_uniform(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| count_notifications(black_box(&values), 1_000).unwrap())
        });
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("window");
    group.sample_size(50);

    let values = generate_uniform(50_000, 7);
    group.throughput(Throughput::Elements(values.len() as u64));

    for window in [1, 10, 1_000, 25_000] {
        group.bench_with_input(BenchmarkId::new("batch", window), &window, |b, &window| {
            b.iter(|| count_notifications(black_box(&values), window).unwrap())
        });
    }
    group.finish();
}

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    group.sample_size(50);

    let values = generate_uniform(50_000, 11);
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("batch_with_details", |b| {
        b.iter(|| {
            Notifier::<f64>::new()
                .window(500)
                .return_flagged_days()
                .return_medians()
                .adapter(Batch)
                .build()
                .unwrap()
                .run(black_box(&values))
                .unwrap()
        })
    });

    group.bench_function("online", |b| {
        b.iter(|| {
            let mut notifier = Notifier::<f64>::new()
                .window(500)
                .adapter(Online)
                .build()
                .unwrap();
            notifier.add_days(black_box(&values)).unwrap()
        })
    });

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    group.sample_size(100);

    for window in [101, 100] {
        let hist = Histogram::from_values(&generate_uniform(window, 3), 200).unwrap();
        group.bench_with_input(BenchmarkId::new("histogram", window), &window, |b, &window| {
            b.iter(|| histogram_median::<f64>(black_box(&hist), window).unwrap())
        });
    }
    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");
    group.sample_size(50);

    let size = 50_000;
    group.throughput(Throughput::Elements(size as u64));

    let spiky = generate_spiky(size, 5);
    group.bench_function("spiky", |b| {
        b.iter(|| count_notifications(black_box(&spiky), 30).unwrap())
    });

    let flat = vec![0u32; size];
    group.bench_function("all_zero", |b| {
        b.iter(|| count_notifications(black_box(&flat), 30).unwrap())
    });

    let saturated = vec![200u32; size];
    group.bench_function("all_max", |b| {
        b.iter(|| count_notifications(black_box(&saturated), 30).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_window,
    bench_adapters,
    bench_median,
    bench_patterns,
);

criterion_main!(benches);
