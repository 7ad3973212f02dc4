//! Sampling benchmarks.
//!
//! Benchmarks for the core sampling paths:
//! - Even sampling across buckets, by bucket count and draw fraction
//! - Weighted sampling with and without replacement
//! - End-to-end even subsets in both binning modes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use evensample::{sample_evenly, sample_weighted, subset_evenly, BinMode, Series};

// =============================================================================
// Fixtures
// =============================================================================

/// Build `n_buckets` buckets of `bucket_len` tagged items each.
fn tagged_buckets(n_buckets: usize, bucket_len: usize) -> Vec<Vec<u32>> {
    (0..n_buckets)
        .map(|b| (0..bucket_len).map(|i| (b * bucket_len + i) as u32).collect())
        .collect()
}

/// Skewed numeric series: 10% of the items spread over 90% of the range.
fn skewed_series(len: usize) -> Series<usize, f64> {
    let split = len / 10;
    let values = (0..split)
        .map(|x| x as f64)
        .chain((split..len).map(|x| 0.9 * split as f64 + x as f64 / 1000.0))
        .collect();
    Series::from_values(values)
}

// =============================================================================
// Even Sampling Benchmarks
// =============================================================================

/// Benchmark even sampling by bucket count at a fixed draw fraction.
fn bench_sample_evenly(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/evenly");

    for n_buckets in [10, 100, 1_000] {
        let buckets = tagged_buckets(n_buckets, 100);
        let total = n_buckets * 50;

        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::new("half_draw", n_buckets), &buckets, |b, buckets| {
            b.iter(|| {
                let sample = sample_evenly(black_box(buckets), total, Some(42)).unwrap();
                black_box(sample)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Weighted Sampling Benchmarks
// =============================================================================

/// Benchmark weighted draws; the without-replacement path pays for a
/// distribution rebuild per draw.
fn bench_sample_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/weighted");

    let items: Vec<u32> = (0..10_000).collect();
    let weights: Vec<f64> = (0..10_000).map(|i| 1.0 + (i % 100) as f64).collect();

    for k in [100, 1_000] {
        group.throughput(Throughput::Elements(k as u64));

        group.bench_with_input(
            BenchmarkId::new("with_replacement", k),
            &(&items, &weights),
            |b, (items, weights)| {
                b.iter(|| {
                    let sample =
                        sample_weighted(black_box(*items), *weights, k, true, Some(42)).unwrap();
                    black_box(sample)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("without_replacement", k),
            &(&items, &weights),
            |b, (items, weights)| {
                b.iter(|| {
                    let sample =
                        sample_weighted(black_box(*items), *weights, k, false, Some(42)).unwrap();
                    black_box(sample)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Subset Benchmarks
// =============================================================================

/// Benchmark the full bin-then-sample pipeline on a skewed series.
fn bench_subset_evenly(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/subset");

    for len in [1_000, 10_000] {
        let series = skewed_series(len);
        let sample_size = len / 10;

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("continuous", len),
            &series,
            |b, series| {
                b.iter(|| {
                    let subset = subset_evenly(
                        black_box(series),
                        sample_size,
                        BinMode::Continuous { n_bins: 100 },
                        Some(42),
                    )
                    .unwrap();
                    black_box(subset)
                });
            },
        );
    }

    for len in [1_000, 10_000] {
        // Two classes, heavily skewed towards the first.
        let values: Vec<u8> = (0..len).map(|i| if i % 20 == 0 { 1u8 } else { 0 }).collect();
        let series = Series::from_values(values);
        let sample_size = len / 20;

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("discrete", len), &series, |b, series| {
            b.iter(|| {
                let subset =
                    subset_evenly(black_box(series), sample_size, BinMode::Discrete, Some(42))
                        .unwrap();
                black_box(subset)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_sample_evenly,
    bench_sample_weighted,
    bench_subset_evenly,
);

criterion_main!(benches);
