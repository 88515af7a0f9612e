//! Benchmarks for column-sizing resolution performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridsize::{
    start_offset, total_size, ColumnSizingState, LeafColumn, PinnedPosition, SizingRegion,
};

/// Build a synthetic table: every tenth column pinned (alternating side),
/// every third column carrying an override.
fn fixture(n: usize) -> (Vec<LeafColumn>, ColumnSizingState) {
    let columns: Vec<LeafColumn> = (0..n)
        .map(|i| {
            let col = LeafColumn::new(format!("col{i}")).size(80.0 + (i % 7) as f64 * 10.0);
            match i % 10 {
                0 => col.pinned(PinnedPosition::Left),
                5 => col.pinned(PinnedPosition::Right),
                _ => col,
            }
        })
        .collect();

    let state: ColumnSizingState = (0..n)
        .filter(|i| i % 3 == 0)
        .map(|i| (format!("col{i}"), 120.0 + (i % 5) as f64))
        .collect();

    (columns, state)
}

/// Benchmark region totals over growing column counts
fn bench_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_size");
    for n in [100, 1_000, 10_000] {
        let (columns, state) = fixture(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("all", n), &n, |b, _| {
            b.iter(|| total_size(SizingRegion::All, black_box(&columns), black_box(&state)))
        });
        group.bench_with_input(BenchmarkId::new("center", n), &n, |b, _| {
            b.iter(|| total_size(SizingRegion::Center, black_box(&columns), black_box(&state)))
        });
    }
    group.finish();
}

/// Benchmark sticky start offsets for a column deep in the sequence
fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("start_offset");
    for n in [1_000, 10_000] {
        let (columns, state) = fixture(n);
        let target = format!("col{}", n - 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                start_offset(
                    black_box(&target),
                    SizingRegion::Center,
                    black_box(&columns),
                    black_box(&state),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_totals, bench_offsets);
criterion_main!(benches);
