//! Visible-range computation benchmarks for O(log n) verification.
//!
//! The window query runs on every coalesced scroll event; it must stay
//! sub-microsecond even with 100k items so fast scrolling never janks.
//!
//! Run with: cargo bench --bench window_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use cardgrid::config::Metrics;
use cardgrid::layout::window;
use cardgrid::layout::{Overscan, RowModel, ViewMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_window_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_range_scaling");
    let metrics = Metrics::default();
    let overscan = Overscan::default();

    // Logarithmic scaling: 10x the items should cost far less than 10x.
    for count in [1_000usize, 10_000, 100_000] {
        let model = RowModel::build(count, Some(count / 2), 9, &metrics, ViewMode::Grid, 800);
        let mid_scroll = model.content_height() / 2;

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                black_box(window::compute(
                    &model,
                    black_box(mid_scroll),
                    800,
                    overscan,
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_scroll_sweep(c: &mut Criterion) {
    let metrics = Metrics::default();
    let model = RowModel::build(100_000, None, 9, &metrics, ViewMode::Grid, 800);
    let max_scroll = model.content_height().saturating_sub(800);
    let overscan = Overscan::default();

    // Simulates a fast flick: every query lands on a different offset, so
    // memoization never helps and the raw computation cost shows.
    c.bench_function("scroll_sweep_uncached", |b| {
        let mut offset = 0usize;
        b.iter(|| {
            offset = (offset + 1_237) % max_scroll;
            black_box(window::compute(&model, black_box(offset), 800, overscan))
        });
    });
}

criterion_group!(benches, benchmark_window_scaling, benchmark_scroll_sweep);
criterion_main!(benches);
