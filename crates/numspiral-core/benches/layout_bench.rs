//! Benchmarks for spiral layouts
//!
//! Measures performance of:
//! - Layout construction (inner ring chain)
//! - Row production
//! - Random cell access
//! - Text rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numspiral_core::{Renderer, SpiralLayout};

const COUNTS: [i64; 5] = [9, 121, 10_201, 1_002_001, 100_020_001];

/// Benchmark building the nested layout chain
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| SpiralLayout::new(black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark producing the middle row, the deepest walk into the chain
fn bench_middle_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_row");

    for &n in &COUNTS {
        let layout = SpiralLayout::new(n).unwrap();
        let middle = layout.order() / 2;
        group.throughput(Throughput::Elements(layout.order()));
        group.bench_with_input(BenchmarkId::from_parameter(n), &layout, |b, layout| {
            b.iter(|| layout.row_at(black_box(middle)))
        });
    }
    group.finish();
}

/// Benchmark single cell lookups
fn bench_cell_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_at");

    for &n in &COUNTS {
        let layout = SpiralLayout::new(n).unwrap();
        let center = layout.order() / 2;
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &layout, |b, layout| {
            b.iter(|| layout.cell_at(black_box(center), black_box(center)))
        });
    }
    group.finish();
}

/// Benchmark rendering whole grids to text
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = Renderer::default();

    for &n in &COUNTS[..4] {
        let layout = SpiralLayout::new(n).unwrap();
        group.throughput(Throughput::Elements(layout.capacity()));
        group.bench_with_input(BenchmarkId::from_parameter(n), &layout, |b, layout| {
            b.iter(|| renderer.render(black_box(layout)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_middle_row,
    bench_cell_at,
    bench_render,
);

criterion_main!(benches);
