//! Benchmarks for the placement solvers.
//!
//! Run with: cargo bench -p tilegrid-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilegrid_layout::{Element, GridOptions, Span, generate_valid_positions, is_valid, layout_elements};

/// A balanced set occupying every sixth slot with a full-width element.
fn make_elements(count: usize) -> Vec<Element> {
    (0..count).map(|i| Element::new(i * 6, Span::THREE)).collect()
}

fn bench_valid_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/valid_positions");

    for positions in [12usize, 24, 48, 96] {
        let elements = make_elements(positions / 6);
        group.bench_with_input(
            BenchmarkId::from_parameter(positions),
            &positions,
            |b, &positions| b.iter(|| black_box(generate_valid_positions(&elements, positions))),
        );
    }

    group.finish();
}

fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/is_valid");

    for positions in [12usize, 48, 192] {
        let elements = make_elements(positions / 6);
        let opts = GridOptions::three_column(positions);
        let candidate = Element::new(1, Span::THREE);
        group.bench_with_input(
            BenchmarkId::from_parameter(positions),
            &candidate,
            |b, candidate| b.iter(|| black_box(is_valid(candidate, &elements, &opts))),
        );
    }

    group.finish();
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/materialize");

    for positions in [12usize, 96, 384] {
        let elements = make_elements(positions / 6);
        let opts = GridOptions::three_column(positions);
        group.bench_with_input(
            BenchmarkId::from_parameter(positions),
            &opts,
            |b, opts| b.iter(|| black_box(layout_elements(&elements, opts))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_valid_positions, bench_is_valid, bench_materialize);
criterion_main!(benches);
