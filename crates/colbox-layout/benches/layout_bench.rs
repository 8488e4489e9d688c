//! Solver benchmarks for colbox-layout.
//!
//! Benchmarks the two-pass width distribution on its own and the full
//! measure/solve/apply loop through a static viewport:
//! - Direct solve at increasing column counts
//! - Mixed fixed/proportional rows with margins
//! - Driven layout (measurement + solve) per frame
//!
//! Run with: cargo bench -p colbox-layout --bench layout_bench

use colbox_core::geometry::{Edges, Size};
use colbox_layout::{Column, ColumnLayout, Container, StaticViewport, solve_columns};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Alternate fixed and proportional columns, margins on every third one.
fn make_row(count: usize) -> Vec<Column> {
    (0..count)
        .map(|i| {
            let column = if i % 2 == 0 {
                Column::fixed(40 + (i as i32 % 7) * 10)
            } else {
                Column::proportional(1.0 / count as f64)
            };
            if i % 3 == 0 {
                column.margins(Edges::horizontal_only(4))
            } else {
                column
            }
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_columns");
    for count in [2usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let columns = make_row(count);
            b.iter_batched(
                || columns.clone(),
                |mut columns| {
                    solve_columns(black_box(1280), 19, &mut columns);
                    columns
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_driven_layout(c: &mut Criterion) {
    c.bench_function("layout_static_viewport_16_columns", |b| {
        let layout = ColumnLayout::new().scroll_reserve(19);
        let viewport = StaticViewport::new(Size::new(1280, 800));
        b.iter_batched(
            || Container::with_columns(viewport, make_row(16)),
            |mut container| {
                layout.layout(&mut container).unwrap();
                container
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_driven_layout);
criterion_main!(benches);
