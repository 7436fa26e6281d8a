//! Criterion micro-benchmarks for polygon area queries.
//!
//! Set `RUST_LOG=gridwork_area=debug` to see the engine build summaries.

use criterion::{criterion_group, criterion_main, Criterion};
use gridwork_area::AreaEngine;
use gridwork_bench::{query_corners, staircase_polygon};
use gridwork_test_utils::polygons;
use std::hint::black_box;

const STRIDE: i64 = 1_000_003;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Benchmark: Build an engine from a 500-step staircase with huge coordinates.
fn bench_build_staircase_500(c: &mut Criterion) {
    init_tracing();
    let path = staircase_polygon(500, STRIDE);

    c.bench_function("build_staircase_500", |b| {
        b.iter(|| black_box(AreaEngine::new(&path).unwrap()));
    });
}

/// Benchmark: 10K filled-area queries against the 500-step staircase.
fn bench_query_10k(c: &mut Criterion) {
    let engine = AreaEngine::new(&staircase_polygon(500, STRIDE)).unwrap();
    let corners = query_corners(10_000, 500 * STRIDE, 42);

    c.bench_function("query_filled_area_10k", |b| {
        b.iter(|| {
            for &(p, q) in &corners {
                black_box(engine.query_filled_area(p, q));
            }
        });
    });
}

/// Benchmark: Largest filled rectangle over a scaled tile loop.
fn bench_largest_rectangle_tile_loop(c: &mut Criterion) {
    let tiles = polygons::scale(&polygons::tile_loop(), 10_000);
    let engine = AreaEngine::new(&tiles).unwrap();

    c.bench_function("largest_rectangle_tile_loop", |b| {
        b.iter(|| black_box(engine.largest_filled_rectangle(tiles.iter().copied())));
    });
}

/// Benchmark: Largest filled rectangle over all 102 staircase vertices.
fn bench_largest_rectangle_staircase_50(c: &mut Criterion) {
    let path = staircase_polygon(50, STRIDE);
    let engine = AreaEngine::new(&path).unwrap();

    c.bench_function("largest_rectangle_staircase_50", |b| {
        b.iter(|| black_box(engine.largest_filled_rectangle(path.iter().copied())));
    });
}

criterion_group!(
    benches,
    bench_build_staircase_500,
    bench_query_10k,
    bench_largest_rectangle_tile_loop,
    bench_largest_rectangle_staircase_50
);
criterion_main!(benches);
