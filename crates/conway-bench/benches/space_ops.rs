//! Criterion micro-benchmarks for torus topology operations.

use std::hint::black_box;

use conway::prelude::*;
use conway_bench::reference_board;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: neighbours() on all 10K cells of a 100x100 torus.
fn bench_neighbours_torus_10k(c: &mut Criterion) {
    let torus = Torus::new(DEFAULT_DIM).unwrap();

    c.bench_function("neighbours_torus_10k", |b| {
        b.iter(|| {
            for addr in torus.canonical_ordering() {
                black_box(torus.neighbours(addr));
            }
        });
    });
}

/// Benchmark: living_neighbours() on all 10K cells of the reference board.
fn bench_living_neighbours_10k(c: &mut Criterion) {
    let board = reference_board(42);
    let torus = Torus::of(&board);

    c.bench_function("living_neighbours_10k", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for addr in torus.canonical_ordering() {
                total += u32::from(living_neighbours(&board, addr));
            }
            black_box(total)
        });
    });
}

/// Benchmark: wrap() across the full offset range on every column.
fn bench_wrap_10k(c: &mut Criterion) {
    let torus = Torus::new(DEFAULT_DIM).unwrap();

    c.bench_function("wrap_10k", |b| {
        b.iter(|| {
            for coord in 0..DEFAULT_DIM {
                for offset in -50i32..50 {
                    black_box(torus.wrap(coord, offset));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_torus_10k,
    bench_living_neighbours_10k,
    bench_wrap_10k,
);
criterion_main!(benches);
