// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks for the knot hash, grid assembly and region counting.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use knot_grid::grid::{build_grid, count_regions};
use knot_grid::knot::{knot_hash, KnotHasher};

fn bench_knot_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_hash");
    group.throughput(Throughput::Elements(1));

    group.bench_function("fresh", |b| {
        b.iter(|| black_box(knot_hash(black_box("flqrgnkx-0"))));
    });

    let mut hasher = KnotHasher::new();
    group.bench_function("reused_buffer", |b| {
        b.iter(|| black_box(hasher.hash(black_box("flqrgnkx-0"))));
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.sample_size(20);

    group.bench_function("build_128_rows", |b| {
        b.iter(|| black_box(build_grid(black_box("flqrgnkx"), 128)));
    });

    let assembled = build_grid("flqrgnkx", 128);
    group.bench_function("count_regions", |b| {
        b.iter(|| black_box(count_regions(black_box(&assembled.grid))));
    });

    group.finish();
}

criterion_group!(benches, bench_knot_hash, bench_grid);
criterion_main!(benches);
