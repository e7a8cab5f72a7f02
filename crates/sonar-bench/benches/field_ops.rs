//! Criterion benchmarks for sound field propagation and navigation.

use criterion::{criterion_group, criterion_main, Criterion};
use sonar_bench::{centre_source, reference_profile};
use sonar_core::Coord3;
use sonar_engine::Pool;
use sonar_propagators::{Placement, SoundField, StepBudget, Submarine};
use sonar_space::VoxelGrid;
use sonar_test_utils::fixtures;
use std::hint::black_box;

fn bench_propagation(c: &mut Criterion, name: &str, enhanced: bool, parallel: bool) {
    let config = reference_profile(42).with_parallel(parallel);
    let source = centre_source(&config, enhanced);

    let mut group = c.benchmark_group("propagation");
    group.sample_size(10);
    group.bench_function(name, |b| {
        b.iter(|| {
            let mut pool = Pool::new(config.clone()).unwrap();
            let report = pool.add_sound_source(&source).unwrap();
            black_box(report);
        });
    });
    group.finish();
}

/// Benchmark: fallback-only propagation, sequential.
fn bench_propagation_fallback(c: &mut Criterion) {
    bench_propagation(c, "fallback_sequential", false, false);
}

/// Benchmark: fallback-only propagation on the rayon pool.
fn bench_propagation_fallback_parallel(c: &mut Criterion) {
    bench_propagation(c, "fallback_parallel", false, true);
}

/// Benchmark: full-volume candidate scan, sequential.
fn bench_propagation_enhanced(c: &mut Criterion) {
    bench_propagation(c, "enhanced_sequential", true, false);
}

/// Benchmark: full-volume candidate scan on the rayon pool.
fn bench_propagation_enhanced_parallel(c: &mut Criterion) {
    bench_propagation(c, "enhanced_parallel", true, true);
}

/// Benchmark: open-water 16^3 cube, fallback mode.
fn bench_propagation_open_cube(c: &mut Criterion) {
    let map = fixtures::flat(16, 16, 0);
    let field = SoundField::builder()
        .enhanced_realism(false)
        .build()
        .unwrap();

    c.bench_function("propagation_open_cube_16", |b| {
        b.iter(|| {
            let mut grid = VoxelGrid::new(16, &map).unwrap();
            black_box(field.emit(&mut grid, Coord3::new(8, 8, 8)).unwrap());
        });
    });
}

/// Benchmark: unlimited voyage from a far corner to the source.
fn bench_voyage_unlimited(c: &mut Criterion) {
    let config = reference_profile(42);
    let source = centre_source(&config, false);
    let mut pool = Pool::new(config).unwrap();
    pool.add_sound_source(&source).unwrap();
    let start = pool.add_agent(&Placement::random().with_x(0).with_y(0)).unwrap();

    c.bench_function("voyage_unlimited", |b| {
        b.iter(|| {
            let mut sub = Submarine::new(start);
            black_box(sub.voyage(pool.grid(), StepBudget::Unlimited).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_propagation_fallback,
    bench_propagation_fallback_parallel,
    bench_propagation_enhanced,
    bench_propagation_enhanced_parallel,
    bench_propagation_open_cube,
    bench_voyage_unlimited
);
criterion_main!(benches);
