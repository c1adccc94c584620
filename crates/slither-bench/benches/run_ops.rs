//! Criterion benchmarks for ticking and full runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use slither_bench::{crowded_scenario, stardust_scenario};
use slither_core::{Cell, Direction};
use slither_engine::Simulation;
use slither_space::{Occupancy, Plane, Topology};
use slither_test_utils::{seeded_rng, seeded_sim};

/// Benchmark: one tick of the six-snake torus scenario.
fn bench_tick_stardust(c: &mut Criterion) {
    let mut sim = seeded_sim(stardust_scenario(), 42);
    c.bench_function("tick_stardust", |b| {
        b.iter(|| {
            // Rebuild once everyone is stuck so each iteration does real work.
            if sim.all_trapped() {
                sim = seeded_sim(stardust_scenario(), 42);
            }
            black_box(sim.tick());
        });
    });
}

/// Benchmark: a full 400-step run of the six-snake torus scenario.
fn bench_run_stardust(c: &mut Criterion) {
    c.bench_function("run_stardust_400", |b| {
        b.iter_batched(
            || seeded_sim(stardust_scenario(), 7),
            |mut sim| black_box(sim.run()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: a full run of 100 snakes on a crowded bounded grid.
fn bench_run_crowded(c: &mut Criterion) {
    c.bench_function("run_crowded_100", |b| {
        b.iter_batched(
            || Simulation::with_rng(crowded_scenario(100), seeded_rng(3)).unwrap(),
            |mut sim| black_box(sim.run()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: mark then clear every label of a 100x100 torus.
fn bench_occupancy_churn(c: &mut Criterion) {
    let plane = Plane::new(100, 100, Topology::Periodic).unwrap();
    let mut occ = Occupancy::new(plane);
    c.bench_function("occupancy_mark_clear_10k", |b| {
        b.iter(|| {
            for x in 0..100 {
                for y in 0..100 {
                    let cell = Cell::new(x, y);
                    occ.mark(cell);
                    black_box(occ.is_occupied(cell.offset(Direction::East)));
                    occ.clear(cell);
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tick_stardust,
    bench_run_stardust,
    bench_run_crowded,
    bench_occupancy_churn
);
criterion_main!(benches);
