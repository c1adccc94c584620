//! Test utilities for Slither development.
//!
//! Provides seeded simulation builders, a frame-recording [`Observer`], and
//! assertion helpers that check the engine's occupancy and trail invariants
//! after any tick.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{crowded_config, periodic_pair, single_snake};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slither_core::{Cell, Direction, SnakeId, TickId};
use slither_engine::{Frame, Observer, SimConfig, Simulation, TickReport};

/// Deterministic generator for reproducible runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a simulation from `config` with a seeded generator.
///
/// # Panics
///
/// Panics if the configuration is invalid.
pub fn seeded_sim(config: SimConfig, seed: u64) -> Simulation<ChaCha8Rng> {
    match Simulation::with_rng(config, seeded_rng(seed)) {
        Ok(sim) => sim,
        Err(e) => panic!("fixture config rejected: {e}"),
    }
}

// ── Invariant checks ────────────────────────────────────────────

/// Every raw label of the plane is marked iff the cell it names lies on
/// some snake's trail.
pub fn assert_occupancy_matches_trails<R>(sim: &Simulation<R>) {
    let plane = sim.plane();
    for x in 0..=plane.xmax() {
        for y in 0..=plane.ymax() {
            let label = Cell::new(x, y);
            let Some(canon) = plane.canonical(label) else {
                continue;
            };
            let covered = sim.snakes().iter().any(|s| s.covers(canon));
            assert_eq!(
                sim.occupancy().label(label),
                Some(covered),
                "tick {}: label {label} (cell {canon}) marked={:?} but covered={covered}",
                sim.tick_id(),
                sim.occupancy().label(label),
            );
        }
    }
}

/// No cell belongs to two trails, and no trail repeats a cell.
pub fn assert_trails_disjoint<R>(sim: &Simulation<R>) {
    let mut seen = std::collections::HashMap::new();
    for s in sim.snakes() {
        for &cell in s.trail() {
            if let Some(prev) = seen.insert(cell, s.id()) {
                panic!(
                    "tick {}: cell {cell} shared by snakes {prev} and {}",
                    sim.tick_id(),
                    s.id()
                );
            }
        }
    }
}

/// Every trail is `length + 1` cells, starts at the head, and each cell is
/// one step (possibly wrapped) from the next.
pub fn assert_trails_well_formed<R>(sim: &Simulation<R>) {
    let plane = sim.plane();
    for s in sim.snakes() {
        let trail = s.trail();
        assert_eq!(trail.len(), s.length() as usize + 1, "snake {} length", s.id());
        assert_eq!(trail[0], s.position(), "snake {} head", s.id());
        for (a, b) in trail.iter().zip(trail.iter().skip(1)) {
            let adjacent = Direction::ALL
                .into_iter()
                .any(|d| plane.step(*a, d) == Some(*b));
            assert!(adjacent, "snake {}: {a} and {b} are not adjacent", s.id());
        }
    }
}

/// All of the above.
pub fn assert_invariants<R>(sim: &Simulation<R>) {
    assert_trails_well_formed(sim);
    assert_trails_disjoint(sim);
    assert_occupancy_matches_trails(sim);
}

// ── Recording observer ──────────────────────────────────────────

/// One snake's state in a recorded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeRecord {
    pub id: SnakeId,
    pub head: Cell,
    pub trail: Vec<Cell>,
    pub trapped: bool,
}

/// Observer that keeps a copy of every frame it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub frames: Vec<(TickId, Vec<SnakeRecord>)>,
    pub reports: Vec<TickReport>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, frame: &Frame<'_>) {
        let snakes = frame
            .snakes
            .iter()
            .map(|s| SnakeRecord {
                id: s.id(),
                head: s.position(),
                trail: s.trail().iter().copied().collect(),
                trapped: s.is_trapped(),
            })
            .collect();
        self.frames.push((frame.tick, snakes));
    }
}

impl Observer for RecordingObserver {
    fn on_start(&mut self, frame: &Frame<'_>) {
        self.record(frame);
    }

    fn on_tick(&mut self, frame: &Frame<'_>, report: &TickReport) {
        self.record(frame);
        self.reports.push(*report);
    }
}
