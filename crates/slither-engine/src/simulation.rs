//! The step loop.
//!
//! [`Simulation`] is the primary user-facing API. It owns the plane, the
//! occupancy map and the snakes, and is the only place occupancy is
//! written. Each [`tick()`](Simulation::tick) walks the snakes in
//! collection order and commits each move before the next snake looks at
//! the map, so two snakes can never claim the same cell in one tick.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`; [`Frame`]s handed to observers
//! borrow `self` immutably. There are no background threads.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use slither_core::{SnakeId, TickId};
use slither_space::{Occupancy, Plane};
use tracing::{debug, info};

use crate::config::{ConfigError, SimConfig};
use crate::observer::{Frame, Observer};
use crate::report::{RunOutcome, StopReason, TickReport};
use crate::snake::{Advance, Snake};

/// A set of snakes random-walking on a shared plane.
///
/// # Example
///
/// ```
/// use slither_core::Direction;
/// use slither_engine::{SimConfig, Simulation, SnakeSpec, StopReason};
/// use slither_space::Topology;
///
/// let config = SimConfig {
///     xmax: 10,
///     ymax: 10,
///     topology: Topology::Periodic,
///     step_limit: 25,
///     snakes: vec![
///         SnakeSpec::new((2, 2), 3, Direction::North),
///         SnakeSpec::new((7, 7), 3, Direction::South),
///     ],
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// let outcome = sim.run();
/// assert!(outcome.ticks <= 26);
/// if outcome.reason == StopReason::StepLimit {
///     assert_eq!(outcome.ticks, 26);
/// }
/// ```
pub struct Simulation<R = ChaCha8Rng> {
    plane: Plane,
    occupancy: Occupancy,
    snakes: Vec<Snake>,
    step_limit: u64,
    tick: TickId,
    rng: R,
}

impl Simulation<ChaCha8Rng> {
    /// Build a simulation from `config`, seeding its generator from the
    /// thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation that draws directions from `rng`.
    ///
    /// Every initial trail cell is marked in the occupancy map, with its
    /// periodic aliases. Initial trails must not overlap; this is not
    /// checked.
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        let (plane, snakes) = config.build()?;
        let mut occupancy = Occupancy::new(plane);
        for snake in &snakes {
            for &cell in snake.trail() {
                occupancy.mark(cell);
            }
        }
        info!(
            snakes = snakes.len(),
            xmax = plane.xmax(),
            ymax = plane.ymax(),
            topology = plane.topology().name(),
            step_limit = config.step_limit,
            "simulation ready"
        );
        Ok(Self {
            plane,
            occupancy,
            snakes,
            step_limit: config.step_limit,
            tick: TickId(0),
            rng,
        })
    }

    /// Advance every free snake once, in collection order.
    ///
    /// For each snake that moves: mark the new head, free the vacated tail
    /// cell unless some trail still covers it, then re-mark the whole trail.
    /// The tick counter advances even if nothing moved.
    pub fn tick(&mut self) -> TickReport {
        let next = self.tick.next();
        let mut report = TickReport {
            tick: next,
            ..TickReport::default()
        };
        for i in 0..self.snakes.len() {
            match self.snakes[i].advance(&self.plane, &self.occupancy, &mut self.rng) {
                Advance::Idle => {}
                Advance::Trapped => {
                    report.newly_trapped += 1;
                    let s = &self.snakes[i];
                    debug!(snake = %s.id(), head = %s.position(), tick = %next, "snake trapped");
                }
                Advance::Moved { head, vacated } => {
                    report.moved += 1;
                    self.occupancy.mark(head);
                    if !self.snakes.iter().any(|s| s.covers(vacated)) {
                        self.occupancy.clear(vacated);
                    }
                    for &cell in self.snakes[i].trail() {
                        self.occupancy.mark(cell);
                    }
                }
            }
        }
        self.tick = next;
        report.active = self.active_count() as u32;
        report
    }

    /// Tick until every snake is trapped or the tick count passes the step
    /// limit. At most `step_limit + 1` ticks run.
    pub fn run(&mut self) -> RunOutcome {
        self.run_with(&mut ())
    }

    /// Like [`run`](Self::run), notifying `observer` before the first tick
    /// and after every tick.
    pub fn run_with<O>(&mut self, observer: &mut O) -> RunOutcome
    where
        O: Observer + ?Sized,
    {
        observer.on_start(&self.frame());
        let start = self.tick;
        while self.tick.0 <= self.step_limit && !self.all_trapped() {
            let report = self.tick();
            observer.on_tick(&self.frame(), &report);
        }
        let reason = if self.all_trapped() {
            StopReason::AllTrapped
        } else {
            StopReason::StepLimit
        };
        let outcome = RunOutcome {
            ticks: self.tick.0 - start.0,
            final_tick: self.tick,
            reason,
        };
        info!(
            ticks = outcome.ticks,
            final_tick = %outcome.final_tick,
            reason = ?outcome.reason,
            trapped = self.snakes.len() - self.active_count(),
            "run finished"
        );
        outcome
    }
}

impl<R> Simulation<R> {
    /// Read-only view of the current state.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tick: self.tick,
            plane: &self.plane,
            snakes: &self.snakes,
        }
    }

    /// Every snake, in movement order.
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// The snake with `id`, if it exists.
    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.get(id.index())
    }

    /// The shared occupancy map.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Grid bounds and topology.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Ticks completed so far.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Number of ticks completed, as a plain count.
    pub fn step_count(&self) -> u64 {
        self.tick.0
    }

    /// Configured step limit.
    pub fn step_limit(&self) -> u64 {
        self.step_limit
    }

    /// Whether every snake is trapped.
    pub fn all_trapped(&self) -> bool {
        self.snakes.iter().all(Snake::is_trapped)
    }

    /// Number of snakes still free to move.
    pub fn active_count(&self) -> usize {
        self.snakes.iter().filter(|s| !s.is_trapped()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnakeSpec;
    use slither_core::{Cell, Direction};
    use slither_space::Topology;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn sim(config: SimConfig, seed: u64) -> Simulation {
        Simulation::with_rng(config, ChaCha8Rng::seed_from_u64(seed)).unwrap()
    }

    fn single(xmax: i32, topology: Topology, spec: SnakeSpec) -> SimConfig {
        SimConfig {
            xmax,
            ymax: xmax,
            topology,
            step_limit: 10,
            snakes: vec![spec],
        }
    }

    #[test]
    fn construction_marks_initial_trails() {
        let cfg = SimConfig {
            xmax: 6,
            ymax: 6,
            topology: Topology::Bounded,
            step_limit: 10,
            snakes: vec![
                SnakeSpec::new((1, 3), 2, Direction::North),
                SnakeSpec::new((5, 5), 1, Direction::East),
            ],
        };
        let s = sim(cfg, 0);
        let occupied: Vec<Cell> = s.occupancy().occupied_cells().collect();
        assert_eq!(occupied, vec![c(1, 1), c(1, 2), c(1, 3), c(4, 5), c(5, 5)]);
        assert_eq!(s.tick_id(), TickId(0));
        assert_eq!(s.snake(SnakeId(1)).unwrap().position(), c(5, 5));
        assert!(s.snake(SnakeId(2)).is_none());
    }

    #[test]
    fn construction_marks_border_alias() {
        let cfg = single(5, Topology::Periodic, SnakeSpec::new((5, 3), 1, Direction::North));
        let s = sim(cfg, 0);
        assert_eq!(s.snakes()[0].position(), c(0, 3));
        assert_eq!(s.occupancy().label(c(0, 3)), Some(true));
        assert_eq!(s.occupancy().label(c(5, 3)), Some(true));
    }

    #[test]
    fn one_tick_scenario() {
        for seed in 0..32 {
            let cfg = single(4, Topology::Bounded, SnakeSpec::new((2, 2), 1, Direction::North));
            let mut s = sim(cfg, seed);
            let report = s.tick();
            assert_eq!(report.moved, 1);
            assert_eq!(report.tick, TickId(1));
            let snake = &s.snakes()[0];
            let trail: Vec<Cell> = snake.trail().iter().copied().collect();
            assert_eq!(trail[1], c(2, 2));
            assert!([c(2, 3), c(3, 2), c(1, 2)].contains(&trail[0]));
            assert!(!s.occupancy().is_occupied(c(2, 1)));
            assert!(s.occupancy().is_occupied(trail[0]));
            assert_eq!(s.occupancy().occupied_count(), 2);
        }
    }

    #[test]
    fn earlier_snake_claims_contested_cell() {
        // Both heads can only reach (2, 2); snake 0 moves first and takes it.
        let cfg = SimConfig {
            xmax: 4,
            ymax: 2,
            topology: Topology::Bounded,
            step_limit: 10,
            snakes: vec![
                SnakeSpec::new((2, 1), 1, Direction::North),
                SnakeSpec::new((1, 2), 1, Direction::East),
                // Fence: blocks every other exit of both heads.
                SnakeSpec::new((1, 1), 1, Direction::North),
                SnakeSpec::new((3, 1), 1, Direction::North),
            ],
        };
        let mut s = sim(cfg, 3);
        // Snake 0: trail (2,1),(2,0); only exit is north to (2,2).
        // Snake 1: trail (1,2),(0,2); only exit is east to (2,2).
        let first = s.snakes()[0].legal_directions(s.plane(), s.occupancy());
        assert_eq!(first.as_slice(), &[Direction::North]);
        s.tick();
        assert_eq!(s.snakes()[0].position(), c(2, 2));
        assert!(s.snakes()[1].is_trapped());
    }

    #[test]
    fn run_stops_at_step_limit() {
        let cfg = SimConfig {
            xmax: 30,
            ymax: 30,
            topology: Topology::Periodic,
            step_limit: 5,
            snakes: vec![SnakeSpec::new((10, 10), 2, Direction::North)],
        };
        let mut s = sim(cfg, 11);
        let outcome = s.run();
        assert_eq!(outcome.reason, StopReason::StepLimit);
        assert_eq!(outcome.ticks, 6);
        assert_eq!(outcome.final_tick, TickId(6));
        assert_eq!(s.step_count(), 6);

        // The ceiling applies to the simulation's lifetime.
        assert_eq!(s.run().ticks, 0);
    }

    #[test]
    fn run_stops_when_all_trapped() {
        // A 1x2 bounded grid fully covered by one snake can never move.
        let cfg = SimConfig {
            xmax: 0,
            ymax: 1,
            topology: Topology::Bounded,
            step_limit: 100,
            snakes: vec![SnakeSpec::new((0, 1), 1, Direction::North)],
        };
        let mut s = sim(cfg, 0);
        let outcome = s.run();
        assert_eq!(outcome.reason, StopReason::AllTrapped);
        assert_eq!(outcome.ticks, 1);
        assert!(s.all_trapped());
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn simulation_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Simulation>();
    }

    struct Counter {
        started: bool,
        ticks: Vec<TickId>,
    }

    impl Observer for Counter {
        fn on_start(&mut self, frame: &Frame<'_>) {
            assert_eq!(frame.tick, TickId(0));
            self.started = true;
        }

        fn on_tick(&mut self, frame: &Frame<'_>, report: &TickReport) {
            assert_eq!(frame.tick, report.tick);
            self.ticks.push(report.tick);
        }
    }

    #[test]
    fn observer_sees_every_tick() {
        let cfg = single(9, Topology::Bounded, SnakeSpec::new((4, 4), 2, Direction::West));
        let mut s = sim(cfg, 5);
        let mut obs = Counter {
            started: false,
            ticks: Vec::new(),
        };
        let outcome = s.run_with(&mut obs);
        assert!(obs.started);
        assert_eq!(obs.ticks.len() as u64, outcome.ticks);
        assert_eq!(obs.ticks.first(), Some(&TickId(1)));
    }
}
