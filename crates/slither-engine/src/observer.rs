//! Read-only observation of a running simulation.
//!
//! Renderers, recorders and loggers implement [`Observer`] and are handed a
//! [`Frame`] before the first tick and after every tick. A frame borrows the
//! simulation, so an observer can never mutate snake or grid state.

use slither_core::TickId;
use slither_space::{Plane, Segment};
use tracing::debug;

use crate::report::TickReport;
use crate::snake::Snake;

/// Snapshot of the world at one tick.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Tick the frame was taken at; `TickId(0)` is the initial placement.
    pub tick: TickId,
    /// Grid bounds and topology.
    pub plane: &'a Plane,
    /// Every snake, in movement order.
    pub snakes: &'a [Snake],
}

impl Frame<'_> {
    /// Drawable segments for each snake's trail, in snake order.
    pub fn segments(&self) -> Vec<Vec<Segment>> {
        self.snakes
            .iter()
            .map(|s| self.plane.segments(s.trail().iter().copied()))
            .collect()
    }

    /// Number of snakes not yet trapped.
    pub fn active_count(&self) -> usize {
        self.snakes.iter().filter(|s| !s.is_trapped()).count()
    }
}

/// Receives frames from [`Simulation::run_with`](crate::Simulation::run_with).
pub trait Observer {
    /// Called once with the initial placement, before any tick.
    fn on_start(&mut self, frame: &Frame<'_>) {
        let _ = frame;
    }

    /// Called after every tick.
    fn on_tick(&mut self, frame: &Frame<'_>, report: &TickReport);
}

impl Observer for () {
    fn on_tick(&mut self, _frame: &Frame<'_>, _report: &TickReport) {}
}

/// Observer that logs each tick at `debug` level through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_start(&mut self, frame: &Frame<'_>) {
        for s in frame.snakes {
            debug!(snake = %s.id(), head = %s.position(), length = s.length(), "initial placement");
        }
    }

    fn on_tick(&mut self, frame: &Frame<'_>, report: &TickReport) {
        debug!(
            tick = %frame.tick,
            moved = report.moved,
            newly_trapped = report.newly_trapped,
            active = report.active,
            "tick complete"
        );
    }
}
