//! Per-tick and per-run summaries.

use slither_core::TickId;

/// What happened during a single [`tick()`](crate::Simulation::tick).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that just completed.
    pub tick: TickId,
    /// Snakes that moved this tick.
    pub moved: u32,
    /// Snakes that became trapped this tick.
    pub newly_trapped: u32,
    /// Snakes still free after this tick.
    pub active: u32,
}

/// Why [`run()`](crate::Simulation::run) stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Every snake is trapped.
    AllTrapped,
    /// The tick count passed the configured step limit.
    StepLimit,
}

/// Summary of a [`run()`](crate::Simulation::run) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Ticks executed by this call.
    pub ticks: u64,
    /// Tick counter when the run stopped.
    pub final_tick: TickId,
    /// Why the loop ended.
    pub reason: StopReason,
}
