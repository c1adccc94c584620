//! Six snakes wandering a 30x30 torus, printed as text.
//!
//! Prints the grid every 50 ticks and once more when the run ends. Set
//! `RUST_LOG=debug` to see per-tick and trapping events.

use slither_bench::{ascii_frame, stardust_scenario};
use slither_engine::{Frame, Observer, Simulation, TickReport, TraceObserver};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints a frame every `every` ticks and forwards everything to the
/// tracing observer.
struct Printer {
    every: u64,
    trace: TraceObserver,
}

impl Observer for Printer {
    fn on_start(&mut self, frame: &Frame<'_>) {
        self.trace.on_start(frame);
        println!("tick {}\n{}", frame.tick, ascii_frame(frame));
    }

    fn on_tick(&mut self, frame: &Frame<'_>, report: &TickReport) {
        self.trace.on_tick(frame, report);
        if frame.tick.0 % self.every == 0 || frame.active_count() == 0 {
            println!(
                "tick {} ({} active)\n{}",
                frame.tick,
                report.active,
                ascii_frame(frame)
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sim = match Simulation::new(stardust_scenario()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("invalid scenario: {e}");
            std::process::exit(1);
        }
    };
    let mut printer = Printer {
        every: 50,
        trace: TraceObserver,
    };
    let outcome = sim.run_with(&mut printer);

    println!("final\n{}", ascii_frame(&sim.frame()));
    info!(
        ticks = outcome.ticks,
        reason = ?outcome.reason,
        trapped = sim.snakes().len() - sim.active_count(),
        "done"
    );
    for s in sim.snakes() {
        println!(
            "snake {} [{}] head {} facing {}{}",
            s.id(),
            s.appearance().color,
            s.position(),
            s.direction(),
            if s.is_trapped() { " (trapped)" } else { "" }
        );
    }
}
