//! Slither: snakes random-walking on a shared grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Slither sub-crates. For most users, adding `slither` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slither::prelude::*;
//!
//! let config = SimConfig {
//!     xmax: 16,
//!     ymax: 16,
//!     topology: Topology::Periodic,
//!     step_limit: 100,
//!     snakes: vec![
//!         SnakeSpec::new((4, 4), 3, Direction::North),
//!         SnakeSpec::parse((12, 8), 5, "west").unwrap(),
//!     ],
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let report = sim.tick();
//! assert_eq!(report.tick, TickId(1));
//!
//! let outcome = sim.run();
//! assert!(outcome.final_tick.0 <= 101);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slither-core` | Cells, directions, IDs, snake errors |
//! | [`space`] | `slither-space` | Planes, topology, occupancy, drawable segments |
//! | [`engine`] | `slither-engine` | Snakes, configuration, the simulation loop, observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`slither-core`).
///
/// [`types::Cell`], [`types::Direction`] and the ID newtypes.
pub use slither_core as types;

/// Grid geometry (`slither-space`).
///
/// [`space::Plane`] resolves moves under a [`space::Topology`];
/// [`space::Occupancy`] records which cells are covered.
pub use slither_space as space;

/// Snakes and the step loop (`slither-engine`).
///
/// Build a [`engine::SimConfig`], hand it to [`engine::Simulation`], and
/// attach an [`engine::Observer`] to watch the run.
pub use slither_engine as engine;

/// Common imports for typical Slither usage.
///
/// ```rust
/// use slither::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use slither_core::{Cell, Direction, SnakeId, TickId};

    // Space
    pub use slither_space::{Occupancy, Plane, Segment, Topology};

    // Engine
    pub use slither_engine::{
        Frame, Observer, RunOutcome, SimConfig, Simulation, Snake, SnakeSpec, StopReason,
        TickReport,
    };

    // Errors
    pub use slither_core::SnakeError;
    pub use slither_engine::ConfigError;
    pub use slither_space::SpaceError;
}
