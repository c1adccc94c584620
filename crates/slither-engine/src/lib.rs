//! Simulation engine for random-walking snakes.
//!
//! A [`Simulation`] owns a [`Plane`](slither_space::Plane), the shared
//! [`Occupancy`](slither_space::Occupancy) map and an ordered collection of
//! [`Snake`]s. Each [`tick()`](Simulation::tick) moves every free snake one
//! cell in a uniformly random legal direction, in collection order, until
//! [`run()`](Simulation::run) sees every snake trapped or the step limit
//! reached. Renderers and other consumers attach through [`Observer`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod observer;
pub mod report;
pub mod simulation;
pub mod snake;

pub use config::{ConfigError, SimConfig, SnakeSpec};
pub use observer::{Frame, Observer, TraceObserver};
pub use report::{RunOutcome, StopReason, TickReport};
pub use simulation::Simulation;
pub use snake::{Advance, Appearance, Snake};
