//! Grid topology and occupancy for Slither simulations.
//!
//! A [`Plane`] is the `(xmax + 1) x (ymax + 1)` grid snakes walk on, with a
//! [`Topology`] that decides whether the edges are walls or wrap around.
//! The [`Occupancy`] map records which cells are covered by some trail.
//!
//! # Periodic cell identity
//!
//! Under [`Topology::Periodic`] each axis has period `max`: the labels `0`
//! and `max` name the same cell. Cells are always stored in canonical form
//! (`0..max`), and [`Occupancy`] keeps every label of a seam cell in sync
//! through [`Plane::aliases`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod occupancy;
pub mod plane;
pub mod segment;
pub mod topology;

pub use error::SpaceError;
pub use occupancy::Occupancy;
pub use plane::Plane;
pub use segment::Segment;
pub use topology::Topology;
