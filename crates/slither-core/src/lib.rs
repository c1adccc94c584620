//! Core types for the Slither simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: grid [`Cell`]s, the four cardinal
//! [`Direction`]s, strongly-typed IDs, and the snake-level error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod id;

pub use cell::Cell;
pub use direction::{Direction, DirectionSet};
pub use error::{ParseDirectionError, SnakeError};
pub use id::{SnakeId, TickId};
