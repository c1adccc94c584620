//! Error types for plane construction and cell validation.

use slither_core::Cell;
use std::fmt;

/// Errors arising from plane construction or cell validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// The requested bounds cannot form a grid under the chosen topology.
    InvalidBounds {
        /// Requested maximum x coordinate.
        xmax: i32,
        /// Requested maximum y coordinate.
        ymax: i32,
        /// What went wrong.
        reason: &'static str,
    },
    /// A cell lies outside a bounded plane.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { xmax, ymax, reason } => {
                write!(f, "invalid bounds ({xmax}, {ymax}): {reason}")
            }
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
