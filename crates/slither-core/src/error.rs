//! Error types for snake construction.
//!
//! Grid- and configuration-level errors live in `slither-space` and
//! `slither-engine`; this module covers what can go wrong when describing a
//! single snake.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;

/// A direction label that is not one of `north`, `east`, `south`, `west`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The label that failed to parse.
    pub label: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized direction '{}' (expected north, east, south or west)",
            self.label
        )
    }
}

impl Error for ParseDirectionError {}

/// Errors from constructing a snake.
///
/// Every variant carries the head position the snake was configured with,
/// so a bad entry in a scenario can be located.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// The initial direction label was not recognized.
    InvalidDirection {
        /// Configured head position.
        head: Cell,
        /// The offending label.
        label: String,
    },
    /// The snake was given a length of zero trailing segments.
    ZeroLength {
        /// Configured head position.
        head: Cell,
    },
    /// The initial trail would leave the `i32` coordinate range.
    TrailOverflow {
        /// Configured head position.
        head: Cell,
        /// Configured length.
        length: u32,
    },
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { head, label } => {
                write!(f, "invalid direction '{label}' for snake at head position {head}")
            }
            Self::ZeroLength { head } => {
                write!(f, "snake at head position {head} must have a positive length")
            }
            Self::TrailOverflow { head, length } => write!(
                f,
                "snake at head position {head} with length {length} runs past the coordinate range"
            ),
        }
    }
}

impl Error for SnakeError {}
