//! The four cardinal movement directions.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::ParseDirectionError;

/// A set of directions, at most four, kept in [`Direction::ALL`] order.
pub type DirectionSet = SmallVec<[Direction; 4]>;

/// Cardinal direction of travel for a snake head.
///
/// # Examples
///
/// ```
/// use slither_core::Direction;
///
/// assert_eq!(Direction::North.delta(), (0, 1));
/// assert_eq!("West".parse::<Direction>().unwrap(), Direction::West);
/// assert!("up".parse::<Direction>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Toward increasing `y`.
    North = 0,
    /// Toward increasing `x`.
    East = 1,
    /// Toward decreasing `y`.
    South = 2,
    /// Toward decreasing `x`.
    West = 3,
}

impl Direction {
    /// Every direction, in the fixed order used for legal-move sets.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` unit offset for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Lower-case label, as accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
