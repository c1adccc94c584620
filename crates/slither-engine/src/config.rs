//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for constructing a [`Simulation`].
//! [`validate()`](SimConfig::validate) runs the same checks that
//! [`Simulation::new`] performs while building, and discards the result.
//!
//! Overlapping initial trails are **not** detected. Callers must place
//! snakes so that no two trails share a cell. A single trail that would
//! wrap onto itself is rejected as [`ConfigError::TrailTooLong`].
//!
//! [`Simulation`]: crate::Simulation
//! [`Simulation::new`]: crate::Simulation::new

use std::error::Error;
use std::fmt;

use slither_core::{Cell, Direction, SnakeError, SnakeId};
use slither_space::{Plane, SpaceError, Topology};

use crate::snake::{Appearance, Snake};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid bounds are unusable.
    Space(SpaceError),
    /// A snake description is invalid.
    Snake {
        /// Position of the snake in [`SimConfig::snakes`].
        index: usize,
        /// What was wrong with it.
        source: SnakeError,
    },
    /// A bounded plane cannot hold a snake's initial trail.
    TrailOutOfBounds {
        /// Position of the snake in [`SimConfig::snakes`].
        index: usize,
        /// First trail cell that falls off the plane.
        cell: Cell,
    },
    /// A straight initial trail of this length does not fit on its axis:
    /// it would leave a bounded plane or wrap onto itself on a periodic one.
    TrailTooLong {
        /// Position of the snake in [`SimConfig::snakes`].
        index: usize,
        /// Configured length.
        length: u32,
        /// Distinct cells on the snake's axis.
        axis_len: u32,
    },
    /// No snakes configured.
    NoSnakes,
    /// Snake count exceeds `u32::MAX` (`SnakeId` is `u32`).
    TooManySnakes {
        /// The configured count.
        count: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Snake { index, source } => write!(f, "snake {index}: {source}"),
            Self::TrailOutOfBounds { index, cell } => {
                write!(f, "snake {index}: initial trail cell {cell} is off the plane")
            }
            Self::TrailTooLong {
                index,
                length,
                axis_len,
            } => write!(
                f,
                "snake {index}: trail of {} cells does not fit on an axis of {axis_len} cells",
                u64::from(*length) + 1
            ),
            Self::NoSnakes => write!(f, "no snakes configured"),
            Self::TooManySnakes { count } => write!(f, "snake count {count} exceeds u32::MAX"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Snake { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SnakeSpec ──────────────────────────────────────────────────────

/// Initial placement of one snake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSpec {
    /// Head position.
    pub head: Cell,
    /// Trailing cells behind the head. Must be positive.
    pub length: u32,
    /// Initial facing; the trail is laid out behind it.
    pub direction: Direction,
    /// Passed through to renderers.
    pub appearance: Appearance,
}

impl SnakeSpec {
    /// A snake with the default appearance.
    pub fn new(head: impl Into<Cell>, length: u32, direction: Direction) -> Self {
        Self {
            head: head.into(),
            length,
            direction,
            appearance: Appearance::default(),
        }
    }

    /// A snake whose direction is given as a label such as `"west"`.
    pub fn parse(head: impl Into<Cell>, length: u32, label: &str) -> Result<Self, SnakeError> {
        let head = head.into();
        let direction = label
            .parse::<Direction>()
            .map_err(|e| SnakeError::InvalidDirection {
                head,
                label: e.label,
            })?;
        Ok(Self::new(head, length, direction))
    }

    /// Set the head symbol and colour.
    pub fn with_appearance(mut self, symbol: char, color: impl Into<String>) -> Self {
        self.appearance = Appearance {
            symbol,
            color: color.into(),
        };
        self
    }

    /// Build the snake and place it on `plane`.
    ///
    /// The head is resolved against the plane and the length checked
    /// against the axis before any trail is laid out.
    pub(crate) fn build(&self, index: usize, plane: &Plane) -> Result<Snake, ConfigError> {
        let head = plane
            .check_cell(self.head)
            .map_err(|_| ConfigError::TrailOutOfBounds {
                index,
                cell: self.head,
            })?;
        let axis_len = plane.axis_len(self.direction);
        if u64::from(self.length) >= u64::from(axis_len) {
            return Err(ConfigError::TrailTooLong {
                index,
                length: self.length,
                axis_len,
            });
        }
        let mut snake = Snake::new(head, self.length, self.direction)
            .map_err(|source| ConfigError::Snake { index, source })?
            .with_appearance(self.appearance.clone())
            .with_id(SnakeId(index as u32));
        snake.place(plane).map_err(|e| match e {
            SpaceError::CellOutOfBounds { cell, .. } => {
                ConfigError::TrailOutOfBounds { index, cell }
            }
            other => ConfigError::Space(other),
        })?;
        Ok(snake)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// # Examples
///
/// ```
/// use slither_core::Direction;
/// use slither_engine::{SimConfig, SnakeSpec};
/// use slither_space::Topology;
///
/// let config = SimConfig {
///     xmax: 4,
///     ymax: 4,
///     topology: Topology::Bounded,
///     step_limit: 50,
///     snakes: vec![SnakeSpec::new((2, 2), 1, Direction::North)],
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Maximum x coordinate (inclusive).
    pub xmax: i32,
    /// Maximum y coordinate (inclusive).
    pub ymax: i32,
    /// Edge behavior.
    pub topology: Topology,
    /// Ticks may run while the tick count is at most this value.
    pub step_limit: u64,
    /// Snakes in movement order. `SnakeId(n)` is `snakes[n]`.
    pub snakes: Vec<SnakeSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            xmax: 20,
            ymax: 20,
            topology: Topology::Bounded,
            step_limit: 400,
            snakes: Vec::new(),
        }
    }
}

impl SimConfig {
    /// The plane described by the bounds and topology.
    pub fn plane(&self) -> Result<Plane, ConfigError> {
        Ok(Plane::new(self.xmax, self.ymax, self.topology)?)
    }

    /// Validate all structural invariants.
    ///
    /// Checks, in order: the plane, that there is at least one snake, and
    /// every snake's length, plus (on bounded planes) that its initial
    /// trail fits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Validate and build the plane and snakes.
    pub(crate) fn build(&self) -> Result<(Plane, Vec<Snake>), ConfigError> {
        let plane = self.plane()?;
        if self.snakes.is_empty() {
            return Err(ConfigError::NoSnakes);
        }
        if u32::try_from(self.snakes.len()).is_err() {
            return Err(ConfigError::TooManySnakes {
                count: self.snakes.len(),
            });
        }
        let snakes = self
            .snakes
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.build(i, &plane))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((plane, snakes))
    }
}
