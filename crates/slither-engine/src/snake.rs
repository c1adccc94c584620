//! A single fixed-length snake performing a random walk.
//!
//! A snake only *reads* the occupancy map: [`Snake::advance`] picks a legal
//! direction, moves the head and rotates the trail, then reports the cell
//! that fell off the tail. Committing that change to the map is the
//! [`Simulation`](crate::Simulation)'s job.

use std::collections::VecDeque;

use rand::prelude::*;
use slither_core::{Cell, Direction, DirectionSet, SnakeError, SnakeId};
use slither_space::{Occupancy, Plane, SpaceError};
use smallvec::SmallVec;

/// Presentation attributes, passed through untouched by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    /// Marker drawn at the head.
    pub symbol: char,
    /// Colour name or code understood by the renderer.
    pub color: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            symbol: 'o',
            color: "b".to_string(),
        }
    }
}

/// What happened to a snake when it was asked to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The head moved to `head`; `vacated` fell off the end of the trail.
    Moved {
        /// New head cell.
        head: Cell,
        /// Former tail cell, no longer part of this snake.
        vacated: Cell,
    },
    /// No legal direction existed; the snake is now trapped.
    Trapped,
    /// The snake was already trapped and did nothing.
    Idle,
}

/// A snake: a head plus `length` trailing cells, moved as one body.
#[derive(Clone, Debug)]
pub struct Snake {
    id: SnakeId,
    position: Cell,
    direction: Direction,
    length: u32,
    trail: VecDeque<Cell>,
    trapped: bool,
    appearance: Appearance,
}

impl Snake {
    /// Create a snake with its head at `head`, facing `direction`.
    ///
    /// The initial trail is the head followed by `length` cells laid out
    /// straight behind it. Coordinates are taken as given; they are checked
    /// against a plane when the snake joins a simulation.
    ///
    /// Returns `Err(SnakeError::ZeroLength)` if `length` is zero, and
    /// `Err(SnakeError::TrailOverflow)` if the tail would fall outside the
    /// `i32` coordinate range. The trail is allocated in full, so callers
    /// building from untrusted input should go through
    /// [`SimConfig`](crate::SimConfig), which bounds `length` by the plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_core::{Cell, Direction};
    /// use slither_engine::Snake;
    ///
    /// let s = Snake::new(Cell::new(2, 2), 1, Direction::North).unwrap();
    /// assert_eq!(s.trail().iter().copied().collect::<Vec<_>>(),
    ///            vec![Cell::new(2, 2), Cell::new(2, 1)]);
    /// ```
    pub fn new(head: Cell, length: u32, direction: Direction) -> Result<Self, SnakeError> {
        if length == 0 {
            return Err(SnakeError::ZeroLength { head });
        }
        let overflow = || SnakeError::TrailOverflow { head, length };
        let steps = i32::try_from(length).map_err(|_| overflow())?;
        // Coordinates move monotonically, so checking the tail covers the body.
        head.behind(direction, steps).ok_or_else(overflow)?;
        let trail = (0..=steps)
            .map(|i| head.behind(direction, i))
            .collect::<Option<VecDeque<_>>>()
            .ok_or_else(overflow)?;
        Ok(Self {
            id: SnakeId(0),
            position: head,
            direction,
            length,
            trail,
            trapped: false,
            appearance: Appearance::default(),
        })
    }

    /// Like [`new`](Self::new), with the direction given as a label such as
    /// `"north"`.
    ///
    /// An unrecognized label is reported as
    /// [`SnakeError::InvalidDirection`] naming the head position.
    pub fn from_label(head: Cell, length: u32, label: &str) -> Result<Self, SnakeError> {
        let direction = label
            .parse::<Direction>()
            .map_err(|e| SnakeError::InvalidDirection {
                head,
                label: e.label,
            })?;
        Self::new(head, length, direction)
    }

    /// Replace the presentation attributes.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub(crate) fn with_id(mut self, id: SnakeId) -> Self {
        self.id = id;
        self
    }

    /// Validate every cell against `plane` and rewrite them in canonical form.
    ///
    /// Returns the first offending cell's error on a bounded plane. Periodic
    /// planes wrap instead of failing.
    pub fn place(&mut self, plane: &Plane) -> Result<(), SpaceError> {
        for cell in self.trail.iter_mut() {
            *cell = plane.check_cell(*cell)?;
        }
        if let Some(&head) = self.trail.front() {
            self.position = head;
        }
        Ok(())
    }

    /// Identifier assigned by the owning simulation.
    pub fn id(&self) -> SnakeId {
        self.id
    }

    /// Current head cell.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Direction of the last move (or the initial facing).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of trailing cells behind the head.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Occupied cells, head first; always `length + 1` long.
    pub fn trail(&self) -> &VecDeque<Cell> {
        &self.trail
    }

    /// Whether `cell` is part of this snake's trail.
    pub fn covers(&self, cell: Cell) -> bool {
        self.trail.contains(&cell)
    }

    /// Whether the snake has been trapped. Never reverts.
    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    /// Presentation attributes.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Legal moves from the current head, as `(direction, destination)`.
    fn legal_moves(
        &self,
        plane: &Plane,
        occupancy: &Occupancy,
    ) -> SmallVec<[(Direction, Cell); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| plane.step(self.position, d).map(|dest| (d, dest)))
            .filter(|&(_, dest)| !occupancy.is_occupied(dest))
            .collect()
    }

    /// Directions the head may move in, in [`Direction::ALL`] order.
    ///
    /// A direction is excluded if it runs into a wall of a bounded plane or
    /// if its destination is occupied. Occupancy is read as it stands, so
    /// the snake's own body (tail included) blocks it.
    pub fn legal_directions(&self, plane: &Plane, occupancy: &Occupancy) -> DirectionSet {
        self.legal_moves(plane, occupancy)
            .into_iter()
            .map(|(d, _)| d)
            .collect()
    }

    /// Make one move.
    ///
    /// Picks a direction uniformly at random among the legal ones, steps the
    /// head and rotates the trail so its length stays constant. With no
    /// legal direction the snake becomes trapped for good; a trapped snake
    /// ignores further calls.
    pub fn advance<R>(&mut self, plane: &Plane, occupancy: &Occupancy, rng: &mut R) -> Advance
    where
        R: Rng + ?Sized,
    {
        if self.trapped {
            return Advance::Idle;
        }
        let moves = self.legal_moves(plane, occupancy);
        let Some(&(direction, head)) = moves.choose(rng) else {
            self.trapped = true;
            return Advance::Trapped;
        };
        self.direction = direction;
        self.position = head;
        // Rotate the tail to the front and overwrite it with the new head.
        self.trail.rotate_right(1);
        let vacated = std::mem::replace(&mut self.trail[0], head);
        Advance::Moved { head, vacated }
    }
}
