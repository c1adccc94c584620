//! Grid cell coordinates.

use std::fmt;

use crate::direction::Direction;

/// An integer grid coordinate `(x, y)`.
///
/// `x` grows eastward and `y` grows northward. Coordinates are signed so
/// that a trail derived backwards from a head near the origin can be
/// represented before it is validated or wrapped by the owning plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one unit step along `direction`, without any bounds handling.
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The cell `steps` unit steps *against* `direction`.
    ///
    /// Used to lay out an initial trail behind a head that faces `direction`.
    /// Returns `None` if a coordinate would leave the `i32` range.
    pub fn behind(self, direction: Direction, steps: i32) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_sub(dx.checked_mul(steps)?)?;
        let y = self.y.checked_sub(dy.checked_mul(steps)?)?;
        Some(Self::new(x, y))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_direction_delta() {
        let c = Cell::new(2, 2);
        assert_eq!(c.offset(Direction::North), Cell::new(2, 3));
        assert_eq!(c.offset(Direction::East), Cell::new(3, 2));
        assert_eq!(c.offset(Direction::South), Cell::new(2, 1));
        assert_eq!(c.offset(Direction::West), Cell::new(1, 2));
    }

    #[test]
    fn behind_walks_against_direction() {
        let c = Cell::new(10, 10);
        assert_eq!(c.behind(Direction::North, 3), Some(Cell::new(10, 7)));
        assert_eq!(c.behind(Direction::West, 2), Some(Cell::new(12, 10)));
        assert_eq!(c.behind(Direction::East, 0), Some(c));
    }

    #[test]
    fn behind_may_go_negative() {
        assert_eq!(
            Cell::new(0, 1).behind(Direction::North, 3),
            Some(Cell::new(0, -2))
        );
    }

    #[test]
    fn behind_reports_coordinate_overflow() {
        assert_eq!(Cell::new(2, i32::MIN).behind(Direction::North, 1), None);
        assert_eq!(Cell::new(i32::MAX, 0).behind(Direction::West, 1), None);
        assert_eq!(
            Cell::new(0, 0).behind(Direction::South, i32::MAX),
            Some(Cell::new(0, i32::MAX))
        );
        assert_eq!(Cell::new(0, 1).behind(Direction::South, i32::MAX), None);
    }

    #[test]
    fn tuple_round_trip_and_display() {
        let c: Cell = (4, -1).into();
        assert_eq!(<(i32, i32)>::from(c), (4, -1));
        assert_eq!(c.to_string(), "(4, -1)");
    }
}
