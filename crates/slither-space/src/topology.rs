//! Edge behavior of the plane.

/// How a [`Plane`](crate::Plane) treats moves that leave its edges.
///
/// # Examples
///
/// ```
/// use slither_core::{Cell, Direction};
/// use slither_space::{Plane, Topology};
///
/// // Bounded: the edge is a wall.
/// let walls = Plane::new(4, 4, Topology::Bounded).unwrap();
/// assert_eq!(walls.step(Cell::new(4, 2), Direction::East), None);
///
/// // Periodic: the edge wraps (period 4 on each axis).
/// let torus = Plane::new(4, 4, Topology::Periodic).unwrap();
/// assert_eq!(torus.step(Cell::new(0, 2), Direction::West), Some(Cell::new(3, 2)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Edges are impassable walls; coordinates stay within `[0, max]`.
    #[default]
    Bounded,
    /// Edges wrap seamlessly (torus); coordinates are taken modulo `max`.
    Periodic,
}

impl Topology {
    /// Lower-case name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Topology::Bounded => "bounded",
            Topology::Periodic => "periodic",
        }
    }
}
