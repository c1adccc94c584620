//! The 2D grid snakes walk on.

use crate::error::SpaceError;
use crate::topology::Topology;
use slither_core::{Cell, Direction};
use smallvec::{smallvec, SmallVec};

/// A two-dimensional grid with inclusive bounds and a [`Topology`].
///
/// Raw coordinate labels span `0..=xmax` by `0..=ymax`, so the grid has
/// `(xmax + 1) * (ymax + 1)` labels. Under [`Topology::Bounded`] every label
/// is its own cell. Under [`Topology::Periodic`] each axis has period `max`
/// and the labels `0` and `max` alias the same cell; [`canonical`] maps
/// every coordinate into `0..max`.
///
/// [`canonical`]: Plane::canonical
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Plane {
    xmax: i32,
    ymax: i32,
    topology: Topology,
}

impl Plane {
    /// Largest accepted number of raw labels, `(xmax + 1) * (ymax + 1)`.
    ///
    /// The occupancy map stores one flag per label, so this bounds its size.
    pub const MAX_LABELS: u64 = 1 << 24;

    /// Create a plane spanning `0..=xmax` by `0..=ymax`.
    ///
    /// Returns `Err(SpaceError::InvalidBounds)` if either maximum is
    /// negative, if the plane would have more than
    /// [`MAX_LABELS`](Self::MAX_LABELS) labels, or if the plane is periodic
    /// with a zero maximum (the period would be zero).
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_space::{Plane, Topology};
    ///
    /// let plane = Plane::new(4, 4, Topology::Bounded).unwrap();
    /// assert_eq!(plane.label_count(), 25);
    /// assert!(Plane::new(0, 3, Topology::Periodic).is_err());
    /// ```
    pub fn new(xmax: i32, ymax: i32, topology: Topology) -> Result<Self, SpaceError> {
        if xmax < 0 || ymax < 0 {
            return Err(SpaceError::InvalidBounds {
                xmax,
                ymax,
                reason: "maximum coordinates must be non-negative",
            });
        }
        if (xmax as u64 + 1) * (ymax as u64 + 1) > Self::MAX_LABELS {
            return Err(SpaceError::InvalidBounds {
                xmax,
                ymax,
                reason: "plane exceeds 2^24 coordinate labels",
            });
        }
        if topology == Topology::Periodic && (xmax == 0 || ymax == 0) {
            return Err(SpaceError::InvalidBounds {
                xmax,
                ymax,
                reason: "periodic planes need a maximum of at least 1 on each axis",
            });
        }
        Ok(Self {
            xmax,
            ymax,
            topology,
        })
    }

    /// Maximum x coordinate (inclusive).
    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    /// Maximum y coordinate (inclusive).
    pub fn ymax(&self) -> i32 {
        self.ymax
    }

    /// Edge behavior.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of distinct cells on the axis `direction` moves along.
    ///
    /// `max + 1` on a bounded plane, the period `max` on a periodic one. A
    /// straight trail longer than this leaves a bounded plane or wraps onto
    /// itself.
    pub fn axis_len(&self, direction: Direction) -> u32 {
        let max = match direction {
            Direction::East | Direction::West => self.xmax,
            Direction::North | Direction::South => self.ymax,
        };
        match self.topology {
            Topology::Bounded => max as u32 + 1,
            Topology::Periodic => max as u32,
        }
    }

    /// Number of raw coordinate labels, `(xmax + 1) * (ymax + 1)`.
    pub fn label_count(&self) -> usize {
        (self.xmax as usize + 1) * (self.ymax as usize + 1)
    }

    /// Whether `cell` is a raw label of this plane (`0..=max` on both axes).
    pub fn contains(&self, cell: Cell) -> bool {
        (0..=self.xmax).contains(&cell.x) && (0..=self.ymax).contains(&cell.y)
    }

    /// Row-major index of a raw label, or `None` if it is off the plane.
    pub(crate) fn label_index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.x as usize) * (self.ymax as usize + 1) + cell.y as usize)
    }

    /// Canonical form of `cell`.
    ///
    /// Bounded planes return the cell unchanged if it is on the plane and
    /// `None` otherwise. Periodic planes wrap any coordinate into `0..max`.
    pub fn canonical(&self, cell: Cell) -> Option<Cell> {
        let x = resolve_axis(cell.x, self.xmax, self.topology)?;
        let y = resolve_axis(cell.y, self.ymax, self.topology)?;
        Some(Cell::new(x, y))
    }

    /// Validate a configured cell and return its canonical form.
    ///
    /// Unlike [`canonical`](Self::canonical), an off-plane cell on a
    /// bounded plane is reported as an error.
    pub fn check_cell(&self, cell: Cell) -> Result<Cell, SpaceError> {
        self.canonical(cell).ok_or_else(|| SpaceError::CellOutOfBounds {
            cell,
            bounds: format!("[0, {}] x [0, {}]", self.xmax, self.ymax),
        })
    }

    /// The cell one step from `cell` along `direction`.
    ///
    /// Returns `None` when a bounded plane's wall is in the way. Periodic
    /// planes always return the wrapped, canonical destination.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.canonical(cell.offset(direction))
    }

    /// Every raw label that names the same cell as `cell`.
    ///
    /// On a bounded plane this is just the cell itself. On a periodic plane
    /// a coordinate of `0` is also labelled `max`, so a seam cell has two
    /// labels and the corner `(0, 0)` has four. Off-plane cells on a bounded
    /// plane have no labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_core::Cell;
    /// use slither_space::{Plane, Topology};
    ///
    /// let torus = Plane::new(5, 5, Topology::Periodic).unwrap();
    /// let labels = torus.aliases(Cell::new(5, 3));
    /// assert_eq!(labels.as_slice(), &[Cell::new(0, 3), Cell::new(5, 3)]);
    /// ```
    pub fn aliases(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let Some(c) = self.canonical(cell) else {
            return SmallVec::new();
        };
        if self.topology == Topology::Bounded {
            return smallvec![c];
        }
        let xs = axis_labels(c.x, self.xmax);
        let ys = axis_labels(c.y, self.ymax);
        let mut out = SmallVec::new();
        for &x in &xs {
            for &y in &ys {
                out.push(Cell::new(x, y));
            }
        }
        out
    }

    /// Row-major list of every canonical cell.
    pub fn canonical_cells(&self) -> Vec<Cell> {
        let (w, h) = match self.topology {
            Topology::Bounded => (self.xmax + 1, self.ymax + 1),
            Topology::Periodic => (self.xmax, self.ymax),
        };
        let mut out = Vec::with_capacity((w as usize) * (h as usize));
        for x in 0..w {
            for y in 0..h {
                out.push(Cell::new(x, y));
            }
        }
        out
    }
}

/// Resolve a single axis value under the given topology.
/// Returns `Some(value)` or `None` for a bounded coordinate off the plane.
pub(crate) fn resolve_axis(val: i32, max: i32, topology: Topology) -> Option<i32> {
    match topology {
        Topology::Bounded => (0..=max).contains(&val).then_some(val),
        Topology::Periodic => Some(val.rem_euclid(max)),
    }
}

/// Raw labels of a canonical periodic coordinate.
fn axis_labels(val: i32, max: i32) -> SmallVec<[i32; 2]> {
    if val == 0 {
        smallvec![0, max]
    } else {
        smallvec![val]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_negative_bounds() {
        assert!(matches!(
            Plane::new(-1, 4, Topology::Bounded),
            Err(SpaceError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn new_rejects_zero_period() {
        assert!(Plane::new(0, 0, Topology::Bounded).is_ok());
        assert!(Plane::new(0, 5, Topology::Periodic).is_err());
        assert!(Plane::new(5, 0, Topology::Periodic).is_err());
    }

    #[test]
    fn new_rejects_oversized_planes() {
        assert!(Plane::new(i32::MAX, 1, Topology::Bounded).is_err());
        assert!(Plane::new(i32::MAX - 1, i32::MAX - 1, Topology::Periodic).is_err());
        assert!(Plane::new(4096, 4096, Topology::Bounded).is_err());
        assert!(Plane::new(4095, 4095, Topology::Bounded).is_ok());
        assert!(Plane::new((1 << 24) - 1, 0, Topology::Bounded).is_ok());
    }

    #[test]
    fn axis_len_counts_distinct_cells() {
        let b = Plane::new(5, 3, Topology::Bounded).unwrap();
        assert_eq!(b.axis_len(Direction::East), 6);
        assert_eq!(b.axis_len(Direction::South), 4);
        let t = Plane::new(5, 3, Topology::Periodic).unwrap();
        assert_eq!(t.axis_len(Direction::West), 5);
        assert_eq!(t.axis_len(Direction::North), 3);
    }

    // ── Step tests ──────────────────────────────────────────────

    #[test]
    fn step_bounded_interior() {
        let p = Plane::new(4, 4, Topology::Bounded).unwrap();
        assert_eq!(p.step(c(2, 2), Direction::North), Some(c(2, 3)));
        assert_eq!(p.step(c(2, 2), Direction::West), Some(c(1, 2)));
    }

    #[test]
    fn step_bounded_walls() {
        let p = Plane::new(4, 4, Topology::Bounded).unwrap();
        assert_eq!(p.step(c(4, 0), Direction::East), None);
        assert_eq!(p.step(c(4, 0), Direction::South), None);
        assert_eq!(p.step(c(0, 4), Direction::West), None);
        assert_eq!(p.step(c(0, 4), Direction::North), None);
        // The maximum itself is a valid coordinate on a bounded plane.
        assert_eq!(p.step(c(3, 3), Direction::East), Some(c(4, 3)));
    }

    #[test]
    fn step_periodic_wraps_across_seam() {
        let p = Plane::new(5, 5, Topology::Periodic).unwrap();
        assert_eq!(p.step(c(4, 3), Direction::East), Some(c(0, 3)));
        assert_eq!(p.step(c(0, 3), Direction::West), Some(c(4, 3)));
        assert_eq!(p.step(c(2, 4), Direction::North), Some(c(2, 0)));
        assert_eq!(p.step(c(2, 0), Direction::South), Some(c(2, 4)));
    }

    #[test]
    fn step_from_raw_max_label() {
        // (5, 3) is the seam cell (0, 3); east of it is (1, 3).
        let p = Plane::new(5, 5, Topology::Periodic).unwrap();
        assert_eq!(p.step(c(5, 3), Direction::East), Some(c(1, 3)));
    }

    // ── Canonical / alias tests ─────────────────────────────────

    #[test]
    fn canonical_bounded_is_identity_on_plane() {
        let p = Plane::new(3, 3, Topology::Bounded).unwrap();
        assert_eq!(p.canonical(c(3, 0)), Some(c(3, 0)));
        assert_eq!(p.canonical(c(4, 0)), None);
        assert_eq!(p.canonical(c(0, -1)), None);
    }

    #[test]
    fn canonical_periodic_reduces_max_and_negatives() {
        let p = Plane::new(5, 4, Topology::Periodic).unwrap();
        assert_eq!(p.canonical(c(5, 4)), Some(c(0, 0)));
        assert_eq!(p.canonical(c(-1, -2)), Some(c(4, 2)));
        assert_eq!(p.canonical(c(11, 9)), Some(c(1, 1)));
    }

    #[test]
    fn check_cell_reports_bounds() {
        let p = Plane::new(3, 3, Topology::Bounded).unwrap();
        match p.check_cell(c(0, -1)) {
            Err(SpaceError::CellOutOfBounds { cell, bounds }) => {
                assert_eq!(cell, c(0, -1));
                assert_eq!(bounds, "[0, 3] x [0, 3]");
            }
            other => panic!("expected CellOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn aliases_bounded_single_label() {
        let p = Plane::new(5, 5, Topology::Bounded).unwrap();
        assert_eq!(p.aliases(c(0, 0)).as_slice(), &[c(0, 0)]);
        assert_eq!(p.aliases(c(5, 5)).as_slice(), &[c(5, 5)]);
        assert!(p.aliases(c(6, 5)).is_empty());
    }

    #[test]
    fn aliases_periodic_seams_and_corner() {
        let p = Plane::new(5, 5, Topology::Periodic).unwrap();
        assert_eq!(p.aliases(c(2, 2)).as_slice(), &[c(2, 2)]);
        assert_eq!(p.aliases(c(2, 5)).as_slice(), &[c(2, 0), c(2, 5)]);
        assert_eq!(
            p.aliases(c(0, 0)).as_slice(),
            &[c(0, 0), c(0, 5), c(5, 0), c(5, 5)]
        );
    }

    #[test]
    fn canonical_cells_counts() {
        let b = Plane::new(4, 2, Topology::Bounded).unwrap();
        assert_eq!(b.canonical_cells().len(), 15);
        let t = Plane::new(4, 2, Topology::Periodic).unwrap();
        assert_eq!(t.canonical_cells().len(), 8);
    }

    proptest! {
        #[test]
        fn periodic_step_round_trips(x in -20i32..20, y in -20i32..20, d in 0usize..4) {
            let p = Plane::new(6, 4, Topology::Periodic).unwrap();
            let dir = Direction::ALL[d];
            let from = p.canonical(c(x, y)).unwrap();
            let to = p.step(from, dir).unwrap();
            prop_assert_eq!(p.step(to, dir.opposite()), Some(from));
        }

        #[test]
        fn every_alias_is_on_plane_and_canonicalizes_back(x in 0i32..=6, y in 0i32..=4) {
            let p = Plane::new(6, 4, Topology::Periodic).unwrap();
            let canon = p.canonical(c(x, y)).unwrap();
            for label in p.aliases(c(x, y)) {
                prop_assert!(p.contains(label));
                prop_assert_eq!(p.canonical(label), Some(canon));
            }
        }
    }
}
