//! Occupancy map: which cells are covered by some snake.

use crate::plane::Plane;
use slither_core::Cell;

/// Boolean map over every raw label of a [`Plane`].
///
/// Marking or clearing a cell touches all of its [aliases](Plane::aliases),
/// so on a periodic plane the labels `0` and `max` of an axis always agree.
/// Queries accept any label and answer for the cell it names; cells off a
/// bounded plane read as unoccupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupancy {
    plane: Plane,
    taken: Vec<bool>,
}

impl Occupancy {
    /// An all-free map sized for `plane`.
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            taken: vec![false; plane.label_count()],
        }
    }

    /// The plane this map covers.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Whether the cell named by `cell` is occupied.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.plane
            .canonical(cell)
            .and_then(|c| self.plane.label_index(c))
            .is_some_and(|i| self.taken[i])
    }

    /// Mark the cell named by `cell`, with all its aliases, as occupied.
    ///
    /// Off-plane cells of a bounded plane are ignored.
    pub fn mark(&mut self, cell: Cell) {
        self.set(cell, true);
    }

    /// Mark the cell named by `cell`, with all its aliases, as free.
    pub fn clear(&mut self, cell: Cell) {
        self.set(cell, false);
    }

    fn set(&mut self, cell: Cell, value: bool) {
        for label in self.plane.aliases(cell) {
            if let Some(i) = self.plane.label_index(label) {
                self.taken[i] = value;
            }
        }
    }

    /// Free every cell.
    pub fn clear_all(&mut self) {
        self.taken.fill(false);
    }

    /// Raw label view: `true` at `label` if it is marked.
    ///
    /// Unlike [`is_occupied`](Self::is_occupied) this does not canonicalize,
    /// which lets tests check that aliased labels stay in sync.
    pub fn label(&self, label: Cell) -> Option<bool> {
        self.plane.label_index(label).map(|i| self.taken[i])
    }

    /// Canonical cells currently occupied, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.plane
            .canonical_cells()
            .into_iter()
            .filter(|&c| self.is_occupied(c))
    }

    /// Number of distinct occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied_cells().count()
    }
}
