//! Drawable line segments for a trail.
//!
//! Renderers draw a trail as one short line per pair of consecutive cells.
//! On a periodic plane a pair may sit on opposite sides of the seam, and a
//! straight line between them would span the whole grid. Such links are
//! split into stubs that run from each cell to the seam instead.

use crate::plane::Plane;
use slither_core::Cell;
use smallvec::{smallvec, SmallVec};

/// A straight line between two points in plane coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point `(x, y)`.
    pub from: (f64, f64),
    /// End point `(x, y)`.
    pub to: (f64, f64),
}

impl Segment {
    fn between(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            from: (a.0 as f64, a.1 as f64),
            to: (b.0 as f64, b.1 as f64),
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        let dx = self.to.0 - self.from.0;
        let dy = self.to.1 - self.from.1;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Plane {
    /// Segments for the link from `a` to `b`.
    ///
    /// Returns a single segment unless the link crosses the periodic seam
    /// (a coordinate delta larger than one), in which case each endpoint
    /// gets a stub reaching toward the seam. Zero-length stubs, from an
    /// endpoint already on the seam, are dropped.
    ///
    /// On a periodic axis of period 2 the two cells are neighbours both
    /// directly and across the seam, and the pair alone cannot tell which
    /// way the snake moved. Such links are always drawn directly.
    pub fn link(&self, a: Cell, b: Cell) -> SmallVec<[Segment; 2]> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dx.abs() <= 1 && dy.abs() <= 1 {
            return smallvec![Segment::between(a.into(), b.into())];
        }
        // Unit step of the true (wrapped) move from a to b.
        let ux = if dx.abs() > 1 { -dx.signum() } else { dx };
        let uy = if dy.abs() > 1 { -dy.signum() } else { dy };
        let clamp = |c: Cell, sx: i32, sy: i32| {
            (
                (c.x + sx).clamp(0, self.xmax()),
                (c.y + sy).clamp(0, self.ymax()),
            )
        };
        let mut out = SmallVec::new();
        for stub in [
            Segment::between(a.into(), clamp(a, ux, uy)),
            Segment::between(b.into(), clamp(b, -ux, -uy)),
        ] {
            if stub.length() > 0.0 {
                out.push(stub);
            }
        }
        out
    }

    /// Segments for a whole trail, head first.
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_core::Cell;
    /// use slither_space::{Plane, Topology};
    ///
    /// let torus = Plane::new(5, 5, Topology::Periodic).unwrap();
    /// // Head on the seam at x = 0, body continuing west at x = 4.
    /// let segs = torus.segments([Cell::new(0, 2), Cell::new(4, 2), Cell::new(3, 2)]);
    /// assert_eq!(segs.len(), 2);
    /// assert_eq!(segs[0].from, (4.0, 2.0));
    /// assert_eq!(segs[0].to, (5.0, 2.0));
    /// ```
    pub fn segments<I>(&self, trail: I) -> Vec<Segment>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut out = Vec::new();
        let mut prev: Option<Cell> = None;
        for cell in trail {
            if let Some(p) = prev {
                out.extend(self.link(p, cell));
            }
            prev = Some(cell);
        }
        out
    }
}
