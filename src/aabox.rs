//! Axis-aligned bounding boxes

use crate::transform::Transform;
use crate::vector::Vector;

/// Axis-aligned box
///
/// `low` is never greater than `high` for boxes built with [new] or
/// [from_vectors]; only [intersection] can produce an empty box.
///
/// [new]: #method.new
/// [from_vectors]: #method.from_vectors
/// [intersection]: #method.intersection
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct AABox {
    /// Minimum corner
    pub low: Vector,
    /// Maximum corner
    pub high: Vector,
}

impl AABox {
    /// Create a new box spanning two corners
    ///
    /// Corners are sorted before storing
    pub fn new(p1: Vector, p2: Vector) -> Self {
        Self { low: p1.min(&p2), high: p1.max(&p2) }
    }
    /// Center of the box
    pub fn midpoint(&self) -> Vector {
        (self.low + self.high) * 0.5
    }
    /// Width and height
    pub fn size(&self) -> Vector {
        self.high - self.low
    }
    /// If `p` is inside or on the edge of the box
    pub fn contains(&self, p: Vector) -> bool {
        self.low.x <= p.x && p.x <= self.high.x &&
            self.low.y <= p.y && p.y <= self.high.y
    }
    /// If the interiors of both boxes intersect
    ///
    /// Boxes that only share an edge or a corner do not overlap
    ///
    ///     use sraster::{AABox, Vector};
    ///
    ///     let a = AABox::new(Vector::new(0., 0.), Vector::new(1., 1.));
    ///     let b = AABox::new(Vector::new(1., 0.), Vector::new(2., 1.));
    ///     assert!(!a.overlaps(&b));
    ///     assert!(a.contains(Vector::new(1., 0.5)));
    ///     assert!(b.contains(Vector::new(1., 0.5)));
    ///
    pub fn overlaps(&self, r: &AABox) -> bool {
        !(r.low.x >= self.high.x ||
          r.high.x <= self.low.x ||
          r.low.y >= self.high.y ||
          r.high.y <= self.low.y)
    }
    /// Common region of two boxes
    ///
    /// The corners are not sorted, so boxes that do not overlap give an
    /// empty box; check [overlaps](#method.overlaps) or
    /// [is_empty](#method.is_empty)
    pub fn intersection(&self, other: &AABox) -> AABox {
        AABox {
            low: self.low.max(&other.low),
            high: self.high.min(&other.high),
        }
    }
    /// If `low` is greater than `high` along either axis
    pub fn is_empty(&self) -> bool {
        self.low.x > self.high.x || self.low.y > self.high.y
    }
    /// Smallest box holding all points
    ///
    /// # Panics
    ///
    /// If `vs` is empty
    pub fn from_vectors(vs: &[Vector]) -> AABox {
        let (low, high) = vs[1..].iter()
            .fold((vs[0], vs[0]), |(lo, hi), v| (lo.min(v), hi.max(v)));
        AABox { low, high }
    }
    /// Expand if the point is outside
    pub fn expand(&mut self, p: Vector) {
        self.low = self.low.min(&p);
        self.high = self.high.max(&p);
    }
    /// Bound of the transformed box
    pub fn transform(&self, xform: &Transform) -> AABox {
        let corners = [
            xform.apply(self.low),
            xform.apply(Vector::new(self.high.x, self.low.y)),
            xform.apply(self.high),
            xform.apply(Vector::new(self.low.x, self.high.y)),
        ];
        AABox::from_vectors(&corners)
    }
}
