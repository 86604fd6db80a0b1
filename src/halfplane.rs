//! Half-planes

use crate::vector::Vector;

/// Half-plane bounded by a directed line
///
/// Stored as a unit normal `v` and offset `c`. Points to the left of the
/// line from `p1` to `p2` (x right, y up) have a positive signed distance.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct HalfPlane {
    /// Unit normal, pointing inside
    pub v: Vector,
    /// Offset
    pub c: f64,
}

impl HalfPlane {
    /// Half-plane to the left of the line from `p1` to `p2`
    ///
    /// `p1 == p2` gives a NaN normal
    pub fn new(p1: Vector, p2: Vector) -> Self {
        let v = Vector::new(-p2.y + p1.y, p2.x - p1.x);
        let l = v.length();
        let c = -v.dot(&p1) / l;
        Self { v: v * (1.0 / l), c }
    }
    /// Distance from the boundary line, positive inside
    ///
    ///     use sraster::{HalfPlane, Vector};
    ///
    ///     let h = HalfPlane::new(Vector::new(0., 0.), Vector::new(2., 0.));
    ///     assert_eq!(h.signed_distance(Vector::new(1., 3.)), 3.0);
    ///     assert_eq!(h.signed_distance(Vector::new(1., -1.)), -1.0);
    ///
    pub fn signed_distance(&self, p: Vector) -> f64 {
        self.v.dot(&p) + self.c
    }
}
