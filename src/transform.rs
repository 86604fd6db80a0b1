//! Transformations

use crate::vector::Vector;

use std::ops::Mul;

/// Affine Transformation
///
/// Stored as the top two rows of a 3x3 homogeneous matrix
///
/// ```text
/// | sx  shx tx |
/// | shy sy  ty |
/// | 0   0   1  |
/// ```
///
/// Products apply right to left: `(a * b) * p == a * (b * p)`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Identity Transform
    pub fn identity() -> Self {
        Self::new()
    }
    /// Create a Transform from matrix rows `[m11 m12 tx]` and `[m21 m22 ty]`
    pub fn from_rows(m11: f64, m12: f64, tx: f64,
                     m21: f64, m22: f64, ty: f64) -> Self {
        Self { sx: m11, shx: m12, tx, shy: m21, sy: m22, ty }
    }
    /// Follow the current transform with a translation
    ///
    /// Same as `self = new_translate(dx, dy) * self`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Follow the current transform with a scaling about the origin
    ///
    /// Same as `self = new_scale(sx, sy) * self`
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Follow the current transform with a rotation about the origin
    ///
    /// Same as `self = new_rotate(angle) * self`; angle is in radians,
    /// positive angles turn +x towards +y
    pub fn rotate(&mut self, angle: f64) {
        let ca = angle.cos();
        let sa = angle.sin();
        let t0   = self.sx  * ca - self.shy * sa;
        let t2   = self.shx * ca - self.sy  * sa;
        let t4   = self.tx  * ca - self.ty  * sa;
        self.shy = self.sx  * sa + self.shy * ca;
        self.sy  = self.shx * sa + self.sy  * ca;
        self.ty  = self.tx  * sa + self.ty  * ca;
        self.sx  = t0;
        self.shx = t2;
        self.tx  = t4;
    }
    /// Map the point (`x`,`y`), returning the new coordinates
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform a point
    pub fn apply(&self, p: Vector) -> Vector {
        let (x, y) = self.transform(p.x, p.y);
        Vector::new(x, y)
    }
    /// Determinant of the linear part
    pub fn det(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// If the linear part can be inverted
    pub fn is_invertible(&self) -> bool {
        let d = self.det();
        d != 0.0 && d.is_finite()
    }
    /// Inverse Transform
    ///
    /// A singular transform is not guarded against; the result then holds
    /// infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let d = 1.0 / self.det();
        let sx  =  self.sy  * d;
        let shx = -self.shx * d;
        let shy = -self.shy * d;
        let sy  =  self.sx  * d;
        let tx  = -self.tx * sx  - self.ty * shx;
        let ty  = -self.tx * shy - self.ty * sy;
        Transform { sx, sy, shx, shy, tx, ty }
    }
    /// Linear part only, translation removed
    pub fn linear(&self) -> Self {
        Transform { tx: 0.0, ty: 0.0, ..*self }
    }
    /// Multiply two transforms, `m` is applied first
    pub fn mul_transform(&self, m: &Transform) -> Self {
        let sx  = self.sx  * m.sx  + self.shx * m.shy;
        let shx = self.sx  * m.shx + self.shx * m.sy;
        let tx  = self.sx  * m.tx  + self.shx * m.ty + self.tx;
        let shy = self.shy * m.sx  + self.sy  * m.shy;
        let sy  = self.shy * m.shx + self.sy  * m.sy;
        let ty  = self.shy * m.tx  + self.sy  * m.ty + self.ty;
        Transform { sx, sy, tx, ty, shx, shy }
    }
    /// Scaling about the origin
    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        let mut t = Self::new();
        t.scale(sx,sy);
        t
    }
    /// Translation by (`tx`,`ty`)
    pub fn new_translate(tx: f64, ty: f64) -> Transform {
        let mut t = Self::new();
        t.translate(tx,ty);
        t
    }
    /// Rotation about the origin, in radians
    pub fn new_rotate(ang: f64) -> Transform {
        let mut t = Self::new();
        t.rotate(ang);
        t
    }
    /// Apply `t` with `pivot` as its origin
    ///
    /// Equal to `translate(pivot) * t * translate(-pivot)`
    ///
    ///     use sraster::{Transform, Vector};
    ///     use std::f64::consts::PI;
    ///
    ///     let pivot = Vector::new(2.0, 1.0);
    ///     let t = Transform::around(pivot, Transform::new_rotate(PI));
    ///     let q = t * Vector::new(3.0, 1.0);
    ///     assert!((q - Vector::new(1.0, 1.0)).length() < 1e-12);
    ///     assert!((t * pivot - pivot).length() < 1e-12);
    ///
    pub fn around(pivot: Vector, t: Transform) -> Transform {
        Self::new_translate(pivot.x, pivot.y)
            * t
            * Self::new_translate(-pivot.x, -pivot.y)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.mul_transform(&rhs)
    }
}

impl Mul<Vector> for Transform {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        self.apply(rhs)
    }
}
