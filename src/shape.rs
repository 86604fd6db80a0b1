//! Shapes
//!
//! A [Shape] is either an [Ellipse] or a [ConvexPoly]. Both carry a color and
//! a bounding box and answer point containment, which is all the
//! supersampling rasterizer in [Shape::draw] needs.
//!
//! [Shape]: enum.Shape.html
//! [Ellipse]: struct.Ellipse.html
//! [ConvexPoly]: struct.ConvexPoly.html
//! [Shape::draw]: enum.Shape.html#method.draw

use crate::aabox::AABox;
use crate::buffer::Image;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::halfplane::HalfPlane;
use crate::math::quadratic;
use crate::transform::Transform;
use crate::vector::Vector;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Kind of shape, tags the values returned by [Shape::parameters]
///
/// [Shape::parameters]: enum.Shape.html#method.parameters
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// `[cx, cy, rx, ry, angle]`
    Ellipse,
    /// `[x0, y0, x1, y1, ...]`, counter-clockwise
    ConvexPoly,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeType::Ellipse => write!(f, "ellipse"),
            ShapeType::ConvexPoly => write!(f, "convexpoly"),
        }
    }
}

impl FromStr for ShapeType {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ellipse" | "circle" => Ok(ShapeType::Ellipse),
            "convexpoly" | "polygon" | "poly" => Ok(ShapeType::ConvexPoly),
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

/// Ellipse given by a center, two radii and a rotation
///
/// Containment maps a point into the unit circle's space with the inverse of
/// `translate(center) * rotate(angle) * scale(rx, ry)`.
#[derive(Debug,Clone,PartialEq)]
pub struct Ellipse {
    pub color: Color,
    bound: AABox,
    center: Vector,
    radii: Vector,
    angle: f64,
    to_unit: Transform,
}

impl Ellipse {
    /// Create a new Ellipse, angle is in radians
    pub fn new(center: Vector, radii: Vector, angle: f64, color: Color) -> Self {
        let frame = Self::frame(center, radii, angle);
        let hx = (frame.sx * frame.sx + frame.shx * frame.shx).sqrt();
        let hy = (frame.shy * frame.shy + frame.sy * frame.sy).sqrt();
        let half = Vector::new(hx, hy);
        Self {
            color,
            bound: AABox::new(center - half, center + half),
            center,
            radii,
            angle,
            to_unit: frame.inverse(),
        }
    }
    /// Create a new circle
    pub fn circle(center: Vector, r: f64, color: Color) -> Self {
        Self::new(center, Vector::new(r, r), 0.0, color)
    }
    fn frame(center: Vector, radii: Vector, angle: f64) -> Transform {
        Transform::new_translate(center.x, center.y)
            * Transform::new_rotate(angle)
            * Transform::new_scale(radii.x, radii.y)
    }
    pub fn center(&self) -> Vector {
        self.center
    }
    pub fn radii(&self) -> Vector {
        self.radii
    }
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn bound(&self) -> AABox {
        self.bound
    }
    /// If `p` is inside or on the ellipse
    pub fn contains(&self, p: Vector) -> bool {
        let q = self.to_unit.apply(p);
        q.dot(&q) <= 1.0
    }
    /// Ellipse mapped through `xform`
    ///
    /// The new axes are the eigenvectors of `L L^T`, where `L` is the
    /// linear part of `xform * frame`; the radii are the square roots of the
    /// eigenvalues, major axis first. A pure translation keeps the radii and
    /// angle as they are.
    pub fn transform(&self, xform: &Transform) -> Ellipse {
        if xform.linear() == Transform::new() {
            return Ellipse::new(xform.apply(self.center), self.radii, self.angle, self.color);
        }
        let m = *xform * Self::frame(self.center, self.radii, self.angle);
        let p = m.sx * m.sx + m.shx * m.shx;
        let q = m.sx * m.shy + m.shx * m.sy;
        let r = m.shy * m.shy + m.sy * m.sy;
        // Rounding can push the discriminant of a circle just below zero
        let mean = 0.5 * (p + r);
        let (l0, l1) = quadratic(1.0, -(p + r), p * r - q * q).unwrap_or((mean, mean));
        let (major, minor) = (l0.max(l1), l0.min(l1));
        let angle = if q == 0.0 {
            if p >= r { 0.0 } else { std::f64::consts::FRAC_PI_2 }
        } else {
            (major - p).atan2(q)
        };
        let radii = Vector::new(major.max(0.0).sqrt(), minor.max(0.0).sqrt());
        Ellipse::new(xform.apply(self.center), radii, angle, self.color)
    }
    fn parameters(&self) -> Vec<f64> {
        vec![self.center.x, self.center.y, self.radii.x, self.radii.y, self.angle]
    }
}

/// Convex polygon bounded by one half-plane per edge
///
/// Vertices are kept in counter-clockwise order (x right, y up) so every
/// half-plane faces inward. Points on an edge are inside.
#[derive(Debug,Clone,PartialEq)]
pub struct ConvexPoly {
    pub color: Color,
    bound: AABox,
    vertices: Vec<Vector>,
    half_planes: Vec<HalfPlane>,
}

impl ConvexPoly {
    /// Create a new convex polygon
    ///
    /// Clockwise input is reversed; repeated consecutive vertices do not
    /// produce an edge.
    ///
    /// # Panics
    ///
    /// If `vertices` is empty
    pub fn new(vertices: &[Vector], color: Color) -> Self {
        let mut vertices = vertices.to_vec();
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        let n = vertices.len();
        let half_planes = (0 .. n)
            .map(|i| (vertices[i], vertices[(i + 1) % n]))
            .filter(|(p1, p2)| p1 != p2)
            .map(|(p1, p2)| HalfPlane::new(p1, p2))
            .collect();
        Self {
            color,
            bound: AABox::from_vectors(&vertices),
            vertices,
            half_planes,
        }
    }
    /// Axis-aligned rectangle
    pub fn rectangle(low: Vector, high: Vector, color: Color) -> Self {
        let b = AABox::new(low, high);
        Self::new(&[b.low,
                    Vector::new(b.high.x, b.low.y),
                    b.high,
                    Vector::new(b.low.x, b.high.y)], color)
    }
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }
    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }
    pub fn bound(&self) -> AABox {
        self.bound
    }
    /// If `p` is on the inner side of every edge
    ///
    /// A polygon whose vertices all coincide has no edges and contains nothing
    pub fn contains(&self, p: Vector) -> bool {
        !self.half_planes.is_empty() &&
            self.half_planes.iter().all(|h| h.signed_distance(p) >= 0.0)
    }
    /// Polygon with every vertex mapped through `xform`
    pub fn transform(&self, xform: &Transform) -> ConvexPoly {
        let vs : Vec<_> = self.vertices.iter().map(|&v| xform.apply(v)).collect();
        ConvexPoly::new(&vs, self.color)
    }
    fn parameters(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| vec![v.x, v.y]).collect()
    }
}

/// Twice the signed area, positive for counter-clockwise vertices
fn signed_area(vs: &[Vector]) -> f64 {
    let n = vs.len();
    (0 .. n).map(|i| {
        let (a, b) = (vs[i], vs[(i + 1) % n]);
        a.x * b.y - b.x * a.y
    }).sum()
}

/// Drawable shape
#[derive(Debug,Clone,PartialEq)]
pub enum Shape {
    Ellipse(Ellipse),
    ConvexPoly(ConvexPoly),
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Shape {
        Shape::Ellipse(e)
    }
}
impl From<ConvexPoly> for Shape {
    fn from(p: ConvexPoly) -> Shape {
        Shape::ConvexPoly(p)
    }
}

impl Shape {
    /// Kind of shape
    pub fn kind(&self) -> ShapeType {
        match self {
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::ConvexPoly(_) => ShapeType::ConvexPoly,
        }
    }
    /// Fill color
    pub fn color(&self) -> Color {
        match self {
            Shape::Ellipse(e) => e.color,
            Shape::ConvexPoly(p) => p.color,
        }
    }
    /// Bounding box
    pub fn bound(&self) -> AABox {
        match self {
            Shape::Ellipse(e) => e.bound(),
            Shape::ConvexPoly(p) => p.bound(),
        }
    }
    /// If `p` is inside the shape, boundaries included
    pub fn contains(&self, p: Vector) -> bool {
        match self {
            Shape::Ellipse(e) => e.contains(p),
            Shape::ConvexPoly(c) => c.contains(p),
        }
    }
    /// Kind and defining values of the shape
    ///
    /// - Ellipse: `[cx, cy, rx, ry, angle]`
    /// - ConvexPoly: `[x0, y0, x1, y1, ...]` counter-clockwise
    ///
    /// An ellipse produced by [transform](#method.transform) with any linear
    /// part has `rx >= ry`, with `angle` giving the direction of the major
    /// axis; a translated ellipse keeps the radii and angle it was built with.
    ///
    ///     use sraster::{Color, Ellipse, Shape, ShapeType, Vector};
    ///
    ///     let e = Ellipse::new(Vector::new(1., 2.), Vector::new(3., 4.), 0.5, Color::black());
    ///     let (kind, v) = Shape::from(e).parameters();
    ///     assert_eq!(kind, ShapeType::Ellipse);
    ///     assert_eq!(v, vec![1., 2., 3., 4., 0.5]);
    ///
    pub fn parameters(&self) -> (ShapeType, Vec<f64>) {
        let v = match self {
            Shape::Ellipse(e) => e.parameters(),
            Shape::ConvexPoly(p) => p.parameters(),
        };
        (self.kind(), v)
    }
    /// Rebuild a shape from the output of [parameters](#method.parameters)
    pub fn from_parameters(kind: ShapeType, v: &[f64], color: Color) -> Result<Shape> {
        match kind {
            ShapeType::Ellipse => {
                if v.len() != 5 {
                    return Err(Error::ParameterCount { kind, expected: "5", found: v.len() });
                }
                let e = Ellipse::new(Vector::new(v[0], v[1]), Vector::new(v[2], v[3]), v[4], color);
                Ok(e.into())
            },
            ShapeType::ConvexPoly => {
                if v.len() < 6 || v.len() % 2 != 0 {
                    return Err(Error::ParameterCount {
                        kind, expected: "an even number (at least 6) of", found: v.len()
                    });
                }
                let vs : Vec<_> = v.chunks(2).map(|c| Vector::new(c[0], c[1])).collect();
                let mut distinct : Vec<Vector> = vec![];
                for p in &vs {
                    if !distinct.contains(p) {
                        distinct.push(*p);
                    }
                }
                if distinct.len() < 3 {
                    return Err(Error::DegeneratePolygon(distinct.len()));
                }
                Ok(ConvexPoly::new(&vs, color).into())
            },
        }
    }
    /// New shape of the same kind mapped through `xform`
    pub fn transform(&self, xform: &Transform) -> Shape {
        match self {
            Shape::Ellipse(e) => e.transform(xform).into(),
            Shape::ConvexPoly(p) => p.transform(xform).into(),
        }
    }
    /// Rasterize the shape into `image`
    ///
    /// Each pixel inside the shape's bound is sampled on a regular
    /// `super_sampling` x `super_sampling` grid and the color is drawn with
    /// its alpha scaled by the fraction of samples inside. A
    /// `super_sampling` of 0 is treated as 1.
    pub fn draw(&self, image: &mut Image, super_sampling: usize) {
        let bounds = image.bounds();
        let bound = self.bound();
        if image.width() == 0 || image.height() == 0 || !bound.overlaps(&bounds) {
            log::debug!("{} outside of image, skipping: {:?}", self.kind(), bound);
            return;
        }
        let window = bound.intersection(&bounds);
        let x0 = window.low.x.floor() as usize;
        let y0 = window.low.y.floor() as usize;
        let x1 = (window.high.x.floor() as usize).min(image.width() - 1);
        let y1 = (window.high.y.floor() as usize).min(image.height() - 1);
        log::trace!("{} pixels x {}..={} y {}..={}", self.kind(), x0, x1, y0, y1);

        let n = super_sampling.max(1);
        let total = n * n;
        let step = 1.0 / n as f64;
        let offsets : Vec<_> = (0 .. total)
            .map(|k| Vector::new(((k % n) as f64 + 0.5) * step,
                                 ((k / n) as f64 + 0.5) * step))
            .collect();
        let color = self.color();
        for y in y0 ..= y1 {
            for x in x0 ..= x1 {
                let corner = Vector::new(x as f64, y as f64);
                let count = offsets.iter()
                    .filter(|&&o| self.contains(corner + o))
                    .count();
                if count == total {
                    image[(x,y)].draw(&color);
                } else if count > 0 {
                    image[(x,y)].draw(&color.fainter(count as f64 / total as f64));
                }
            }
        }
    }
}
