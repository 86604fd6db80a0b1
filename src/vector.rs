//! Points and directions

use serde::{Deserialize, Serialize};

use std::ops::{Add, Mul, Neg, Sub};

/// 2D point or direction
#[derive(Debug,Default,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Create a new Vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Dot product
    pub fn dot(&self, o: &Vector) -> f64 {
        self.x * o.x + self.y * o.y
    }
    /// Component-wise minimum
    pub fn min(&self, o: &Vector) -> Vector {
        Vector::new(self.x.min(o.x), self.y.min(o.y))
    }
    /// Component-wise maximum
    pub fn max(&self, o: &Vector) -> Vector {
        Vector::new(self.x.max(o.x), self.y.max(o.y))
    }
    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, o: Vector) -> Vector {
        Vector::new(self.x + o.x, self.y + o.y)
    }
}
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, o: Vector) -> Vector {
        Vector::new(self.x - o.x, self.y - o.y)
    }
}
impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Vector {
        Vector::new(x, y)
    }
}
