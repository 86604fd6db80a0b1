//! Supersampling rasterizer for ellipses and convex polygons
//!
//! How does this work
//!    img   = Image::new(w, h)
//!    shape = Shape::from( Ellipse::circle(center, r, color) )
//!    shape.draw(&mut img, super_sampling)
//!      bound.overlaps(img.bounds())     -- skip shapes outside the image
//!      bound.intersection(img.bounds())
//!      for each pixel in the window
//!        n x n grid of samples
//!          contains(sample)             -- ellipse: unit circle test
//!                                       -- polygon: half-plane conjunction
//!        Color::draw( color.fainter(coverage) )
//!    img.save_ppm("out.ppm")
//!
//! Shapes are moved around with [Transform]; [Shape::transform] always
//! returns a new shape of the same kind.
//!
//!     use sraster::{Color, Ellipse, Image, Shape, Vector};
//!
//!     let mut img = Image::new(10, 10);
//!     let disk = Shape::from(Ellipse::circle(Vector::new(5.0, 5.0), 3.0, Color::black()));
//!     disk.draw(&mut img, 4);
//!     assert_eq!(img.get(5, 5).a, 1.0);
//!     assert!(img.get(0, 0).transparent);
//!
//! [Transform]: transform/struct.Transform.html
//! [Shape::transform]: shape/enum.Shape.html#method.transform

pub mod math;
pub mod vector;
pub mod transform;
pub mod aabox;
pub mod halfplane;
pub mod color;
pub mod buffer;
pub mod shape;
pub mod scene;
pub mod settings;
pub mod error;
pub mod ppm;

pub use crate::math::*;
pub use crate::vector::*;
pub use crate::transform::*;
pub use crate::aabox::*;
pub use crate::halfplane::*;
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::shape::*;
pub use crate::scene::*;
pub use crate::settings::*;
pub use crate::error::Error;
