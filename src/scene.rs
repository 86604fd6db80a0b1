//! Scenes

use crate::buffer::Image;
use crate::settings::RenderSettings;
use crate::shape::Shape;
use crate::transform::Transform;

use std::iter::FromIterator;

/// Anything that can be rasterized into an [Image]
///
/// [Image]: ../buffer/struct.Image.html
pub trait SceneObject {
    fn draw(&self, image: &mut Image, super_sampling: usize);
}

impl SceneObject for Shape {
    fn draw(&self, image: &mut Image, super_sampling: usize) {
        Shape::draw(self, image, super_sampling);
    }
}

/// Ordered list of shapes
///
/// Shapes are drawn in the order they were added, later shapes on top
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self { shapes: vec![] }
    }
    /// Add a shape on top of the others
    pub fn add<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    /// New scene with every shape mapped through `xform`
    pub fn transform(&self, xform: &Transform) -> Scene {
        self.shapes.iter().map(|s| s.transform(xform)).collect()
    }
    /// Draw the scene into a new image
    pub fn render(&self, settings: &RenderSettings) -> Image {
        log::debug!("rendering {} shapes at {}x{}, {}x{} samples",
                    self.len(), settings.width, settings.height,
                    settings.super_sampling, settings.super_sampling);
        let mut image = settings.image();
        self.draw(&mut image, settings.super_sampling);
        image
    }
}

impl SceneObject for Scene {
    fn draw(&self, image: &mut Image, super_sampling: usize) {
        for shape in &self.shapes {
            shape.draw(image, super_sampling);
        }
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Scene { shapes: iter.into_iter().collect() }
    }
}
