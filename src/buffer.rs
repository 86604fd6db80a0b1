//! Rendering buffer

use crate::aabox::AABox;
use crate::color::Color;
use crate::vector::Vector;

use std::ops::Index;
use std::ops::IndexMut;

/// Image of [Color] cells
///
/// Data is stored as row-major order (C-format), pixel `(x,y)` covers the
/// square `[x,x+1] x [y,y+1]`
///
/// [Color]: ../color/struct.Color.html
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Image {
    /// Create a new image of width x height transparent pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, Color::clear())
    }
    /// Create a new image filled with `background`
    pub fn with_background(width: usize, height: usize, background: Color) -> Self {
        Image { width, height, pixels: vec![background; width * height] }
    }
    /// Image Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Pixel-space region covered by the image, (0,0) to (width,height)
    pub fn bounds(&self) -> AABox {
        AABox::new(Vector::new(0.0, 0.0),
                   Vector::new(self.width as f64, self.height as f64))
    }
    /// Color at pixel (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Color {
        self[(x,y)]
    }
    /// Mutable color at pixel (`x`,`y`)
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Color {
        &mut self[(x,y)]
    }
    /// Set the color at pixel (`x`,`y`)
    pub fn set(&mut self, x: usize, y: usize, c: Color) {
        self[(x,y)] = c;
    }
    /// Set all pixels to `c`
    pub fn clear(&mut self, c: Color) {
        self.pixels.iter_mut().for_each(|p| *p = c);
    }
    /// Pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
    /// RGB bytes, 3 per pixel, in row-major order
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.as_ppm().to_vec()).collect()
    }
}

impl Index<(usize,usize)> for Image {
    type Output = Color;
    fn index(&self, index: (usize, usize)) -> &Color {
        assert!(index.0 < self.width, "pixel x {} outside image of width {}", index.0, self.width);
        assert!(index.1 < self.height, "pixel y {} outside image of height {}", index.1, self.height);
        &self.pixels[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for Image {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Color {
        assert!(index.0 < self.width, "pixel x {} outside image of width {}", index.0, self.width);
        assert!(index.1 < self.height, "pixel y {} outside image of height {}", index.1, self.height);
        &mut self.pixels[index.1 * self.width + index.0]
    }
}
