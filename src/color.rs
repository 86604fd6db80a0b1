//! Colors

use crate::error::Error;
use crate::math::gamma_u8;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Color as Red, Green, Blue and Alpha with components in [0,1]
///
/// `transparent` marks a pixel nothing has been drawn into yet, as opposed
/// to one drawn with zero coverage.
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct Color {
    /// Red, Green, Blue
    pub rgb: [f64; 3],
    /// Alpha
    pub a: f64,
    /// Nothing has been drawn yet
    #[serde(default)]
    pub transparent: bool,
}

impl Default for Color {
    fn default() -> Self {
        Self::clear()
    }
}

impl Color {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { rgb: [r, g, b], a, transparent: false }
    }
    /// Create new opaque color
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
    /// Empty pixel (0,0,0,0), marked transparent
    pub fn clear() -> Self {
        Self { rgb: [0.0; 3], a: 0.0, transparent: true }
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    pub fn red(&self) -> f64 { self.rgb[0] }
    pub fn green(&self) -> f64 { self.rgb[1] }
    pub fn blue(&self) -> f64 { self.rgb[2] }

    /// Draw `o` over this color
    ///
    /// Uses the "over" operator:
    ///
    /// ```text
    /// rgb = o.rgb * o.a + rgb * (1 - o.a)
    /// a   = o.a + a * (1 - o.a)
    /// ```
    ///
    /// A fully transparent `o` changes nothing, including the transparent flag
    ///
    ///     use sraster::Color;
    ///
    ///     let mut c = Color::clear();
    ///     c.draw(&Color::new(1.0, 0.0, 0.0, 0.0));
    ///     assert!(c.transparent);
    ///     c.draw(&Color::new(1.0, 0.0, 0.0, 0.5));
    ///     assert!(!c.transparent);
    ///     assert_eq!(c.a, 0.5);
    ///
    pub fn draw(&mut self, o: &Color) {
        if o.a == 0.0 {
            return;
        }
        let u = 1.0 - o.a;
        for (c, oc) in self.rgb.iter_mut().zip(o.rgb.iter()) {
            *c = oc * o.a + *c * u;
        }
        self.a = o.a + self.a * u;
        self.transparent = false;
    }
    /// Overwrite the color components, alpha is untouched
    pub fn fill(&mut self, r: f64, g: f64, b: f64) {
        self.rgb = [r, g, b];
    }
    /// Copy with alpha scaled by `k`
    pub fn fainter(&self, k: f64) -> Color {
        Color { a: self.a * k, ..*self }
    }
    /// Bytes of a PPM pixel
    ///
    /// Components are premultiplied by alpha and gamma encoded
    pub fn as_ppm(&self) -> [u8; 3] {
        [gamma_u8(self.rgb[0] * self.a),
         gamma_u8(self.rgb[1] * self.a),
         gamma_u8(self.rgb[2] * self.a)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})",
               self.rgb[0], self.rgb[1], self.rgb[2], self.a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`, the `#` is optional
///
///     use sraster::Color;
///
///     let c: Color = "#ff000080".parse().unwrap();
///     assert_eq!(c.rgb, [1.0, 0.0, 0.0]);
///     assert_eq!(c.a, 128.0 / 255.0);
///     assert!("#12345".parse::<Color>().is_err());
///
impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let mut v = [1.0; 4];
        for (i, out) in v.iter_mut().enumerate().take(hex.len() / 2) {
            let byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
                .map_err(|_| Error::InvalidColor(s.to_string()))?;
            *out = f64::from(byte) / 255.0;
        }
        Ok(Color::new(v[0], v[1], v[2], v[3]))
    }
}
