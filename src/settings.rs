//! Render settings

use crate::buffer::Image;
use crate::color::Color;
use crate::error::Result;

use serde::{Deserialize, Serialize};

use std::path::Path;

/// Output size and sampling
///
/// Missing fields take their default values
///
///     use sraster::RenderSettings;
///
///     let s = RenderSettings::from_toml_str("width = 64\nsuper_sampling = 2").unwrap();
///     assert_eq!((s.width, s.height, s.super_sampling), (64, 512, 2));
///     assert_eq!(s.background, None);
///
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Samples per pixel along each axis
    pub super_sampling: usize,
    /// Initial pixel color, transparent if missing
    pub background: Option<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { width: 512, height: 512, super_sampling: 6, background: None }
    }
}

impl RenderSettings {
    /// Parse settings from TOML
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut settings : RenderSettings = toml::from_str(s)?;
        settings.super_sampling = settings.super_sampling.max(1);
        Ok(settings)
    }
    /// Read settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let text = std::fs::read_to_string(filename)?;
        Self::from_toml_str(&text)
    }
    /// Blank image of the configured size
    pub fn image(&self) -> Image {
        match self.background {
            Some(c) => Image::with_background(self.width, self.height, c),
            None => Image::new(self.width, self.height),
        }
    }
}
