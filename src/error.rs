//! Errors

use crate::shape::ShapeType;

use thiserror::Error;

/// Errors from parsing and file output
///
/// Geometry and rasterization never fail; only decoding shapes, colors and
/// settings or writing images does.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} expects {expected} parameters, found {found}")]
    ParameterCount {
        kind: ShapeType,
        expected: &'static str,
        found: usize,
    },
    #[error("convex polygon needs at least 3 distinct vertices, found {0}")]
    DegeneratePolygon(usize),
    #[error("unknown shape type `{0}`")]
    UnknownShape(String),
    #[error("invalid color `{0}`, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("image is empty ({0}x{1})")]
    EmptyImage(usize, usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
