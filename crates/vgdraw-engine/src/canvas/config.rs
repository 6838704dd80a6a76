use crate::paint::{resolve, Rgba8};
use crate::raster::Typeface;

/// Look of the stand-in drawn when an image cannot be opened or decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderStyle {
    pub fill: Rgba8,
    /// Color of the corner-to-corner cross.
    pub stroke: Rgba8,
    pub caption: Rgba8,
    pub font: Typeface,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            fill: resolve("lightgray"),
            stroke: resolve("gray"),
            caption: resolve("black"),
            font: Typeface::Sans,
        }
    }
}

/// Canvas configuration.
///
/// `default_alpha` is used by color setters when no alpha override is given.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub default_alpha: f32,
    pub placeholder: PlaceholderStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_alpha: 1.0,
            placeholder: PlaceholderStyle::default(),
        }
    }
}
