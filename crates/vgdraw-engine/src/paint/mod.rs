//! Paint model handed to the rasterizer.
//!
//! Scope:
//! - 8-bit RGBA color and the SVG keyword table
//! - color spec resolution (`"tomato"`, `"rgb(1,2,3)"`)
//! - gradient ramps and their flat stop encoding

pub mod color;
pub mod gradient;
pub mod names;
pub mod resolve;

pub use color::Rgba8;
pub use gradient::{FlatStop, FlatStops, GradientError, GradientStop};
pub use resolve::{resolve, resolve_strict, ColorError};
