//! vgdraw engine crate.
//!
//! Immediate-mode 2D vector drawing on top of an external rasterizer. This
//! crate owns the color, gradient and image marshaling that sits between
//! drawing calls and the rasterizer's entry points.

pub mod bitmap;
pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
