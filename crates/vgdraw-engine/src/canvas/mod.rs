//! Immediate-mode drawing facade.
//!
//! [`Canvas`] owns a [`Rasterizer`](crate::raster::Rasterizer) and opens
//! [`Picture`] scopes on it. All drawing goes through a `Picture`, so no
//! command can reach the rasterizer outside a begin/end pair.
//!
//! ```ignore
//! let mut canvas = Canvas::new(RecordingRasterizer::new());
//! let mut pic = canvas.begin_with_background(640, 480, "white", None);
//! pic.fill_color("tomato", Some(0.5));
//! pic.circle(320.0, 240.0, 100.0);
//! pic.end();
//! ```

mod config;
mod error;
mod picture;
mod placeholder;
mod surface;

pub use config::{CanvasConfig, PlaceholderStyle};
pub use error::CanvasError;
pub use picture::Picture;
pub use surface::Canvas;
