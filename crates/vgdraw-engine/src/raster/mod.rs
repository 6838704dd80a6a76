//! Boundary to the external vector rasterizer.
//!
//! The engine never draws anything itself. Every primitive is forwarded to a
//! [`Rasterizer`] implementation, which owns the device, the current
//! transform, the clip stack and font rendering.

mod font;
mod recording;
mod sink;
mod transform;

pub use font::{TextAlign, Typeface};
pub use recording::{RasterCall, RecordingRasterizer};
pub use sink::Rasterizer;
pub use transform::Transform;
