//! Bitmap → texture marshaling.
//!
//! Decoded images arrive top-left origin with 16-bit channels; the rasterizer
//! wants a tightly packed RGBA8 buffer with its origin at the bottom-left.

mod load;
mod marshal;
mod source;

pub use load::load_bitmap;
pub use marshal::{marshal, PixelBuffer};
pub use source::{BitmapSource, Rgba16Bitmap};
