//! Picture-space geometry.
//!
//! Picture space matches the rasterizer:
//! - units are device pixels
//! - origin bottom-left
//! - +X right, +Y up

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
