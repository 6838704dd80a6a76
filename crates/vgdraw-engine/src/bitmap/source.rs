use std::ops::Deref;

use image::{ImageBuffer, Rgba};

/// Decoded 16-bit RGBA image, the form [`load_bitmap`](super::load_bitmap) returns.
pub type Rgba16Bitmap = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Read access to a decoded bitmap.
///
/// Coordinates are top-left origin, +Y down. Samples are 16 bits per channel;
/// whether they are premultiplied depends on the decoder and is not
/// normalized here.
pub trait BitmapSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn sample_rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

impl<C> BitmapSource for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    #[inline]
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    #[inline]
    fn sample_rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0
    }
}
