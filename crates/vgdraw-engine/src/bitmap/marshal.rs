use super::BitmapSource;

/// Texture upload buffer.
///
/// Layout: `width * height * 4` bytes, row-major, RGBA, origin at the
/// bottom-left (first row is the bottom of the image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// One output row, counted from the bottom. `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * Self::BYTES_PER_PIXEL;
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }
}

/// Converts a top-left-origin 16-bit bitmap into a bottom-up RGBA8 buffer.
///
/// The last source row becomes the first output row; columns keep their
/// order. Each channel keeps only its high byte (`>> 8`), with no rounding and
/// no gamma handling.
pub fn marshal<B: BitmapSource + ?Sized>(bitmap: &B) -> PixelBuffer {
    let (width, height) = (bitmap.width(), bitmap.height());
    let len = width as usize * height as usize * PixelBuffer::BYTES_PER_PIXEL;
    let mut data = Vec::with_capacity(len);

    for row in 0..height {
        let src_y = height - 1 - row;
        for x in 0..width {
            let sample = bitmap.sample_rgba16(x, src_y);
            data.extend(sample.iter().map(|&channel| (channel >> 8) as u8));
        }
    }

    PixelBuffer { width, height, data }
}
