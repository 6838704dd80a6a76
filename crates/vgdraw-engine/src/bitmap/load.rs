use std::path::Path;

use anyhow::{Context, Result};
use image::ImageReader;

use super::Rgba16Bitmap;

/// Opens and decodes an image file, widening it to 16-bit RGBA.
///
/// The format is sniffed from the file contents, not the extension.
pub fn load_bitmap(path: impl AsRef<Path>) -> Result<Rgba16Bitmap> {
    let path = path.as_ref();

    let reader = ImageReader::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to read image header {}", path.display()))?;

    let decoded = reader
        .decode()
        .with_context(|| format!("failed to decode image {}", path.display()))?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgba16())
}
