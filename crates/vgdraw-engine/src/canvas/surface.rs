use crate::raster::Rasterizer;

use super::{CanvasConfig, Picture};

/// Drawing surface bound to one rasterizer.
///
/// A canvas does nothing on its own; open a [`Picture`] to draw.
#[derive(Debug)]
pub struct Canvas<R: Rasterizer> {
    pub(super) sink: R,
    pub(super) config: CanvasConfig,
}

impl<R: Rasterizer> Canvas<R> {
    pub fn new(sink: R) -> Self {
        Self::with_config(sink, CanvasConfig::default())
    }

    pub fn with_config(sink: R, config: CanvasConfig) -> Self {
        Self { sink, config }
    }

    #[inline]
    pub fn rasterizer(&self) -> &R {
        &self.sink
    }

    /// Opens a `width x height` picture.
    ///
    /// The picture is ended when the returned guard is ended or dropped.
    pub fn begin(&mut self, width: u32, height: u32) -> Picture<'_, R> {
        log::debug!("begin picture {width}x{height}");
        self.sink.begin_picture(width, height);
        Picture::new(self)
    }

    /// Opens a picture and clears it to the named color.
    pub fn begin_with_background(
        &mut self,
        width: u32,
        height: u32,
        color: &str,
        alpha: Option<f32>,
    ) -> Picture<'_, R> {
        let mut picture = self.begin(width, height);
        picture.background_color(color, alpha);
        picture
    }
}
