use crate::coords::{Rect, Vec2};
use crate::raster::{Rasterizer, TextAlign};

use super::Picture;

impl<R: Rasterizer> Picture<'_, R> {
    /// Stand-in for an image that could not be loaded: a filled box, a
    /// corner-to-corner cross and `caption` centered inside.
    ///
    /// Leaves the fill set to the caption color and the stroke width at zero.
    pub(super) fn placeholder(&mut self, rect: Rect, caption: &str) {
        let style = self.canvas.config.placeholder.clone();
        let (min, max) = (rect.origin, rect.max());

        let (r, g, b, a) = style.fill.unwrap_rgba();
        self.sink().set_fill(r, g, b, a);
        self.sink().draw_rect(rect);

        self.sink().set_stroke_width(1.0);
        let (r, g, b, a) = style.stroke.unwrap_rgba();
        self.sink().set_stroke(r, g, b, a);
        self.sink().draw_line(min, max);
        self.sink().draw_line(Vec2::new(min.x, max.y), Vec2::new(max.x, min.y));
        self.sink().set_stroke_width(0.0);

        let (r, g, b, a) = style.caption.unwrap_rgba();
        self.sink().set_fill(r, g, b, a);
        let center = rect.center();
        let size = (rect.size.x / 20.0).max(0.0) as u32;
        self.draw_text(center.x, center.y, caption, style.font, size, TextAlign::Middle);
    }
}
