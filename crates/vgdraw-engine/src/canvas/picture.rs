use std::path::Path;

use crate::bitmap::{load_bitmap, marshal, BitmapSource};
use crate::coords::{Rect, Vec2};
use crate::paint::{resolve, resolve_strict, FlatStops, GradientStop, Rgba8};
use crate::raster::{Rasterizer, TextAlign, Transform, Typeface};

use super::{Canvas, CanvasError};

/// An open picture: one bounded drawing session.
///
/// Ending is guaranteed: call [`end`](Self::end) or
/// [`end_and_save`](Self::end_and_save), or let the guard drop. Any clip
/// regions still open are popped first.
///
/// Methods without a `try_` prefix never fail. Bad colors become opaque
/// black, empty gradients are skipped and unreadable images are replaced by a
/// placeholder. The `try_` variants report those cases instead and leave the
/// rasterizer untouched.
pub struct Picture<'c, R: Rasterizer> {
    pub(super) canvas: &'c mut Canvas<R>,
    clip_depth: usize,
    ended: bool,
}

impl<'c, R: Rasterizer> Picture<'c, R> {
    pub(super) fn new(canvas: &'c mut Canvas<R>) -> Self {
        Self { canvas, clip_depth: 0, ended: false }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    pub fn end(mut self) {
        self.finish(None);
    }

    /// Ends the picture and has the rasterizer persist the raw raster to `path`.
    pub fn end_and_save(mut self, path: impl AsRef<Path>) {
        self.finish(Some(path.as_ref()));
    }

    fn finish(&mut self, save: Option<&Path>) {
        if self.ended {
            return;
        }
        self.ended = true;

        if self.clip_depth > 0 {
            log::warn!("picture ended with {} open clip region(s)", self.clip_depth);
            while self.clip_depth > 0 {
                self.sink().pop_clip();
                self.clip_depth -= 1;
            }
        }

        match save {
            Some(path) => {
                log::debug!("end picture, saving to {}", path.display());
                self.sink().end_picture_and_save(path);
            }
            None => {
                log::debug!("end picture");
                self.sink().end_picture();
            }
        }
    }

    #[inline]
    pub(super) fn sink(&mut self) -> &mut R {
        &mut self.canvas.sink
    }

    fn alpha(&self, alpha: Option<f32>) -> f32 {
        alpha.unwrap_or(self.canvas.config.default_alpha).clamp(0.0, 1.0)
    }

    // ── colors ────────────────────────────────────────────────────────────

    /// Clears the picture to an RGB color.
    pub fn background_rgb(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.sink().background(r, g, b, alpha.clamp(0.0, 1.0));
    }

    pub fn background_color(&mut self, color: &str, alpha: Option<f32>) {
        let (r, g, b) = resolve(color).unwrap_rgb();
        let a = self.alpha(alpha);
        self.sink().background(r, g, b, a);
    }

    pub fn try_background_color(
        &mut self,
        color: &str,
        alpha: Option<f32>,
    ) -> Result<(), CanvasError> {
        let (r, g, b) = resolve_strict(color)?.unwrap_rgb();
        let a = self.alpha(alpha);
        self.sink().background(r, g, b, a);
        Ok(())
    }

    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.sink().set_fill(r, g, b, alpha.clamp(0.0, 1.0));
    }

    pub fn stroke_rgb(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.sink().set_stroke(r, g, b, alpha.clamp(0.0, 1.0));
    }

    /// Sets the fill from a color spec. `alpha` overrides the configured default.
    pub fn fill_color(&mut self, color: &str, alpha: Option<f32>) {
        let color = resolve(color);
        self.fill(color, alpha);
    }

    pub fn try_fill_color(&mut self, color: &str, alpha: Option<f32>) -> Result<(), CanvasError> {
        let color = resolve_strict(color)?;
        self.fill(color, alpha);
        Ok(())
    }

    /// Sets the stroke from a color spec. `alpha` overrides the configured default.
    pub fn stroke_color(&mut self, color: &str, alpha: Option<f32>) {
        let color = resolve(color);
        self.stroke(color, alpha);
    }

    pub fn try_stroke_color(&mut self, color: &str, alpha: Option<f32>) -> Result<(), CanvasError> {
        let color = resolve_strict(color)?;
        self.stroke(color, alpha);
        Ok(())
    }

    fn fill(&mut self, color: Rgba8, alpha: Option<f32>) {
        let (r, g, b) = color.unwrap_rgb();
        let a = self.alpha(alpha);
        self.sink().set_fill(r, g, b, a);
    }

    fn stroke(&mut self, color: Rgba8, alpha: Option<f32>) {
        let (r, g, b) = color.unwrap_rgb();
        let a = self.alpha(alpha);
        self.sink().set_stroke(r, g, b, a);
    }

    pub fn stroke_width(&mut self, width: f32) {
        self.sink().set_stroke_width(width);
    }

    // ── gradients ─────────────────────────────────────────────────────────

    /// Fills with a linear gradient from `(x1, y1)` to `(x2, y2)`.
    ///
    /// An empty ramp is logged and ignored; the previous fill stays active.
    pub fn fill_linear_gradient(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stops: &[GradientStop],
    ) {
        if let Err(err) = self.try_fill_linear_gradient(x1, y1, x2, y2, stops) {
            log::warn!("linear gradient skipped: {err}");
        }
    }

    pub fn try_fill_linear_gradient(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stops: &[GradientStop],
    ) -> Result<(), CanvasError> {
        let ramp = FlatStops::encode(stops)?;
        self.sink().set_linear_gradient(Vec2::new(x1, y1), Vec2::new(x2, y2), &ramp);
        Ok(())
    }

    /// Fills with a radial gradient centered at `(cx, cy)` with focal point `(fx, fy)`.
    ///
    /// An empty ramp is logged and ignored; the previous fill stays active.
    pub fn fill_radial_gradient(
        &mut self,
        cx: f32,
        cy: f32,
        fx: f32,
        fy: f32,
        radius: f32,
        stops: &[GradientStop],
    ) {
        if let Err(err) = self.try_fill_radial_gradient(cx, cy, fx, fy, radius, stops) {
            log::warn!("radial gradient skipped: {err}");
        }
    }

    pub fn try_fill_radial_gradient(
        &mut self,
        cx: f32,
        cy: f32,
        fx: f32,
        fy: f32,
        radius: f32,
        stops: &[GradientStop],
    ) -> Result<(), CanvasError> {
        let ramp = FlatStops::encode(stops)?;
        self.sink()
            .set_radial_gradient(Vec2::new(cx, cy), Vec2::new(fx, fy), radius, &ramp);
        Ok(())
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Uploads an already decoded bitmap with its bottom-left corner at `(x, y)`.
    pub fn place_bitmap<B: BitmapSource + ?Sized>(&mut self, x: f32, y: f32, bitmap: &B) {
        let pixels = marshal(bitmap);
        self.sink().upload_image(Vec2::new(x, y), &pixels);
    }

    /// Places the image file at `path` with its bottom-left corner at `(x, y)`.
    ///
    /// The image is drawn at its native size. `w` and `h` size the placeholder
    /// drawn instead when the file cannot be opened or decoded.
    pub fn image(&mut self, x: f32, y: f32, w: u32, h: u32, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.try_image(x, y, path) {
            log::warn!("{err}; drawing placeholder");
            self.placeholder(Rect::new(x, y, w as f32, h as f32), &path.display().to_string());
        }
    }

    pub fn try_image(&mut self, x: f32, y: f32, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let bitmap = load_bitmap(path).map_err(CanvasError::Image)?;
        self.place_bitmap(x, y, &bitmap);
        Ok(())
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.sink().draw_line(Vec2::new(x1, y1), Vec2::new(x2, y2));
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.sink().draw_rect(Rect::new(x, y, w, h));
    }

    /// Rectangle with corner radii `(rw, rh)`.
    pub fn round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32) {
        self.sink().draw_round_rect(Rect::new(x, y, w, h), Vec2::new(rw, rh));
    }

    /// Ellipse centered at `(x, y)` with extent `(w, h)`.
    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.sink().draw_ellipse(Vec2::new(x, y), Vec2::new(w, h));
    }

    pub fn circle(&mut self, x: f32, y: f32, r: f32) {
        self.sink().draw_circle(Vec2::new(x, y), r);
    }

    pub fn quad_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2) {
        self.sink().draw_quad_bezier(start, control, end);
    }

    pub fn cubic_bezier(&mut self, start: Vec2, c1: Vec2, c2: Vec2, end: Vec2) {
        self.sink().draw_cubic_bezier(start, c1, c2, end);
    }

    /// Arc of the ellipse centered at `(x, y)`, from `start` degrees sweeping `extent` degrees.
    pub fn arc(&mut self, x: f32, y: f32, w: f32, h: f32, start: f32, extent: f32) {
        self.sink().draw_arc(Vec2::new(x, y), Vec2::new(w, h), start, extent);
    }

    /// Closed, filled polygon. An empty point list draws nothing.
    pub fn polygon(&mut self, points: &[Vec2]) {
        if points.is_empty() {
            log::debug!("empty polygon skipped");
            return;
        }
        self.sink().draw_polygon(points);
    }

    /// Open polyline. An empty point list draws nothing.
    pub fn polyline(&mut self, points: &[Vec2]) {
        if points.is_empty() {
            log::debug!("empty polyline skipped");
            return;
        }
        self.sink().draw_polyline(points);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Text starting at `(x, y)`. `font` is a family name, see [`Typeface::select`].
    pub fn text(&mut self, x: f32, y: f32, text: &str, font: &str, size: u32) {
        self.draw_text(x, y, text, Typeface::select(font), size, TextAlign::Start);
    }

    /// Text centered on `(x, y)`.
    pub fn text_mid(&mut self, x: f32, y: f32, text: &str, font: &str, size: u32) {
        self.draw_text(x, y, text, Typeface::select(font), size, TextAlign::Middle);
    }

    /// Text ending at `(x, y)`.
    pub fn text_end(&mut self, x: f32, y: f32, text: &str, font: &str, size: u32) {
        self.draw_text(x, y, text, Typeface::select(font), size, TextAlign::End);
    }

    pub(super) fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: Typeface,
        size: u32,
        align: TextAlign,
    ) {
        self.sink().draw_text(Vec2::new(x, y), text, font, size, align);
    }

    pub fn text_width(&self, text: &str, font: &str, size: u32) -> f32 {
        self.canvas.sink.text_width(text, Typeface::select(font), size)
    }

    pub fn text_height(&self, font: &str, size: u32) -> f32 {
        self.canvas.sink.text_height(Typeface::select(font), size)
    }

    pub fn text_depth(&self, font: &str, size: u32) -> f32 {
        self.canvas.sink.text_depth(Typeface::select(font), size)
    }

    // ── transform ─────────────────────────────────────────────────────────

    pub fn translate(&mut self, x: f32, y: f32) {
        self.sink().apply_transform(Transform::Translate { x, y });
    }

    /// Rotates by `degrees` counter-clockwise.
    pub fn rotate(&mut self, degrees: f32) {
        self.sink().apply_transform(Transform::Rotate { degrees });
    }

    pub fn shear(&mut self, x: f32, y: f32) {
        self.sink().apply_transform(Transform::Shear { x, y });
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.sink().apply_transform(Transform::Scale { x, y });
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Limits drawing to a rectangle. Must be paired with [`clip_end`](Self::clip_end).
    pub fn clip_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.sink().push_clip_rect(x, y, w, h);
        self.clip_depth += 1;
    }

    /// Ends the most recent clip region. Unmatched calls are ignored.
    pub fn clip_end(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("clip_end without matching clip_rect ignored");
            return;
        }
        self.clip_depth -= 1;
        self.sink().pop_clip();
    }
}

impl<R: Rasterizer> Drop for Picture<'_, R> {
    fn drop(&mut self) {
        self.finish(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::raster::{RasterCall, RecordingRasterizer};

    fn canvas() -> Canvas<RecordingRasterizer> {
        Canvas::new(RecordingRasterizer::new())
    }

    fn calls(canvas: &Canvas<RecordingRasterizer>) -> &[RasterCall] {
        canvas.rasterizer().calls()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn explicit_end_emits_one_end_call() {
        let mut c = canvas();
        c.begin(100, 50).end();
        assert_eq!(
            calls(&c),
            &[RasterCall::BeginPicture { width: 100, height: 50 }, RasterCall::EndPicture]
        );
    }

    #[test]
    fn dropping_the_guard_ends_the_picture() {
        let mut c = canvas();
        {
            let mut pic = c.begin(10, 10);
            pic.rect(0.0, 0.0, 1.0, 1.0);
        }
        assert_eq!(calls(&c).last(), Some(&RasterCall::EndPicture));
        assert_eq!(c.rasterizer().count(|k| *k == RasterCall::EndPicture), 1);
    }

    #[test]
    fn end_and_save_replaces_plain_end() {
        let mut c = canvas();
        c.begin(10, 10).end_and_save("out.raw");
        assert_eq!(
            calls(&c).last(),
            Some(&RasterCall::EndPictureAndSave("out.raw".into()))
        );
        assert_eq!(c.rasterizer().count(|k| *k == RasterCall::EndPicture), 0);
    }

    #[test]
    fn begin_with_background_clears_to_color() {
        let mut c = canvas();
        c.begin_with_background(4, 4, "navy", Some(0.5)).end();
        assert_eq!(calls(&c)[1], RasterCall::Background { r: 0, g: 0, b: 128, alpha: 0.5 });
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn fill_color_defaults_to_opaque() {
        let mut c = canvas();
        c.begin(1, 1).fill_color("tomato", None);
        assert_eq!(calls(&c)[1], RasterCall::SetFill { r: 255, g: 99, b: 71, alpha: 1.0 });
    }

    #[test]
    fn alpha_override_is_clamped() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            pic.stroke_color("white", Some(0.25));
            pic.stroke_color("white", Some(7.0));
        }
        assert_eq!(calls(&c)[1], RasterCall::SetStroke { r: 255, g: 255, b: 255, alpha: 0.25 });
        assert_eq!(calls(&c)[2], RasterCall::SetStroke { r: 255, g: 255, b: 255, alpha: 1.0 });
    }

    #[test]
    fn unknown_color_degrades_to_black() {
        let mut c = canvas();
        c.begin(1, 1).fill_color("not-a-color", None);
        assert_eq!(calls(&c)[1], RasterCall::SetFill { r: 0, g: 0, b: 0, alpha: 1.0 });
    }

    #[test]
    fn strict_color_reports_and_skips_sink() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            let err = pic.try_fill_color("rgb(1,2)", None).unwrap_err();
            assert!(matches!(err, CanvasError::Color(_)));
            pic.try_stroke_color("rgb(1,2,3)", Some(0.5)).unwrap();
        }
        assert_eq!(
            calls(&c)[1..],
            [
                RasterCall::SetStroke { r: 1, g: 2, b: 3, alpha: 0.5 },
                RasterCall::EndPicture,
            ]
        );
    }

    #[test]
    fn configured_default_alpha_applies() {
        let config = crate::canvas::CanvasConfig { default_alpha: 0.5, ..Default::default() };
        let mut c = Canvas::with_config(RecordingRasterizer::new(), config);
        c.begin(1, 1).fill_color("red", None);
        assert_eq!(calls(&c)[1], RasterCall::SetFill { r: 255, g: 0, b: 0, alpha: 0.5 });
    }

    // ── gradients ─────────────────────────────────────────────────────────

    #[test]
    fn linear_gradient_forwards_flat_stops() {
        let stops = [
            GradientStop::new(0.0, Rgba8::new(255, 0, 0, 255)),
            GradientStop::new(1.0, Rgba8::new(0, 0, 255, 255)),
        ];
        let mut c = canvas();
        c.begin(1, 1).fill_linear_gradient(0.0, 0.0, 10.0, 0.0, &stops);
        assert_eq!(
            calls(&c)[1],
            RasterCall::SetLinearGradient {
                from: Vec2::new(0.0, 0.0),
                to: Vec2::new(10.0, 0.0),
                stops: vec![0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0],
                count: 2,
            }
        );
    }

    #[test]
    fn radial_gradient_forwards_geometry() {
        let stops = [GradientStop::new(0.5, Rgba8::rgb(255, 255, 255))];
        let mut c = canvas();
        c.begin(1, 1).fill_radial_gradient(5.0, 5.0, 4.0, 6.0, 3.0, &stops);
        match &calls(&c)[1] {
            RasterCall::SetRadialGradient { center, focal, radius, stops, count } => {
                assert_eq!((*center, *focal), (Vec2::new(5.0, 5.0), Vec2::new(4.0, 6.0)));
                assert_eq!(*radius, 3.0);
                assert_eq!(stops, &vec![0.5, 1.0, 1.0, 1.0, 1.0]);
                assert_eq!(*count, 1);
            }
            other => panic!("expected radial gradient, got {other:?}"),
        }
    }

    #[test]
    fn empty_gradient_is_skipped_leniently() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            pic.fill_linear_gradient(0.0, 0.0, 1.0, 1.0, &[]);
            pic.fill_radial_gradient(0.0, 0.0, 0.0, 0.0, 1.0, &[]);
        }
        assert_eq!(calls(&c).len(), 2);
    }

    #[test]
    fn empty_gradient_is_an_error_strictly() {
        let mut c = canvas();
        let mut pic = c.begin(1, 1);
        let err = pic.try_fill_linear_gradient(0.0, 0.0, 1.0, 1.0, &[]).unwrap_err();
        assert!(matches!(err, CanvasError::Gradient(crate::paint::GradientError::NoStops)));
    }

    // ── shapes, text, transform ───────────────────────────────────────────

    #[test]
    fn shapes_forward_arguments() {
        let mut c = canvas();
        {
            let mut pic = c.begin(100, 100);
            pic.line(0.0, 0.0, 10.0, 10.0);
            pic.round_rect(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
            pic.arc(50.0, 50.0, 20.0, 10.0, 0.0, 90.0);
            pic.cubic_bezier(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 2.0),
                Vec2::new(3.0, 4.0),
                Vec2::new(5.0, 0.0),
            );
        }
        assert_eq!(
            calls(&c)[1..5],
            [
                RasterCall::Line { from: Vec2::new(0.0, 0.0), to: Vec2::new(10.0, 10.0) },
                RasterCall::RoundRect {
                    rect: Rect::new(1.0, 2.0, 3.0, 4.0),
                    corner: Vec2::new(5.0, 6.0),
                },
                RasterCall::Arc {
                    center: Vec2::new(50.0, 50.0),
                    size: Vec2::new(20.0, 10.0),
                    start: 0.0,
                    extent: 90.0,
                },
                RasterCall::CubicBezier {
                    start: Vec2::new(0.0, 0.0),
                    c1: Vec2::new(1.0, 2.0),
                    c2: Vec2::new(3.0, 4.0),
                    end: Vec2::new(5.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn empty_point_lists_are_skipped() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            pic.polygon(&[]);
            pic.polyline(&[]);
            pic.polyline(&[Vec2::new(1.0, 1.0)]);
            pic.polygon(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
        }
        assert_eq!(calls(&c).len(), 4);
        assert_eq!(calls(&c)[1], RasterCall::Polyline(vec![Vec2::new(1.0, 1.0)]));
        assert!(matches!(calls(&c)[2], RasterCall::Polygon(ref pts) if pts.len() == 3));
    }

    #[test]
    fn text_selects_typeface_and_alignment() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            pic.text(1.0, 2.0, "a", "mono", 12);
            pic.text_mid(1.0, 2.0, "b", "nope", 12);
            pic.text_end(1.0, 2.0, "c", "helvetica", 12);
        }
        let aligns: Vec<(Typeface, TextAlign)> = calls(&c)
            .iter()
            .filter_map(|call| match call {
                RasterCall::Text { font, align, .. } => Some((*font, *align)),
                _ => None,
            })
            .collect();
        assert_eq!(
            aligns,
            vec![
                (Typeface::Mono, TextAlign::Start),
                (Typeface::Serif, TextAlign::Middle),
                (Typeface::Helvetica, TextAlign::End),
            ]
        );
    }

    #[test]
    fn text_metrics_come_from_the_rasterizer() {
        let mut c = canvas();
        let pic = c.begin(1, 1);
        assert!((pic.text_width("abcd", "sans", 10) - 24.0).abs() < 1e-4);
        assert_eq!(pic.text_height("sans", 20), 15.0);
        assert_eq!(pic.text_depth("sans", 20), 5.0);
    }

    #[test]
    fn transforms_are_forwarded_in_order() {
        let mut c = canvas();
        {
            let mut pic = c.begin(1, 1);
            pic.translate(10.0, 20.0);
            pic.rotate(45.0);
            pic.shear(0.5, 0.0);
            pic.scale(2.0, 2.0);
        }
        assert_eq!(
            calls(&c)[1..5],
            [
                RasterCall::Transform(Transform::Translate { x: 10.0, y: 20.0 }),
                RasterCall::Transform(Transform::Rotate { degrees: 45.0 }),
                RasterCall::Transform(Transform::Shear { x: 0.5, y: 0.0 }),
                RasterCall::Transform(Transform::Scale { x: 2.0, y: 2.0 }),
            ]
        );
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn open_clips_are_popped_before_end() {
        let mut c = canvas();
        {
            let mut pic = c.begin(10, 10);
            pic.clip_rect(0, 0, 5, 5);
            pic.clip_rect(1, 1, 2, 2);
            pic.clip_end();
        }
        let tail = &calls(&c)[3..];
        assert_eq!(tail, &[RasterCall::PopClip, RasterCall::PopClip, RasterCall::EndPicture]);
    }

    #[test]
    fn unmatched_clip_end_is_ignored() {
        let mut c = canvas();
        c.begin(1, 1).clip_end();
        assert_eq!(c.rasterizer().count(|k| *k == RasterCall::PopClip), 0);
    }
}
