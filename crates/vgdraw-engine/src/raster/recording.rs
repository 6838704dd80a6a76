use std::path::{Path, PathBuf};

use crate::bitmap::PixelBuffer;
use crate::coords::{Rect, Vec2};
use crate::paint::FlatStops;

use super::{Rasterizer, TextAlign, Transform, Typeface};

/// A single rasterizer call captured by [`RecordingRasterizer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RasterCall {
    BeginPicture { width: u32, height: u32 },
    EndPicture,
    EndPictureAndSave(PathBuf),
    Background { r: u8, g: u8, b: u8, alpha: f32 },
    SetFill { r: u8, g: u8, b: u8, alpha: f32 },
    SetStroke { r: u8, g: u8, b: u8, alpha: f32 },
    SetStrokeWidth(f32),
    SetLinearGradient { from: Vec2, to: Vec2, stops: Vec<f32>, count: usize },
    SetRadialGradient { center: Vec2, focal: Vec2, radius: f32, stops: Vec<f32>, count: usize },
    UploadImage { origin: Vec2, width: u32, height: u32, pixels: Vec<u8> },
    Line { from: Vec2, to: Vec2 },
    Rect(Rect),
    RoundRect { rect: Rect, corner: Vec2 },
    Ellipse { center: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
    QuadBezier { start: Vec2, control: Vec2, end: Vec2 },
    CubicBezier { start: Vec2, c1: Vec2, c2: Vec2, end: Vec2 },
    Arc { center: Vec2, size: Vec2, start: f32, extent: f32 },
    Polygon(Vec<Vec2>),
    Polyline(Vec<Vec2>),
    Text { at: Vec2, text: String, font: Typeface, size: u32, align: TextAlign },
    PushClip { x: i32, y: i32, w: i32, h: i32 },
    PopClip,
    Transform(Transform),
}

/// Rasterizer that draws nothing and remembers every call in order.
///
/// Used as the test double for [`Canvas`](crate::canvas::Canvas) and as a
/// headless backend for tooling. Each call is also emitted at `trace` level.
///
/// Text metrics are estimates derived from the font size alone:
/// - width: `0.6 * size` per `char`
/// - height: `0.75 * size`
/// - depth: `0.25 * size`
#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    calls: Vec<RasterCall>,
}

impl RecordingRasterizer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    #[inline]
    pub fn calls(&self) -> &[RasterCall] {
        &self.calls
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&RasterCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&mut self, call: RasterCall) {
        log::trace!("{call:?}");
        self.calls.push(call);
    }
}

impl Rasterizer for RecordingRasterizer {
    fn begin_picture(&mut self, width: u32, height: u32) {
        self.record(RasterCall::BeginPicture { width, height });
    }

    fn end_picture(&mut self) {
        self.record(RasterCall::EndPicture);
    }

    fn end_picture_and_save(&mut self, path: &Path) {
        self.record(RasterCall::EndPictureAndSave(path.to_path_buf()));
    }

    fn background(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.record(RasterCall::Background { r, g, b, alpha });
    }

    fn set_fill(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.record(RasterCall::SetFill { r, g, b, alpha });
    }

    fn set_stroke(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.record(RasterCall::SetStroke { r, g, b, alpha });
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.record(RasterCall::SetStrokeWidth(width));
    }

    fn set_linear_gradient(&mut self, from: Vec2, to: Vec2, stops: &FlatStops) {
        self.record(RasterCall::SetLinearGradient {
            from,
            to,
            stops: stops.as_slice().to_vec(),
            count: stops.count(),
        });
    }

    fn set_radial_gradient(&mut self, center: Vec2, focal: Vec2, radius: f32, stops: &FlatStops) {
        self.record(RasterCall::SetRadialGradient {
            center,
            focal,
            radius,
            stops: stops.as_slice().to_vec(),
            count: stops.count(),
        });
    }

    fn upload_image(&mut self, origin: Vec2, pixels: &PixelBuffer) {
        self.record(RasterCall::UploadImage {
            origin,
            width: pixels.width,
            height: pixels.height,
            pixels: pixels.data.clone(),
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.record(RasterCall::Line { from, to });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.record(RasterCall::Rect(rect));
    }

    fn draw_round_rect(&mut self, rect: Rect, corner: Vec2) {
        self.record(RasterCall::RoundRect { rect, corner });
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2) {
        self.record(RasterCall::Ellipse { center, size });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32) {
        self.record(RasterCall::Circle { center, radius });
    }

    fn draw_quad_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2) {
        self.record(RasterCall::QuadBezier { start, control, end });
    }

    fn draw_cubic_bezier(&mut self, start: Vec2, c1: Vec2, c2: Vec2, end: Vec2) {
        self.record(RasterCall::CubicBezier { start, c1, c2, end });
    }

    fn draw_arc(&mut self, center: Vec2, size: Vec2, start: f32, extent: f32) {
        self.record(RasterCall::Arc { center, size, start, extent });
    }

    fn draw_polygon(&mut self, points: &[Vec2]) {
        self.record(RasterCall::Polygon(points.to_vec()));
    }

    fn draw_polyline(&mut self, points: &[Vec2]) {
        self.record(RasterCall::Polyline(points.to_vec()));
    }

    fn draw_text(&mut self, at: Vec2, text: &str, font: Typeface, size: u32, align: TextAlign) {
        self.record(RasterCall::Text { at, text: text.to_owned(), font, size, align });
    }

    fn text_width(&self, text: &str, _font: Typeface, size: u32) -> f32 {
        text.chars().count() as f32 * size as f32 * 0.6
    }

    fn text_height(&self, _font: Typeface, size: u32) -> f32 {
        size as f32 * 0.75
    }

    fn text_depth(&self, _font: Typeface, size: u32) -> f32 {
        size as f32 * 0.25
    }

    fn push_clip_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.record(RasterCall::PushClip { x, y, w, h });
    }

    fn pop_clip(&mut self) {
        self.record(RasterCall::PopClip);
    }

    fn apply_transform(&mut self, step: Transform) {
        self.record(RasterCall::Transform(step));
    }
}
