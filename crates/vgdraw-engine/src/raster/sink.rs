use std::path::Path;

use crate::bitmap::PixelBuffer;
use crate::coords::{Rect, Vec2};
use crate::paint::FlatStops;

use super::{TextAlign, Transform, Typeface};

/// Call surface of the external vector rasterizer.
///
/// One method per device entry point. Coordinates are picture space: origin at
/// the bottom-left, +Y up. Implementations keep their own paint, transform and
/// clip state; callers only issue commands.
///
/// Contract:
/// - every call except `begin_picture` happens between `begin_picture` and
///   exactly one of `end_picture` / `end_picture_and_save`
/// - `push_clip_rect` / `pop_clip` are balanced within a picture
pub trait Rasterizer {
    // ── picture lifecycle ─────────────────────────────────────────────────

    fn begin_picture(&mut self, width: u32, height: u32);
    fn end_picture(&mut self);
    /// Ends the picture and writes the raw raster to `path`.
    fn end_picture_and_save(&mut self, path: &Path);

    // ── paint state ───────────────────────────────────────────────────────

    /// Clears the whole picture to a color.
    fn background(&mut self, r: u8, g: u8, b: u8, alpha: f32);
    fn set_fill(&mut self, r: u8, g: u8, b: u8, alpha: f32);
    fn set_stroke(&mut self, r: u8, g: u8, b: u8, alpha: f32);
    fn set_stroke_width(&mut self, width: f32);
    fn set_linear_gradient(&mut self, from: Vec2, to: Vec2, stops: &FlatStops);
    fn set_radial_gradient(&mut self, center: Vec2, focal: Vec2, radius: f32, stops: &FlatStops);

    // ── images ────────────────────────────────────────────────────────────

    /// Creates a texture from `pixels` and draws it with its bottom-left corner at `origin`.
    fn upload_image(&mut self, origin: Vec2, pixels: &PixelBuffer);

    // ── shapes ────────────────────────────────────────────────────────────

    fn draw_line(&mut self, from: Vec2, to: Vec2);
    fn draw_rect(&mut self, rect: Rect);
    fn draw_round_rect(&mut self, rect: Rect, corner: Vec2);
    fn draw_ellipse(&mut self, center: Vec2, size: Vec2);
    fn draw_circle(&mut self, center: Vec2, radius: f32);
    fn draw_quad_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2);
    fn draw_cubic_bezier(&mut self, start: Vec2, c1: Vec2, c2: Vec2, end: Vec2);
    /// Angles in degrees; `extent` is measured from `start`.
    fn draw_arc(&mut self, center: Vec2, size: Vec2, start: f32, extent: f32);
    fn draw_polygon(&mut self, points: &[Vec2]);
    fn draw_polyline(&mut self, points: &[Vec2]);

    // ── text ──────────────────────────────────────────────────────────────

    fn draw_text(&mut self, at: Vec2, text: &str, font: Typeface, size: u32, align: TextAlign);
    fn text_width(&self, text: &str, font: Typeface, size: u32) -> f32;
    /// Ascent above the baseline.
    fn text_height(&self, font: Typeface, size: u32) -> f32;
    /// Descent below the baseline.
    fn text_depth(&self, font: Typeface, size: u32) -> f32;

    // ── clipping & transform ──────────────────────────────────────────────

    fn push_clip_rect(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn pop_clip(&mut self);
    fn apply_transform(&mut self, step: Transform);
}
