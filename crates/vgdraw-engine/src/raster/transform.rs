/// One step applied to the rasterizer's current transform.
///
/// Steps compose onto whatever transform is already active; the engine does
/// not track the resulting matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    Translate { x: f32, y: f32 },
    /// Degrees, counter-clockwise.
    Rotate { degrees: f32 },
    Shear { x: f32, y: f32 },
    Scale { x: f32, y: f32 },
}
