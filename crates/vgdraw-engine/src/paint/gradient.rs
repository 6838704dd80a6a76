use std::fmt;

use bytemuck::{Pod, Zeroable};

use super::Rgba8;

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] in typical usage, but is not enforced.
/// Duplicate or out-of-order offsets are passed through unchanged; the
/// rasterizer decides what they mean.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Encoding failure for a gradient ramp.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientError {
    /// A ramp needs at least one stop.
    NoStops,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::NoStops => f.write_str("gradient has no stops"),
        }
    }
}

impl std::error::Error for GradientError {}

/// One encoded stop as the rasterizer reads it.
///
/// Field order is fixed: offset first, then the color normalized to [0, 1].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FlatStop {
    pub offset: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<GradientStop> for FlatStop {
    #[inline]
    fn from(stop: GradientStop) -> Self {
        let [r, g, b, a] = stop.color.to_unit();
        Self { offset: stop.offset, r, g, b, a }
    }
}

/// Flat stop buffer: `5 * count` floats, `(offset, r, g, b, a)` per stop.
///
/// Lives for one gradient-fill call.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatStops {
    records: Vec<FlatStop>,
}

impl FlatStops {
    pub const FLOATS_PER_STOP: usize = 5;

    /// Encodes `stops` in input order.
    ///
    /// Alpha comes from each stop's own color. An empty slice is rejected.
    pub fn encode(stops: &[GradientStop]) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::NoStops);
        }
        Ok(Self { records: stops.iter().copied().map(FlatStop::from).collect() })
    }

    /// Number of stops (not floats).
    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The buffer viewed as plain floats.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.records)
    }

    #[inline]
    pub fn records(&self) -> &[FlatStop] {
        &self.records
    }
}
