use std::fmt;

use crate::paint::{ColorError, GradientError};

/// Failure surfaced by the strict (`try_*`) drawing variants.
///
/// The lenient variants never return these; they log and substitute instead.
#[derive(Debug)]
pub enum CanvasError {
    Color(ColorError),
    Gradient(GradientError),
    /// The image could not be opened or decoded.
    Image(anyhow::Error),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Color(err) => write!(f, "color: {err}"),
            CanvasError::Gradient(err) => write!(f, "gradient: {err}"),
            CanvasError::Image(err) => write!(f, "image: {err:#}"),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Color(err) => Some(err),
            CanvasError::Gradient(err) => Some(err),
            CanvasError::Image(err) => Some(&**err),
        }
    }
}

impl From<ColorError> for CanvasError {
    fn from(err: ColorError) -> Self {
        CanvasError::Color(err)
    }
}

impl From<GradientError> for CanvasError {
    fn from(err: GradientError) -> Self {
        CanvasError::Gradient(err)
    }
}
