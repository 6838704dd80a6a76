use super::Vec2;

/// Axis-aligned rectangle in picture space (bottom-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Corner opposite the origin (top-right for positive sizes).
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(1.0, 2.0, 10.0, 20.0).max(), Vec2::new(11.0, 22.0));
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(r(10.0, 10.0, 100.0, 50.0).center(), Vec2::new(60.0, 35.0));
    }
}
