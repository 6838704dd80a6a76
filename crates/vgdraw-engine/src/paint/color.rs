/// Straight-alpha 8-bit RGBA color.
///
/// This is the value the resolver produces and the unit gradient stops are
/// expressed in. Every channel is a plain byte, so a constructed value is
/// always well-formed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fallback for color specs that cannot be resolved: opaque black.
    pub const SENTINEL: Rgba8 = Rgba8::rgb(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Splits the color into RGB bytes and a normalized alpha (`a / 255`).
    #[inline]
    pub fn unwrap_rgba(self) -> (u8, u8, u8, f32) {
        (self.r, self.g, self.b, self.a as f32 / 255.0)
    }

    /// RGB bytes only; alpha is discarded.
    #[inline]
    pub fn unwrap_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels normalized to `[0, 1]` in `r, g, b, a` order.
    #[inline]
    pub fn to_unit(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}
