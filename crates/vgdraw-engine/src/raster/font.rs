/// Built-in typefaces the rasterizer ships with.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Typeface {
    Sans,
    #[default]
    Serif,
    Mono,
    Helvetica,
}

impl Typeface {
    /// Maps a generic family name to a typeface. Unknown names get [`Typeface::Serif`].
    pub fn select(name: &str) -> Self {
        match name {
            "sans" => Typeface::Sans,
            "serif" => Typeface::Serif,
            "mono" => Typeface::Mono,
            "helvetica" => Typeface::Helvetica,
            _ => Typeface::Serif,
        }
    }
}

/// Horizontal anchoring of a text run relative to its `x` coordinate.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    Middle,
    End,
}
