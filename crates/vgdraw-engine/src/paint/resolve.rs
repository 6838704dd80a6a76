//! Color spec resolution.
//!
//! Accepted syntax:
//! - an SVG keyword from [`names`](super::names), matched exactly
//! - `rgb(r,g,b)` or `rgb(r,g,b,a)` with decimal integers in `0..=255`
//!
//! No whitespace is tolerated anywhere in the literal.

use std::fmt;

use super::{names, Rgba8};

/// Why a color spec could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a keyword and not an `rgb(` literal.
    UnknownName(String),
    /// Starts with `rgb(` but the body is not 3 or 4 byte-sized integers.
    MalformedRgb(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::UnknownName(s) => write!(f, "unknown color name {s:?}"),
            ColorError::MalformedRgb(s) => write!(f, "malformed rgb() literal {s:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Resolves a color spec, falling back to [`Rgba8::SENTINEL`] on any failure.
///
/// Drawing code uses this so a bad color never aborts a picture.
pub fn resolve(spec: &str) -> Rgba8 {
    resolve_strict(spec).unwrap_or_else(|err| {
        log::debug!("{err}; using opaque black");
        Rgba8::SENTINEL
    })
}

/// Resolves a color spec, surfacing failures instead of degrading.
pub fn resolve_strict(spec: &str) -> Result<Rgba8, ColorError> {
    if let Some(color) = names::lookup(spec) {
        return Ok(color);
    }
    match spec.strip_prefix("rgb(") {
        Some(body) => parse_rgb_body(body).ok_or_else(|| ColorError::MalformedRgb(spec.to_owned())),
        None => Err(ColorError::UnknownName(spec.to_owned())),
    }
}

/// Parses `r,g,b)` or `r,g,b,a)`; alpha defaults to opaque.
fn parse_rgb_body(body: &str) -> Option<Rgba8> {
    let inner = body.strip_suffix(')')?;

    let mut channels = [0u8, 0, 0, 255];
    let mut count = 0;
    for field in inner.split(',') {
        if count == channels.len() || !is_decimal(field) {
            return None;
        }
        channels[count] = field.parse().ok()?;
        count += 1;
    }

    if count < 3 {
        return None;
    }
    Some(Rgba8::from(channels))
}

fn is_decimal(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── keywords ──────────────────────────────────────────────────────────

    #[test]
    fn every_keyword_resolves_to_its_table_entry() {
        for (name, color) in names::names() {
            assert_eq!(resolve(name), color, "{name}");
            assert_eq!(resolve_strict(name), Ok(color), "{name}");
        }
    }

    #[test]
    fn unknown_keyword_falls_back_to_black() {
        assert_eq!(resolve("not-a-color"), Rgba8::new(0, 0, 0, 255));
        assert_eq!(resolve("Red"), Rgba8::SENTINEL);
        assert_eq!(resolve(""), Rgba8::SENTINEL);
    }

    // ── rgb() literals ────────────────────────────────────────────────────

    #[test]
    fn rgb_three_fields_keeps_opaque_alpha() {
        assert_eq!(resolve("rgb(12,34,56)"), Rgba8::new(12, 34, 56, 255));
    }

    #[test]
    fn rgb_four_fields_reads_alpha() {
        assert_eq!(resolve("rgb(255,0,0,128)"), Rgba8::new(255, 0, 0, 128));
    }

    #[test]
    fn rgb_too_few_fields_is_sentinel() {
        assert_eq!(resolve("rgb(1,2)"), Rgba8::new(0, 0, 0, 255));
        assert_eq!(resolve("rgb()"), Rgba8::SENTINEL);
    }

    #[test]
    fn rgb_too_many_fields_is_sentinel() {
        assert_eq!(resolve("rgb(1,2,3,4,5)"), Rgba8::SENTINEL);
    }

    #[test]
    fn rgb_non_numeric_or_out_of_range_is_sentinel() {
        assert_eq!(resolve("rgb(1,x,3)"), Rgba8::SENTINEL);
        assert_eq!(resolve("rgb(1,-2,3)"), Rgba8::SENTINEL);
        assert_eq!(resolve("rgb(256,0,0)"), Rgba8::SENTINEL);
        assert_eq!(resolve("rgb(1,,3)"), Rgba8::SENTINEL);
    }

    #[test]
    fn rgb_requires_exact_syntax() {
        assert_eq!(resolve("rgb(1, 2, 3)"), Rgba8::SENTINEL);
        assert_eq!(resolve("rgb(1,2,3"), Rgba8::SENTINEL);
        assert_eq!(resolve("rgb(1,2,3) "), Rgba8::SENTINEL);
        assert_eq!(resolve("RGB(1,2,3)"), Rgba8::SENTINEL);
    }

    // ── strict mode ───────────────────────────────────────────────────────

    #[test]
    fn strict_reports_unknown_name() {
        assert_eq!(
            resolve_strict("chartreusy"),
            Err(ColorError::UnknownName("chartreusy".into()))
        );
    }

    #[test]
    fn strict_reports_malformed_rgb() {
        assert_eq!(
            resolve_strict("rgb(1,2)"),
            Err(ColorError::MalformedRgb("rgb(1,2)".into()))
        );
    }

    #[test]
    fn strict_accepts_literals() {
        assert_eq!(resolve_strict("rgb(0,128,255)"), Ok(Rgba8::rgb(0, 128, 255)));
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn resolving_twice_is_identical() {
        for spec in ["tomato", "rgb(9,8,7,6)", "bogus", "rgb(1)"] {
            assert_eq!(resolve(spec), resolve(spec));
        }
    }
}
