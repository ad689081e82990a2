//! Color values shared between the color state, materials and overlays.
//!
//! Colors travel through the timeline as CSS-style strings ([`ColorValue`]):
//! authored keyframes use hex literals, interpolation produces
//! `rgba(r,g,b,a)` strings. [`Color`] is the parsed form used for
//! interpolation and for material colors.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShowcaseError};

/// A color expressed as a string: hex (`#8c8c8c`), functional
/// (`rgba(140,140,140,1)`) or a handful of named colors.
pub type ColorValue = String;

/// RGBA color with 0..=255 channels and alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Builds an opaque color from a packed `0xRRGGBB` literal.
    #[must_use]
    pub fn from_hex_u32(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xff) as f32,
            ((hex >> 8) & 0xff) as f32,
            (hex & 0xff) as f32,
        )
    }

    /// Parses a hex, `rgb()`/`rgba()` or named color.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(inner) = functional_inner(trimmed) {
            parse_functional(inner)
        } else {
            named(trimmed)
        };
        parsed.ok_or_else(|| ShowcaseError::InvalidColor(input.to_string()))
    }

    /// Normalized linear-in-value RGBA, as stored in material colors.
    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a)
    }

    /// Inverse of [`Color::to_vec4`].
    #[must_use]
    pub fn from_vec4(v: Vec4) -> Self {
        Self::rgba(v.x * 255.0, v.y * 255.0, v.z * 255.0, v.w)
    }

    #[must_use]
    pub fn lerp(self, end: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (end.r - self.r) * t,
            self.g + (end.g - self.g) * t,
            self.b + (end.b - self.b) * t,
            self.a + (end.a - self.a) * t,
        )
    }

    /// Formats as `rgba(r,g,b,a)` with integer channels, the form produced by
    /// scroll interpolation.
    #[must_use]
    pub fn to_css_rgba(self) -> String {
        let alpha = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!(
            "rgba({},{},{},{})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            alpha
        )
    }

    /// Formats as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl FromStr for Color {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_rgba())
    }
}

/// Strips the alpha channel from an `rgba(...)` color.
///
/// The renderer's color setter takes no alpha, so interpolated
/// `rgba(r,g,b,a)` strings are reduced to `rgb(r,g,b)`. Anything that is not
/// a functional color with at least three numeric components (hex, named
/// colors, malformed input) is returned unchanged.
#[must_use]
pub fn convert_rgba_to_rgb(color: &str) -> Cow<'_, str> {
    let Some(inner) = functional_inner(color.trim()) else {
        return Cow::Borrowed(color);
    };

    let components: Vec<&str> = split_components(inner).collect();
    if components.len() < 3 || !components[..3].iter().all(|c| c.parse::<f32>().is_ok()) {
        return Cow::Borrowed(color);
    }

    Cow::Owned(format!(
        "rgb({},{},{})",
        components[0], components[1], components[2]
    ))
}

fn channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Returns the argument list of `rgb(...)` / `rgba(...)`, case-insensitive.
fn functional_inner(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let name = &s[..open];
    if !(name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba")) {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

fn split_components(inner: &str) -> impl Iterator<Item = &str> {
    inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|c| !c.is_empty())
}

fn parse_functional(inner: &str) -> Option<Color> {
    let mut values = split_components(inner).map(str::parse::<f32>);
    let r = values.next()?.ok()?;
    let g = values.next()?.ok()?;
    let b = values.next()?.ok()?;
    let a = match values.next() {
        Some(alpha) => alpha.ok()?,
        None => 1.0,
    };
    if values.next().is_some() {
        return None;
    }
    Some(Color::rgba(r, g, b, a))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| f32::from(v * 17));
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(f32::from);

    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)? / 255.0)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? / 255.0)),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "transparent" => Some(Color::TRANSPARENT),
        "gray" | "grey" => Some(Color::rgb(128.0, 128.0, 128.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn functional_rejects_extra_components() {
        assert!(Color::parse("rgba(1,2,3,0.5,9)").is_err());
    }

    #[test]
    fn css_rgba_rounds_channels() {
        let c = Color::rgba(139.6, 0.2, 255.4, 1.0);
        assert_eq!(c.to_css_rgba(), "rgba(140,0,255,1)");
    }
}
