use crate::overlay::CssLength;
use crate::resources::color::{Color, ColorValue};

pub trait Interpolatable: Clone {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Color {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start.lerp(*end, t)
    }
}

impl Interpolatable for CssLength {
    /// Lengths in different units cannot be blended; the value jumps at the
    /// end of the tween.
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        if start.same_unit(*end) {
            start.with_value(f32::interpolate_linear(&start.value(), &end.value(), t))
        } else if t < 1.0 {
            *start
        } else {
            *end
        }
    }
}

/// Blends two color strings.
///
/// The endpoints are returned verbatim; in-between values are formatted as
/// `rgba(r,g,b,a)`. If either side does not parse, the start value holds
/// until the tween completes.
#[must_use]
pub fn interpolate_color_value(start: &str, end: &str, t: f32) -> ColorValue {
    if t <= 0.0 {
        return start.to_string();
    }
    if t >= 1.0 {
        return end.to_string();
    }
    match (Color::parse(start), Color::parse(end)) {
        (Ok(a), Ok(b)) => Color::interpolate_linear(&a, &b, t).to_css_rgba(),
        _ => start.to_string(),
    }
}
