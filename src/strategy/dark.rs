use crate::color::Color;
use crate::types::ColorPair;

/// Fill: the dark base, darkened 0.125, at 65% opacity. The light base is
/// unused — this strategy keys everything off the dark input.
pub fn fill(dark: &Color) -> Color {
    dark.darken(0.125).set_alpha(0.65)
}

/// Stroke: the dark base darkened 0.25 when it reads light, 0.30 otherwise.
pub fn stroke(dark: &Color) -> Color {
    let amount = if dark.is_light() { 0.25 } else { 0.30 };
    dark.darken(amount)
}

pub fn fill_style(_light: &Color, dark: &Color) -> String {
    fill(dark).render()
}

pub fn stroke_style(_light: &Color, dark: &Color) -> String {
    stroke(dark).render()
}

pub fn build_colors(light: &Color, dark: &Color) -> ColorPair {
    ColorPair::new(fill_style(light, dark), stroke_style(light, dark))
}
