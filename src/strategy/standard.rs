use crate::color::Color;
use crate::types::ColorPair;

/// Fill: the light base, lightened 0.13, at 65% opacity.
pub fn fill(light: &Color) -> Color {
    light.lighten(0.13).set_alpha(0.65)
}

/// Stroke: the dark base darkened 0.17 when it reads light, 0.15 otherwise.
pub fn stroke(dark: &Color) -> Color {
    let amount = if dark.is_light() { 0.17 } else { 0.15 };
    dark.darken(amount)
}

pub fn fill_style(light: &Color, _dark: &Color) -> String {
    fill(light).render()
}

pub fn stroke_style(_light: &Color, dark: &Color) -> String {
    stroke(dark).render()
}

pub fn build_colors(light: &Color, dark: &Color) -> ColorPair {
    ColorPair::new(fill_style(light, dark), stroke_style(light, dark))
}
