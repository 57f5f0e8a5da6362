use crate::color::Color;
use crate::math::wcag::{contrast_ratio, CONTRAST_TARGET};
use crate::types::ColorPair;

/// Push applied to the opaque inputs when candidate extremes are needed.
const CANDIDATE_PUSH: f64 = 0.25;

/// Pick the first candidate pair whose contrast ratio clears 7.5.
///
/// Selection order: the inputs themselves, then (dark, darker), then
/// (lighter, light). If nothing clears the threshold the most-separated
/// fallback (lighter, darker) is returned with `degraded` set — a soft
/// failure, not an error.
pub fn build_colors(light: &Color, dark: &Color) -> ColorPair {
    let light_opaque = light.set_alpha(1.0);
    let dark_opaque = dark.set_alpha(1.0);

    let lighter = light_opaque.lighten(CANDIDATE_PUSH);
    let darker = dark_opaque.darken(CANDIDATE_PUSH);

    let c_ld = contrast_ratio(&light_opaque, &dark_opaque);
    let c_dd = contrast_ratio(&darker, &dark_opaque);
    let c_ll = contrast_ratio(&lighter, &light_opaque);

    if c_ld > CONTRAST_TARGET {
        // Inputs already contrast; pass them through untouched.
        return ColorPair::new(light.render(), dark.render());
    }
    if c_dd > CONTRAST_TARGET {
        return ColorPair::new(dark.render(), darker.render());
    }
    if c_ll > CONTRAST_TARGET {
        return ColorPair::new(lighter.render(), light.render());
    }

    log::warn!(
        "no candidate pair cleared ratio {CONTRAST_TARGET} \
         (inputs {c_ld:.2}, darker {c_dd:.2}, lighter {c_ll:.2}); returning degraded pair"
    );
    ColorPair::degraded(lighter.render(), darker.render())
}

pub fn fill_style(light: &Color, dark: &Color) -> String {
    build_colors(light, dark).fill
}

pub fn stroke_style(light: &Color, dark: &Color) -> String {
    build_colors(light, dark).stroke
}
