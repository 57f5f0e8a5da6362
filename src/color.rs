use palette::{FromColor, Hsl, Lab, Srgb};

use crate::error::EngineError;

/// Immutable color value: RGB channels 0-255 plus alpha 0.0-1.0.
///
/// Every channel operation returns a new `Color`; callers holding a
/// reference never observe mutation. The Lab view is derived on demand via
/// `to_lab`/`from_lab` and round-trips within a small numeric tolerance
/// (gamma and whitepoint rounding make it lossy by design, not bit-exact).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parse a color literal: hex (`#rgb`, `#rrggbb`, `#rrggbbaa`),
    /// `rgb(...)`/`rgba(...)`, hsl, named colors — anything csscolorparser
    /// understands.
    pub fn parse(value: &str) -> Result<Self, EngineError> {
        let trimmed = value.trim();
        let parsed: csscolorparser::Color = trimmed
            .parse()
            .map_err(|_| EngineError::InvalidColor(value.to_string()))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::from_rgba(r, g, b, a as f64 / 255.0))
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Raise HSL lightness by `amount` (fractional, 0-1), saturating at
    /// white. Not a linear RGB scale.
    pub fn lighten(&self, amount: f64) -> Self {
        self.shift_lightness(amount)
    }

    /// Lower HSL lightness by `amount`, saturating at black.
    pub fn darken(&self, amount: f64) -> Self {
        self.shift_lightness(-amount)
    }

    pub fn set_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// YIQ brightness test: `(299r + 587g + 114b) / 255000 >= 0.5`.
    /// Drives the step-size selection in the strategies.
    pub fn is_light(&self) -> bool {
        let brightness =
            (299.0 * self.r as f64 + 587.0 * self.g as f64 + 114.0 * self.b as f64) / 255_000.0;
        brightness >= 0.5
    }

    /// CIE Lab view (D65), alpha ignored.
    pub fn to_lab(&self) -> Lab {
        Lab::from_color(self.srgb())
    }

    /// Back from Lab, gamut-clamped to valid sRGB.
    pub fn from_lab(lab: Lab, alpha: f64) -> Self {
        let srgb = Srgb::from_color(lab);
        let clamped = Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        );
        Self::from_srgb(clamped, alpha)
    }

    /// Alpha-composite this color over an opaque background.
    /// Per channel: `result = fg * alpha + bg * (1 - alpha)`, rounded.
    pub fn composite_over(&self, background: &Color) -> Self {
        let blend = |f: u8, b: u8| -> u8 {
            (f as f64 * self.alpha + b as f64 * (1.0 - self.alpha)).round() as u8
        };
        Self {
            r: blend(self.r, background.r),
            g: blend(self.g, background.g),
            b: blend(self.b, background.b),
            alpha: 1.0,
        }
    }

    /// Canonical string form: `rgb(r,g,b)` when fully opaque, otherwise
    /// `rgba(r,g,b,a)` with alpha rounded to 2 decimals. No internal
    /// whitespace.
    pub fn render(&self) -> String {
        if self.alpha >= 0.999 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            let a = (self.alpha * 100.0).round() / 100.0;
            format!("rgba({},{},{},{})", self.r, self.g, self.b, a)
        }
    }

    fn srgb(&self) -> Srgb {
        Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn from_srgb(srgb: Srgb, alpha: f64) -> Self {
        Self {
            r: (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    fn shift_lightness(&self, amount: f64) -> Self {
        let hsl = Hsl::from_color(self.srgb());
        let lightness = (hsl.lightness + amount as f32).clamp(0.0, 1.0);
        let shifted = Srgb::from_color(Hsl::new(hsl.hue, hsl.saturation, lightness));
        Self::from_srgb(shifted, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_6digit() {
        let c = Color::parse("#1e293b").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (30, 41, 59));
        assert!((c.alpha() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parse_rgb_functional() {
        let c = Color::parse("rgb(255, 0, 128)").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (255, 0, 128));
    }

    #[test]
    fn parse_rgba_carries_alpha() {
        let c = Color::parse("rgba(10,20,30,0.5)").unwrap();
        assert!((c.alpha() - 0.5).abs() < 0.01);
    }

    #[test]
    fn parse_garbage_is_invalid_color() {
        assert_eq!(
            Color::parse("not-a-color"),
            Err(EngineError::InvalidColor("not-a-color".to_string()))
        );
    }

    #[test]
    fn lighten_saturates_at_white() {
        let c = Color::from_rgb(250, 250, 250).lighten(0.5);
        assert_eq!((c.red(), c.green(), c.blue()), (255, 255, 255));
    }

    #[test]
    fn darken_saturates_at_black() {
        let c = Color::from_rgb(5, 5, 5).darken(0.5);
        assert_eq!((c.red(), c.green(), c.blue()), (0, 0, 0));
    }

    #[test]
    fn lighten_returns_new_value() {
        let base = Color::from_rgb(100, 150, 200);
        let lighter = base.lighten(0.1);
        // The original is untouched and the result is strictly lighter.
        assert_eq!((base.red(), base.green(), base.blue()), (100, 150, 200));
        assert!(lighter.red() as u16 + lighter.green() as u16 + lighter.blue() as u16
            > base.red() as u16 + base.green() as u16 + base.blue() as u16);
    }

    #[test]
    fn darken_is_not_linear_scale() {
        // HSL darken keeps hue; a linear scale of rgb(200,100,50) by the
        // same offset would not hit these channel ratios.
        let c = Color::from_rgb(200, 100, 50).darken(0.1);
        assert!(c.red() > c.green() && c.green() > c.blue());
    }

    #[test]
    fn set_alpha_clamps() {
        assert!((Color::from_rgb(0, 0, 0).set_alpha(1.5).alpha() - 1.0).abs() < 1e-9);
        assert!((Color::from_rgb(0, 0, 0).set_alpha(-0.5).alpha()).abs() < 1e-9);
    }

    #[test]
    fn near_black_is_not_light() {
        assert!(!Color::from_rgb(10, 10, 10).is_light());
    }

    #[test]
    fn white_is_light() {
        assert!(Color::from_rgb(255, 255, 255).is_light());
    }

    #[test]
    fn green_weighs_more_than_blue() {
        // YIQ weights: pure green reads light, pure blue reads dark.
        assert!(Color::from_rgb(0, 255, 0).is_light());
        assert!(!Color::from_rgb(0, 0, 255).is_light());
    }

    #[test]
    fn lab_round_trip_within_tolerance() {
        let base = Color::from_rgb(163, 230, 53);
        let back = Color::from_lab(base.to_lab(), 1.0);
        // Gamma + whitepoint rounding: allow 1 step per channel.
        assert!((base.red() as i16 - back.red() as i16).abs() <= 1);
        assert!((base.green() as i16 - back.green() as i16).abs() <= 1);
        assert!((base.blue() as i16 - back.blue() as i16).abs() <= 1);
    }

    #[test]
    fn from_lab_clamps_out_of_gamut() {
        let lab = Lab::new(150.0, 0.0, 0.0);
        let c = Color::from_lab(lab, 1.0);
        assert_eq!((c.red(), c.green(), c.blue()), (255, 255, 255));
    }

    #[test]
    fn render_opaque_is_rgb() {
        assert_eq!(Color::from_rgb(163, 230, 53).render(), "rgb(163,230,53)");
    }

    #[test]
    fn render_with_alpha_is_rgba() {
        let c = Color::from_rgba(163, 230, 53, 0.65);
        assert_eq!(c.render(), "rgba(163,230,53,0.65)");
    }

    #[test]
    fn render_has_no_whitespace() {
        let rendered = Color::from_rgba(1, 2, 3, 0.5).render();
        assert!(!rendered.contains(' '));
    }

    #[test]
    fn composite_opaque_returns_self() {
        let c = Color::from_rgb(255, 0, 0).composite_over(&Color::from_rgb(0, 0, 255));
        assert_eq!((c.red(), c.green(), c.blue()), (255, 0, 0));
    }

    #[test]
    fn composite_half_blends() {
        // white 50% over black -> mid gray
        let c = Color::from_rgba(255, 255, 255, 0.5).composite_over(&Color::from_rgb(0, 0, 0));
        assert_eq!((c.red(), c.green(), c.blue()), (128, 128, 128));
        assert!((c.alpha() - 1.0).abs() < 1e-9);
    }
}
