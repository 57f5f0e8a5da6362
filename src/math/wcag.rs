use crate::color::Color;

/// Contrast ratio a candidate pair must clear to count as adequately
/// separated.
pub const CONTRAST_TARGET: f64 = 7.5;

/// Convert an sRGB channel (0-255) to linear light.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance, WCAG style.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: &Color) -> f64 {
    0.2126 * srgb_to_linear(color.red())
        + 0.7152 * srgb_to_linear(color.green())
        + 0.0722 * srgb_to_linear(color.blue())
}

/// Contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2. Symmetric, >= 1.
pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    let (bright, dark) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (bright + 0.05) / (dark + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(&Color::from_rgb(0, 0, 0), &Color::from_rgb(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn white_on_white_is_1() {
        let white = Color::from_rgb(255, 255, 255);
        let ratio = contrast_ratio(&white, &white);
        assert!((ratio - 1.0).abs() < 0.01);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = contrast_ratio(
            &Color::from_rgb(118, 118, 118),
            &Color::from_rgb(255, 255, 255),
        );
        assert!((ratio - 4.54).abs() < 0.1);
    }

    #[test]
    fn order_independent() {
        let red = Color::from_rgb(255, 0, 0);
        let white = Color::from_rgb(255, 255, 255);
        let r1 = contrast_ratio(&red, &white);
        let r2 = contrast_ratio(&white, &red);
        assert!((r1 - r2).abs() < 0.001);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = contrast_ratio(&Color::from_rgb(255, 0, 0), &Color::from_rgb(255, 255, 255));
        assert!((ratio - 3.99).abs() < 0.1);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = contrast_ratio(&Color::from_rgb(30, 41, 59), &Color::from_rgb(255, 255, 255));
        assert!((ratio - 14.62).abs() < 0.1);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76 — just above the 7.5 separation target
        let ratio = contrast_ratio(&Color::from_rgb(161, 161, 170), &Color::from_rgb(9, 9, 11));
        assert!((ratio - 7.76).abs() < 0.1);
        assert!(ratio > CONTRAST_TARGET);
    }

    #[test]
    fn ratio_is_at_least_one() {
        let a = Color::from_rgb(40, 120, 200);
        let b = Color::from_rgb(41, 121, 201);
        assert!(contrast_ratio(&a, &b) >= 1.0);
    }

    #[test]
    fn luminance_monotonic_in_green() {
        let lo = relative_luminance(&Color::from_rgb(100, 100, 100));
        let hi = relative_luminance(&Color::from_rgb(100, 180, 100));
        assert!(hi > lo);
    }
}
