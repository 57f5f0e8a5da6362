use crate::color::Color;

/// Perceptual distance between two colors: CIE76 Euclidean distance in Lab,
/// scaled by 1/100 so black vs white sits near 1.0. Convergence targets in
/// the Lab strategy are expressed on this scale (0.4-0.5).
pub fn delta(c1: &Color, c2: &Color) -> f64 {
    let lab1 = c1.to_lab();
    let lab2 = c2.to_lab();
    let sum = (lab1.l - lab2.l).powi(2) + (lab1.a - lab2.a).powi(2) + (lab1.b - lab2.b).powi(2);
    (sum as f64).sqrt() / 100.0
}
