use std::f64::consts::LN_2;

/// Continuous escape index used to remove banding between iteration counts.
///
/// `magnitude_squared` must be greater than one, which holds for any escaped
/// point once the escape radius exceeds one.
#[must_use]
pub fn smooth_colour(iterations: u32, magnitude_squared: f64) -> f64 {
    5.0 + f64::from(iterations) - 0.5_f64.ln() / LN_2 - magnitude_squared.ln().ln() / LN_2
}
