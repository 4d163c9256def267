use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, EscapeTimeResult, iterate};

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

/// Julia set for a fixed constant: the pixel is the starting point and the
/// constant is added on every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(constant: Complex) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

impl Default for JuliaAlgorithm {
    fn default() -> Self {
        Self::new(DEFAULT_JULIA_CONSTANT)
    }
}

impl EscapeTimeAlgorithm for JuliaAlgorithm {
    fn evaluate(
        &self,
        point: Complex,
        escape_radius_squared: f64,
        max_iterations: u32,
    ) -> EscapeTimeResult {
        iterate(point, self.constant, escape_radius_squared, max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_outside_radius_does_not_iterate() {
        let julia = JuliaAlgorithm::default();
        let result = julia.evaluate(Complex::new(20.0, 0.0), 100.0, 50);

        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_fixed_point_never_escapes() {
        // with k = 0 the unit circle is invariant
        let julia = JuliaAlgorithm::new(Complex::ZERO);
        let result = julia.evaluate(Complex::new(1.0, 0.0), 100.0, 64);

        assert_eq!(result.iterations, 64);
        assert_eq!(result.magnitude_squared(), 1.0);
    }

    #[test]
    fn test_far_point_escapes() {
        let julia = JuliaAlgorithm::default();
        let result = julia.evaluate(Complex::new(3.0, 3.0), 100.0, 64);

        assert!(result.escaped(64));
    }
}
