use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, EscapeTimeResult, iterate};

/// Escape-time evaluation of the Mandelbrot set at `(cr, ci)`, starting from `z = 0`.
#[must_use]
pub fn mandelbrot(cr: f64, ci: f64, escape_radius_squared: f64, max_iterations: u32) -> EscapeTimeResult {
    iterate(Complex::ZERO, Complex::new(cr, ci), escape_radius_squared, max_iterations)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MandelbrotAlgorithm;

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn evaluate(
        &self,
        point: Complex,
        escape_radius_squared: f64,
        max_iterations: u32,
    ) -> EscapeTimeResult {
        mandelbrot(point.real, point.imag, escape_radius_squared, max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESCAPE_RADIUS_SQUARED: f64 = 100.0;

    #[test]
    fn test_far_point_escapes_quickly() {
        let result = mandelbrot(10.0, 10.0, ESCAPE_RADIUS_SQUARED, 100);

        assert!(result.iterations < 100);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 17, 256, 1000] {
            let result = mandelbrot(0.0, 0.0, ESCAPE_RADIUS_SQUARED, max_iterations);

            assert_eq!(result.iterations, max_iterations);
            assert_eq!(result.magnitude_squared(), 0.0);
        }
    }

    #[test]
    fn test_known_interior_points() {
        // main cardioid and period-2 bulb
        assert_eq!(mandelbrot(-0.1, 0.1, ESCAPE_RADIUS_SQUARED, 500).iterations, 500);
        assert_eq!(mandelbrot(-1.0, 0.0, ESCAPE_RADIUS_SQUARED, 500).iterations, 500);
    }

    #[test]
    fn test_zero_budget_returns_sentinel() {
        let result = mandelbrot(10.0, 10.0, ESCAPE_RADIUS_SQUARED, 0);

        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_escaped_point_exceeds_radius() {
        let result = mandelbrot(0.5, 0.5, ESCAPE_RADIUS_SQUARED, 256);

        assert!(result.iterations < 256);
        assert!(result.magnitude_squared() > ESCAPE_RADIUS_SQUARED);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let algorithm = MandelbrotAlgorithm;
        let point = Complex::new(-0.743_643_887, 0.131_825_904);

        let first = algorithm.evaluate(point, ESCAPE_RADIUS_SQUARED, 1000);
        let second = algorithm.evaluate(point, ESCAPE_RADIUS_SQUARED, 1000);

        assert_eq!(first, second);
    }

    #[test]
    fn test_trait_matches_free_function() {
        let point = Complex::new(-0.75, 0.2);

        assert_eq!(
            MandelbrotAlgorithm.evaluate(point, ESCAPE_RADIUS_SQUARED, 64),
            mandelbrot(-0.75, 0.2, ESCAPE_RADIUS_SQUARED, 64)
        );
    }
}
