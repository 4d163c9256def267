use crate::core::colour_mapping::map::INTERIOR_COLOUR;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use std::time::Duration;

/// Escape radius 10, compared against `|z|²`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 100.0;

pub const PROGRESS_UPDATE_INTERVAL: Duration = Duration::from_millis(200);

pub const PROGRESS_MARKER_COLOUR: Colour = Colour::opaque(255, 59, 3);

pub const DEFAULT_TOP_LEFT: Complex = Complex::new(-2.5, 1.25);
pub const DEFAULT_BOTTOM_RIGHT: Complex = Complex::new(1.0, -1.25);

const ITERATION_BUDGET_SCALE: f64 = 223.0;

/// The full set, with the imaginary axis pointing up.
#[must_use]
pub fn default_region() -> ComplexRect {
    ComplexRect::new(DEFAULT_TOP_LEFT, DEFAULT_BOTTOM_RIGHT)
        .expect("default fractal region is valid")
}

/// Iteration budget tied to the zoom level: the smaller the visible range, the
/// more iterations.
#[must_use]
pub fn iteration_budget(region: &ComplexRect) -> u32 {
    let smallest_range = region.width().abs().min(region.height().abs());
    let f = (0.001 + 2.0 * smallest_range).sqrt();

    (ITERATION_BUDGET_SCALE / f).floor() as u32
}

/// Knobs of the scanline renderer that are not part of a render request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Minimum time between progress reports; each report is also a yield point.
    pub update_interval: Duration,
    pub progress_marker: Colour,
    pub interior: Colour,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            update_interval: PROGRESS_UPDATE_INTERVAL,
            progress_marker: PROGRESS_MARKER_COLOUR,
            interior: INTERIOR_COLOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let region = default_region();

        assert_eq!(region.width(), 3.5);
        assert_eq!(region.height(), -2.5);
    }

    #[test]
    fn test_iteration_budget_for_default_region() {
        // floor(223 / sqrt(0.001 + 2 * 2.5))
        assert_eq!(iteration_budget(&default_region()), 99);
    }

    #[test]
    fn test_iteration_budget_uses_smaller_range() {
        let tall = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.5, 4.0)).unwrap();
        let wide = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(4.0, 0.5)).unwrap();

        // floor(223 / sqrt(1.001))
        assert_eq!(iteration_budget(&tall), 222);
        assert_eq!(iteration_budget(&wide), 222);
    }

    #[test]
    fn test_iteration_budget_grows_when_zooming_in() {
        let region = default_region();
        let zoomed = region.zoomed(region.centre(), 0.01).unwrap();

        assert!(iteration_budget(&zoomed) > iteration_budget(&region));
    }

    #[test]
    fn test_iteration_budget_ignores_axis_orientation() {
        let up = ComplexRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        let down = ComplexRect::new(Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0)).unwrap();

        assert_eq!(iteration_budget(&up), iteration_budget(&down));
    }

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();

        assert_eq!(settings.update_interval, Duration::from_millis(200));
        assert_eq!(settings.progress_marker.to_rgba(), [255, 59, 3, 255]);
        assert_eq!(settings.interior, Colour::BLACK);
    }
}
