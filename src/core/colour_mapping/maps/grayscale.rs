use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::{ColourMap, INTERIOR_COLOUR};
use crate::core::colour_mapping::smooth::smooth_colour;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeResult;

fn grey(level: f64) -> Colour {
    let level = if level.is_nan() { 0 } else { level.clamp(0.0, 255.0) as u8 };

    Colour::opaque(level, level, level)
}

/// Linear grey ramp over the smoothed escape index, saturating at white.
pub(crate) fn escaped_grey(max_iterations: u32, result: &EscapeTimeResult) -> Colour {
    let v = smooth_colour(result.iterations, result.magnitude_squared());

    grey((512.0 * v / f64::from(max_iterations)).floor())
}

#[derive(Debug, Clone, Copy)]
pub struct GrayscalePalette {
    interior: Colour,
}

impl GrayscalePalette {
    #[must_use]
    pub fn new(interior: Colour) -> Self {
        Self { interior }
    }
}

impl Default for GrayscalePalette {
    fn default() -> Self {
        Self::new(INTERIOR_COLOUR)
    }
}

impl ColourMap for GrayscalePalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, _: Option<Complex>) -> Colour {
        if !result.escaped(max_iterations) {
            return self.interior;
        }

        escaped_grey(max_iterations, result)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Grayscale
    }
}

/// Grayscale that also shades the interior by the final orbit magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrayscaleInteriorPalette;

impl ColourMap for GrayscaleInteriorPalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, _: Option<Complex>) -> Colour {
        if result.escaped(max_iterations) {
            return escaped_grey(max_iterations, result);
        }

        let banded = (255.0 * result.magnitude_squared().sqrt()).floor() % 255.0;

        grey(255.0 - banded)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::GrayscaleInterior
    }
}
