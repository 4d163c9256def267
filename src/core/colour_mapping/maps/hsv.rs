use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::{ColourMap, INTERIOR_COLOUR};
use crate::core::colour_mapping::smooth::smooth_colour;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeResult;

/// Hue follows the smoothed escape index; value rises with it.
pub(crate) fn shaded_rgb(max_iterations: u32, v: f64) -> [f64; 3] {
    let max = f64::from(max_iterations);

    hsv_to_rgb(360.0 * v / max, 1.0, 10.0 * v / max)
}

/// Fully saturated, full brightness hue cycle.
#[derive(Debug, Clone, Copy)]
pub struct HsvBrightPalette {
    interior: Colour,
}

impl HsvBrightPalette {
    #[must_use]
    pub fn new(interior: Colour) -> Self {
        Self { interior }
    }
}

impl Default for HsvBrightPalette {
    fn default() -> Self {
        Self::new(INTERIOR_COLOUR)
    }
}

impl ColourMap for HsvBrightPalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, _: Option<Complex>) -> Colour {
        if !result.escaped(max_iterations) {
            return self.interior;
        }

        let v = smooth_colour(result.iterations, result.magnitude_squared());
        let [r, g, b] = hsv_to_rgb(360.0 * v / f64::from(max_iterations), 1.0, 1.0);

        Colour::from_channels(r, g, b)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HsvBright
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HsvShadedPalette {
    interior: Colour,
}

impl HsvShadedPalette {
    #[must_use]
    pub fn new(interior: Colour) -> Self {
        Self { interior }
    }
}

impl Default for HsvShadedPalette {
    fn default() -> Self {
        Self::new(INTERIOR_COLOUR)
    }
}

impl ColourMap for HsvShadedPalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, _: Option<Complex>) -> Colour {
        if !result.escaped(max_iterations) {
            return self.interior;
        }

        let v = smooth_colour(result.iterations, result.magnitude_squared());
        let [r, g, b] = shaded_rgb(max_iterations, v);

        Colour::from_channels(r, g, b)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HsvShaded
    }
}

/// [`HsvShadedPalette`] with the red and blue channels swapped.
#[derive(Debug, Clone, Copy)]
pub struct HsvSwappedPalette {
    interior: Colour,
}

impl HsvSwappedPalette {
    #[must_use]
    pub fn new(interior: Colour) -> Self {
        Self { interior }
    }
}

impl Default for HsvSwappedPalette {
    fn default() -> Self {
        Self::new(INTERIOR_COLOUR)
    }
}

impl ColourMap for HsvSwappedPalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, _: Option<Complex>) -> Colour {
        if !result.escaped(max_iterations) {
            return self.interior;
        }

        let v = smooth_colour(result.iterations, result.magnitude_squared());
        let [r, g, b] = shaded_rgb(max_iterations, v);

        Colour::from_channels(b, g, r)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HsvSwapped
    }
}
