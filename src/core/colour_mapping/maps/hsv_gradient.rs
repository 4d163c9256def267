use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::{ColourMap, INTERIOR_COLOUR};
use crate::core::colour_mapping::maps::hsv::shaded_rgb;
use crate::core::colour_mapping::smooth::smooth_colour;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeResult;

// placement of the default view, used to weight the blend by position
const X_OFFSET: f64 = 2.5;
const Y_OFFSET: f64 = 1.25;
const X_RANGE: f64 = 3.5;
const Y_RANGE: f64 = 2.5;

const BRIGHTNESS_LIMIT: f64 = 500.0;
const DIM_FACTOR: f64 = 0.6;

/// Shaded HSV blended towards blue along the real axis and towards green along
/// the imaginary axis, with over-bright pixels dimmed.
#[derive(Debug, Clone, Copy)]
pub struct HsvGradientPalette {
    interior: Colour,
}

impl HsvGradientPalette {
    #[must_use]
    pub fn new(interior: Colour) -> Self {
        Self { interior }
    }
}

impl Default for HsvGradientPalette {
    fn default() -> Self {
        Self::new(INTERIOR_COLOUR)
    }
}

fn blend_by_position([mut r, mut g, mut b]: [f64; 3], point: Complex) -> [f64; 3] {
    let x_near = (point.real + X_OFFSET) / X_RANGE;
    let x_far = (X_RANGE - point.real - X_OFFSET) / X_RANGE;
    r = r * x_near + b * x_far;
    b = b * x_near + r * x_far;

    let y_near = (point.imag + Y_OFFSET) / Y_RANGE;
    let y_far = (Y_RANGE - point.imag - Y_OFFSET) / Y_RANGE;
    g = g * y_near + b * y_far;
    b = b * (point.imag + X_OFFSET) / X_RANGE + g * y_far;

    [r, g, b]
}

impl ColourMap for HsvGradientPalette {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, point: Option<Complex>) -> Colour {
        if !result.escaped(max_iterations) {
            return self.interior;
        }

        let v = smooth_colour(result.iterations, result.magnitude_squared());
        let mut rgb = shaded_rgb(max_iterations, v);

        if let Some(point) = point {
            rgb = blend_by_position(rgb, point);
        }

        if rgb.iter().sum::<f64>() > BRIGHTNESS_LIMIT {
            rgb = rgb.map(|channel| channel * DIM_FACTOR);
        }

        let [r, g, b] = rgb;
        Colour::from_channels(r, g, b)
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HsvGradient
    }
}
