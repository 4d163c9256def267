use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ESCAPE_RADIUS_SQUARED, iteration_budget};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderRequestError {
    #[error("surface size must be non-zero: {width}x{height}")]
    ZeroSizeSurface { width: u32, height: u32 },
    #[error("super sample count must be at least one")]
    ZeroSuperSamples,
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Snapshot of everything a single scanline render needs, captured when the
/// render starts. The `with_*` methods consume the request, so a request
/// handed to the renderer is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    region: ComplexRect,
    width: u32,
    height: u32,
    fractal: FractalKind,
    colour_map: ColourMapKind,
    max_iterations: u32,
    escape_radius_squared: f64,
    super_samples: u32,
}

impl RenderRequest {
    /// A Mandelbrot request with the default palette, one sample per pixel and
    /// an iteration budget derived from the size of `region`.
    pub fn new(region: ComplexRect, width: u32, height: u32) -> Result<Self, RenderRequestError> {
        if width == 0 || height == 0 {
            return Err(RenderRequestError::ZeroSizeSurface { width, height });
        }

        Ok(Self {
            region,
            width,
            height,
            fractal: FractalKind::default(),
            colour_map: ColourMapKind::default(),
            max_iterations: iteration_budget(&region),
            escape_radius_squared: ESCAPE_RADIUS_SQUARED,
            super_samples: 1,
        })
    }

    #[must_use]
    pub fn with_fractal(mut self, fractal: FractalKind) -> Self {
        self.fractal = fractal;
        self
    }

    #[must_use]
    pub fn with_colour_map(mut self, colour_map: ColourMapKind) -> Self {
        self.colour_map = colour_map;
        self
    }

    #[must_use]
    pub fn with_escape_radius_squared(mut self, escape_radius_squared: f64) -> Self {
        self.escape_radius_squared = escape_radius_squared;
        self
    }

    pub fn with_super_samples(mut self, super_samples: u32) -> Result<Self, RenderRequestError> {
        if super_samples == 0 {
            return Err(RenderRequestError::ZeroSuperSamples);
        }

        self.super_samples = super_samples;
        Ok(self)
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Result<Self, RenderRequestError> {
        if max_iterations == 0 {
            return Err(RenderRequestError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(self)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.fractal
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapKind {
        self.colour_map
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }

    #[must_use]
    pub fn super_samples(&self) -> u32 {
        self.super_samples
    }
}
