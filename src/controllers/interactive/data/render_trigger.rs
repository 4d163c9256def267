use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_kinds::FractalKind;

/// A request to redraw: the region to show plus the palette and sample count
/// chosen by whatever sits in front of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTrigger {
    pub region: ComplexRect,
    pub fractal: FractalKind,
    pub colour_map: ColourMapKind,
    pub super_samples: u32,
}

impl RenderTrigger {
    #[must_use]
    pub fn new(region: ComplexRect) -> Self {
        Self {
            region,
            fractal: FractalKind::default(),
            colour_map: ColourMapKind::default(),
            super_samples: 1,
        }
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
    pub fn with_super_samples(mut self, super_samples: u32) -> Self {
        self.super_samples = super_samples;
        self
    }
}
