use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};

/// Per-axis zoom scalars kept in step with aspect ratio corrections.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zoom {
    pub x: f64,
    pub y: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Maps a pixel surface of `width` x `height` onto a region of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    width: u32,
    height: u32,
    zoom: Zoom,
}

impl Viewport {
    #[must_use]
    pub fn new(region: ComplexRect, width: u32, height: u32) -> Self {
        Self {
            region,
            width,
            height,
            zoom: Zoom::default(),
        }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Real-axis step per pixel column. Sampling is centred within the pixel
    /// by dividing by `0.5 + (width - 1)` rather than `width`.
    #[must_use]
    pub fn dx(&self) -> f64 {
        pixel_delta(self.region.width(), self.width)
    }

    /// Imaginary-axis step per pixel row; negative when the axis is inverted.
    #[must_use]
    pub fn dy(&self) -> f64 {
        pixel_delta(self.region.height(), self.height)
    }

    /// Widens the narrower plane range so that pixels cover square areas of the
    /// plane, scaling the matching zoom component by the same factor.
    pub fn adjust_aspect_ratio(&mut self) -> Result<(), ComplexRectError> {
        let ratio = self.region.width().abs() / self.region.height().abs();
        let surface_ratio = f64::from(self.width) / f64::from(self.height);

        if surface_ratio > ratio {
            let factor = surface_ratio / ratio;
            self.region = self.region.stretched(factor, 1.0)?;
            self.zoom.x *= factor;
        } else {
            let factor = ratio / surface_ratio;
            self.region = self.region.stretched(1.0, factor)?;
            self.zoom.y *= factor;
        }

        Ok(())
    }
}

fn pixel_delta(range: f64, dimension: u32) -> f64 {
    range / (0.5 + (f64::from(dimension) - 1.0))
}
