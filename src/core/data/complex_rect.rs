use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect ranges must be finite and non-zero: {width}x{height}")]
    Degenerate { width: f64, height: f64 },
}

/// The visible region of the complex plane.
///
/// Corners are not ordered: the imaginary axis is usually inverted so that
/// `top_left.imag > bottom_right.imag`. Every consumer works with the signed
/// ranges returned by [`ComplexRect::width`] and [`ComplexRect::height`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width == 0.0 || height == 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::Degenerate { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    /// Signed real range, `bottom_right.real - top_left.real`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    /// Signed imaginary range, `bottom_right.imag - top_left.imag`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        (self.top_left + self.bottom_right).scale(0.5)
    }

    /// Returns the rect scaled by `factor` about `centre`. A factor below one
    /// zooms in.
    pub fn zoomed(&self, centre: Complex, factor: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            centre + (self.top_left - centre).scale(factor),
            centre + (self.bottom_right - centre).scale(factor),
        )
    }

    /// Returns the rect moved by `offset` in plane units.
    pub fn panned(&self, offset: Complex) -> Result<Self, ComplexRectError> {
        Self::new(self.top_left + offset, self.bottom_right + offset)
    }

    /// Returns the rect with both ranges multiplied by the given factors about
    /// its centre, keeping axis orientation.
    pub(crate) fn stretched(&self, x_factor: f64, y_factor: f64) -> Result<Self, ComplexRectError> {
        let centre = self.centre();
        let half_width = self.width() * 0.5 * x_factor;
        let half_height = self.height() * 0.5 * y_factor;

        Self::new(
            Complex::new(centre.real - half_width, centre.imag - half_height),
            Complex::new(centre.real + half_width, centre.imag + half_height),
        )
    }
}
