use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeResult;

pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

/// Turns an escape-time result into a colour.
///
/// `point` is the sampled location in the plane, for palettes that blend by
/// position. Implementations are pure.
pub trait ColourMap: Send + Sync {
    fn map(&self, max_iterations: u32, result: &EscapeTimeResult, point: Option<Complex>) -> Colour;

    fn kind(&self) -> ColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
