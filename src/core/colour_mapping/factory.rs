use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::maps::grayscale::{GrayscaleInteriorPalette, GrayscalePalette};
use crate::core::colour_mapping::maps::hsv::{HsvBrightPalette, HsvShadedPalette, HsvSwappedPalette};
use crate::core::colour_mapping::maps::hsv_gradient::HsvGradientPalette;
use crate::core::data::colour::Colour;

/// Builds the palette for `kind`. `interior` is used for non-escaping points by
/// every palette except [`ColourMapKind::GrayscaleInterior`], which shades them.
#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, interior: Colour) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::HsvGradient => Box::new(HsvGradientPalette::new(interior)),
        ColourMapKind::HsvBright => Box::new(HsvBrightPalette::new(interior)),
        ColourMapKind::HsvShaded => Box::new(HsvShadedPalette::new(interior)),
        ColourMapKind::HsvSwapped => Box::new(HsvSwappedPalette::new(interior)),
        ColourMapKind::Grayscale => Box::new(GrayscalePalette::new(interior)),
        ColourMapKind::GrayscaleInterior => Box::new(GrayscaleInteriorPalette),
    }
}
