/// An RGBA colour. Every palette in this crate produces opaque colours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Builds an opaque colour from floating point channels, rounding to the
    /// nearest integer and clamping into `[0, 255]`.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::opaque(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

pub(crate) fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.round().clamp(0.0, 255.0) as u8
}
