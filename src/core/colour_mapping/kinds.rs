#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    HsvGradient,
    HsvBright,
    HsvShaded,
    HsvSwapped,
    Grayscale,
    GrayscaleInterior,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::HsvGradient,
        Self::HsvBright,
        Self::HsvShaded,
        Self::HsvSwapped,
        Self::Grayscale,
        Self::GrayscaleInterior,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HsvGradient => "HSV gradient",
            Self::HsvBright => "HSV bright",
            Self::HsvShaded => "HSV shaded",
            Self::HsvSwapped => "HSV swapped",
            Self::Grayscale => "Grayscale",
            Self::GrayscaleInterior => "Grayscale with interior",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
