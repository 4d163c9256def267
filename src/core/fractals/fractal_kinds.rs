use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::fractals::julia::algorithm::{DEFAULT_JULIA_CONSTANT, JuliaAlgorithm};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia { constant: Complex },
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia {
            constant: DEFAULT_JULIA_CONSTANT,
        },
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    #[must_use]
    pub fn algorithm(self) -> Box<dyn EscapeTimeAlgorithm> {
        match self {
            Self::Mandelbrot => Box::new(MandelbrotAlgorithm),
            Self::Julia { constant } => Box::new(JuliaAlgorithm::new(constant)),
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
