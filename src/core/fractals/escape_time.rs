use crate::core::data::complex::Complex;

/// Number of unconditional iterations run after the escape loop finishes.
/// They shrink the error term of the smooth colouring logarithm and are not
/// counted in [`EscapeTimeResult::iterations`].
pub const EXTRA_ITERATIONS: u32 = 4;

/// Outcome of iterating a single point.
///
/// `iterations == max_iterations` marks a point that never escaped. The squared
/// components are taken after the extra iterations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeResult {
    pub iterations: u32,
    pub real_squared: f64,
    pub imag_squared: f64,
}

impl EscapeTimeResult {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real_squared + self.imag_squared
    }

    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations != max_iterations
    }
}

pub trait EscapeTimeAlgorithm: Send + Sync {
    fn evaluate(
        &self,
        point: Complex,
        escape_radius_squared: f64,
        max_iterations: u32,
    ) -> EscapeTimeResult;
}

/// Runs `z ← z² + c` from `z` using the squared-component form, stopping at the
/// escape radius or the iteration budget, then applies [`EXTRA_ITERATIONS`].
#[inline]
pub(crate) fn iterate(
    z: Complex,
    c: Complex,
    escape_radius_squared: f64,
    max_iterations: u32,
) -> EscapeTimeResult {
    let mut zr = z.real;
    let mut zi = z.imag;
    let mut tr = zr * zr;
    let mut ti = zi * zi;
    let mut n = 0;

    while n < max_iterations && tr + ti <= escape_radius_squared {
        zi = 2.0 * zr * zi + c.imag;
        zr = tr - ti + c.real;
        tr = zr * zr;
        ti = zi * zi;
        n += 1;
    }

    for _ in 0..EXTRA_ITERATIONS {
        zi = 2.0 * zr * zi + c.imag;
        zr = tr - ti + c.real;
        tr = zr * zr;
        ti = zi * zi;
    }

    EscapeTimeResult {
        iterations: n,
        real_squared: tr,
        imag_squared: ti,
    }
}
