use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use rand::Rng;

/// Evaluates and colours the points of one pixel.
///
/// With more than one sample the points are jittered inside the pixel cell and
/// the colours averaged, so output is not reproducible between runs unless the
/// random source is seeded.
pub(crate) struct PixelSampler<'a> {
    pub algorithm: &'a dyn EscapeTimeAlgorithm,
    pub colour_map: &'a dyn ColourMap,
    pub max_iterations: u32,
    pub escape_radius_squared: f64,
    pub samples: u32,
    pub dx: f64,
    pub dy: f64,
}

impl PixelSampler<'_> {
    pub fn sample<R: Rng>(&self, point: Complex, rng: &mut R) -> Colour {
        if self.samples <= 1 {
            return self.colour_at(point);
        }

        let mut sum = [0u32; 4];

        for _ in 0..self.samples {
            let rx = rng.gen_range(0.0..1.0) * self.dx;
            let ry = rng.gen_range(0.0..1.0) * self.dy;
            let jittered = Complex::new(point.real - rx / 2.0, point.imag - ry / 2.0);

            for (total, channel) in sum.iter_mut().zip(self.colour_at(jittered).to_rgba()) {
                *total += u32::from(channel);
            }
        }

        let [r, g, b, a] = sum.map(|total| average(total, self.samples));

        Colour { r, g, b, a }
    }

    fn colour_at(&self, point: Complex) -> Colour {
        let result = self
            .algorithm
            .evaluate(point, self.escape_radius_squared, self.max_iterations);

        self.colour_map.map(self.max_iterations, &result, Some(point))
    }
}

fn average(total: u32, samples: u32) -> u8 {
    ((total + samples / 2) / samples).min(255) as u8
}
