use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_scanlines::ports::progress_sink::ProgressSink;
use crate::core::actions::render_scanlines::ports::surface::{BYTES_PER_PIXEL, Surface};
use crate::core::actions::render_scanlines::progress::ProgressReport;
use crate::core::actions::render_scanlines::render_request::RenderRequest;
use crate::core::actions::render_scanlines::super_sample::PixelSampler;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderSettings;
use log::{debug, trace};
use rand::Rng;
use std::thread;
use std::time::Instant;

/// How a scanline render ended. None of these is an error: a stale render is
/// expected whenever the view changes while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every row was written.
    Completed,
    /// A newer render was requested; rows after `rows_written` were not touched.
    Superseded { rows_written: u32 },
    /// The surface changed size; rows after `rows_written` were not touched.
    StaleGeometry { rows_written: u32 },
}

impl RenderOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

fn solid_row(colour: Colour, width: u32) -> Vec<u8> {
    colour.to_rgba().repeat(width as usize)
}

/// Renders `request` onto `surface` one row at a time, top to bottom.
///
/// Before each row the render is abandoned if `cancel` fires or the surface
/// no longer has the size captured in the request. Whenever at least
/// `settings.update_interval` has passed since the last report, a marker row
/// is painted below the row just written, progress is reported and the thread
/// yields before continuing.
pub fn render_scanlines<S, P, C, R>(
    request: &RenderRequest,
    settings: &RenderSettings,
    surface: &S,
    progress: &P,
    cancel: &C,
    rng: &mut R,
) -> RenderOutcome
where
    S: Surface + ?Sized,
    P: ProgressSink + ?Sized,
    C: CancelToken + ?Sized,
    R: Rng,
{
    let start_width = request.width();
    let start_height = request.height();
    let viewport = Viewport::new(request.region(), start_width, start_height);
    let (dx, dy) = (viewport.dx(), viewport.dy());

    let algorithm = request.fractal().algorithm();
    let colour_map = colour_map_factory(request.colour_map(), settings.interior);
    let sampler = PixelSampler {
        algorithm: algorithm.as_ref(),
        colour_map: colour_map.as_ref(),
        max_iterations: request.max_iterations(),
        escape_radius_squared: request.escape_radius_squared(),
        samples: request.super_samples(),
        dx,
        dy,
    };

    debug!(
        "rendering {} {}x{} with {} iterations, {} sample(s) per pixel",
        request.fractal(),
        start_width,
        start_height,
        request.max_iterations(),
        request.super_samples()
    );

    let marker = solid_row(settings.progress_marker, start_width);
    let mut row = vec![0u8; start_width as usize * BYTES_PER_PIXEL];
    let start = Instant::now();
    let mut last_update = start;
    let mut pixels: u64 = 0;
    let top_left = viewport.region().top_left();
    let mut ci = top_left.imag;

    for y in 0..start_height {
        if cancel.is_cancelled() {
            debug!("render superseded after {} of {} rows", y, start_height);
            return RenderOutcome::Superseded { rows_written: y };
        }

        if surface.width() != start_width || surface.height() != start_height {
            debug!("surface resized after {} of {} rows", y, start_height);
            return RenderOutcome::StaleGeometry { rows_written: y };
        }

        draw_line(&mut row, &sampler, ci, top_left.real, dx, rng);

        if let Err(err) = surface.set_row(y, &row) {
            debug!("row {} rejected by surface: {}", y, err);
            return RenderOutcome::StaleGeometry { rows_written: y };
        }

        ci += dy;
        pixels += u64::from(start_width);

        let now = Instant::now();

        if now.duration_since(last_update) >= settings.update_interval {
            let next = y + 1;

            if next < start_height {
                if let Err(err) = surface.set_row(next, &marker) {
                    trace!("progress marker rejected by surface: {}", err);
                }
            }

            let report = ProgressReport::new(now.duration_since(start), next, pixels);
            trace!("progress: {}", report);
            progress.report(report);

            last_update = now;
            thread::yield_now();
        }
    }

    debug!(
        "render completed: {} pixels in {:.3}s",
        pixels,
        start.elapsed().as_secs_f64()
    );

    RenderOutcome::Completed
}

fn draw_line<R: Rng>(
    row: &mut [u8],
    sampler: &PixelSampler<'_>,
    ci: f64,
    cr_start: f64,
    cr_step: f64,
    rng: &mut R,
) {
    let mut cr = cr_start;

    for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        let colour = sampler.sample(Complex::new(cr, ci), rng);
        pixel.copy_from_slice(&colour.to_rgba());
        cr += cr_step;
    }
}
