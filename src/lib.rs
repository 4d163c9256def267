mod controllers;
mod core;

pub use controllers::interactive::{
    InteractiveController, RenderError, RenderEvent, RenderPresenterPort, RenderTrigger,
};
pub use crate::core::actions::cancellation::{CancelToken, GenerationToken, NeverCancel};
pub use crate::core::actions::render_scanlines::ports::progress_sink::{NoProgress, ProgressSink};
pub use crate::core::actions::render_scanlines::ports::surface::{BYTES_PER_PIXEL, Surface, SurfaceError};
pub use crate::core::actions::render_scanlines::progress::{
    ProgressReport, Throughput, ThroughputUnit, metric_units, throughput,
};
pub use crate::core::actions::render_scanlines::render_request::{RenderRequest, RenderRequestError};
pub use crate::core::actions::render_scanlines::render_scanlines::{RenderOutcome, render_scanlines};
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::hsv::hsv_to_rgb;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::colour_mapping::map::{ColourMap, INTERIOR_COLOUR};
pub use crate::core::colour_mapping::smooth::smooth_colour;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_surface::PixelSurface;
pub use crate::core::data::viewport::{Viewport, Zoom};
pub use crate::core::fractals::escape_time::{EXTRA_ITERATIONS, EscapeTimeAlgorithm, EscapeTimeResult};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::julia::algorithm::{DEFAULT_JULIA_CONSTANT, JuliaAlgorithm};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, mandelbrot};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ESCAPE_RADIUS_SQUARED, PROGRESS_MARKER_COLOUR, PROGRESS_UPDATE_INTERVAL, RenderSettings,
    default_region, iteration_budget,
};
