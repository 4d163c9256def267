pub mod ports;
pub mod progress;
pub mod render_request;
#[allow(clippy::module_inception)]
pub mod render_scanlines;
pub(crate) mod super_sample;
