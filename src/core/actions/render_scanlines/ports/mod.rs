pub mod progress_sink;
pub mod surface;
