use thiserror::Error;

/// A triggered render that could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
