use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("row {y} outside of surface height {height}")]
    RowOutsideBounds { y: u32, height: u32 },
    #[error("row length {row_len} does not match surface row size {expected}")]
    RowSizeMismatch { row_len: usize, expected: usize },
}

/// A rectangular RGBA pixel surface that accepts whole rows.
///
/// Implementations must be shareable with the render worker; dimensions may
/// change at any time from another thread.
pub trait Surface: Send + Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Writes `row` (`width * 4` RGBA bytes) as image row `y`.
    fn set_row(&self, y: u32, row: &[u8]) -> Result<(), SurfaceError>;
}
