use crate::core::actions::render_scanlines::ports::surface::{BYTES_PER_PIXEL, Surface, SurfaceError};
use crate::core::data::colour::Colour;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn surface_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug)]
struct SurfaceState {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

/// In-memory RGBA surface.
///
/// Cloning the pixels out with [`PixelSurface::snapshot`] is the only read
/// path; writes happen through the [`Surface`] port.
#[derive(Debug)]
pub struct PixelSurface {
    state: Mutex<SurfaceState>,
}

impl PixelSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                width,
                height,
                buffer: vec![0; surface_buffer_size(width, height)],
            }),
        }
    }

    /// Changes the surface geometry, discarding the current contents.
    pub fn resize(&self, width: u32, height: u32) {
        let mut state = self.lock();
        state.width = width;
        state.height = height;
        state.buffer = vec![0; surface_buffer_size(width, height)];
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.lock().buffer.clone()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let state = self.lock();

        if x >= state.width || y >= state.height {
            return None;
        }

        let index = (y as usize * state.width as usize + x as usize) * BYTES_PER_PIXEL;
        let bytes = &state.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.lock().width
    }

    fn height(&self) -> u32 {
        self.lock().height
    }

    fn set_row(&self, y: u32, row: &[u8]) -> Result<(), SurfaceError> {
        let mut state = self.lock();

        if y >= state.height {
            return Err(SurfaceError::RowOutsideBounds {
                y,
                height: state.height,
            });
        }

        let row_size = state.width as usize * BYTES_PER_PIXEL;

        if row.len() != row_size {
            return Err(SurfaceError::RowSizeMismatch {
                row_len: row.len(),
                expected: row_size,
            });
        }

        let start = y as usize * row_size;
        state.buffer[start..start + row_size].copy_from_slice(row);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let surface = PixelSurface::new(10, 10);

        assert_eq!(surface.width(), 10);
        assert_eq!(surface.height(), 10);
        assert_eq!(surface.snapshot().len(), 400); // 10 * 10 * 4
        assert!(surface.snapshot().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_row_writes_only_that_row() {
        let surface = PixelSurface::new(2, 3);
        let row = [1, 2, 3, 255, 4, 5, 6, 255];

        surface.set_row(1, &row).unwrap();

        let data = surface.snapshot();
        assert!(data[..8].iter().all(|&b| b == 0));
        assert_eq!(&data[8..16], &row);
        assert!(data[16..].iter().all(|&b| b == 0));
        assert_eq!(surface.pixel(1, 1), Some(Colour::opaque(4, 5, 6)));
    }

    #[test]
    fn test_set_row_outside_bounds() {
        let surface = PixelSurface::new(2, 2);

        assert_eq!(
            surface.set_row(2, &[0; 8]),
            Err(SurfaceError::RowOutsideBounds { y: 2, height: 2 })
        );
    }

    #[test]
    fn test_set_row_size_mismatch() {
        let surface = PixelSurface::new(2, 2);

        assert_eq!(
            surface.set_row(0, &[0; 12]),
            Err(SurfaceError::RowSizeMismatch {
                row_len: 12,
                expected: 8
            })
        );
    }

    #[test]
    fn test_resize_changes_geometry_and_clears() {
        let surface = PixelSurface::new(2, 2);
        surface.set_row(0, &[9; 8]).unwrap();

        surface.resize(3, 1);

        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 1);
        assert_eq!(surface.snapshot(), vec![0; 12]);
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let surface = PixelSurface::new(2, 2);

        assert_eq!(surface.pixel(2, 0), None);
        assert_eq!(surface.pixel(0, 2), None);
    }
}
