pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod pixel_surface;
pub mod viewport;
