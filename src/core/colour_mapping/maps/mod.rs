pub mod grayscale;
pub mod hsv;
pub mod hsv_gradient;
