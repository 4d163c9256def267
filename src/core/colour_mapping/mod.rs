pub mod factory;
pub mod hsv;
pub mod kinds;
pub mod map;
pub mod maps;
pub mod smooth;
