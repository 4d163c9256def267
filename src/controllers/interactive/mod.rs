//! Interactive controller for cancellable scanline rendering.
//!
//! Redraw triggers go in through [`InteractiveController::submit`]; a single
//! worker thread renders the newest one onto the shared surface and reports
//! through a [`RenderPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::render_trigger::RenderTrigger;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::RenderPresenterPort;
