use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render events from the worker thread. Implementations must not
/// block for long: the next row is not computed until `present` returns.
pub trait RenderPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
