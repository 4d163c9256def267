use crate::core::actions::render_scanlines::progress::ProgressReport;

pub trait ProgressSink: Send + Sync {
    fn report(&self, report: ProgressReport);
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _: ProgressReport) {}
}
