use crate::controllers::interactive::errors::render::RenderError;
use crate::core::actions::render_scanlines::progress::ProgressReport;
use crate::core::actions::render_scanlines::render_scanlines::RenderOutcome;
use std::time::Duration;

/// Everything the controller tells its presenter, tagged with the generation
/// of the render it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Started {
        generation: u64,
        width: u32,
        height: u32,
        max_iterations: u32,
    },
    Progress {
        generation: u64,
        report: ProgressReport,
    },
    Finished {
        generation: u64,
        outcome: RenderOutcome,
        elapsed: Duration,
    },
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Started { generation, .. }
            | Self::Progress { generation, .. }
            | Self::Finished { generation, .. } => *generation,
            Self::Error(error) => error.generation,
        }
    }
}
