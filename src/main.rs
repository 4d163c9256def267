use log::{info, warn};
use mandelbrot_explorer::{
    ColourMapKind, Complex, InteractiveController, PixelSurface, RenderEvent, RenderOutcome,
    RenderPresenterPort, RenderTrigger, default_region,
};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

/// Hands controller events to the main thread.
struct ChannelPresenter {
    sender: Mutex<Sender<RenderEvent>>,
}

impl RenderPresenterPort for ChannelPresenter {
    fn present(&self, event: RenderEvent) {
        if let Ok(sender) = self.sender.lock() {
            let _ = sender.send(event);
        }
    }
}

fn wait_for_finish(events: &Receiver<RenderEvent>, generation: u64) -> Option<RenderOutcome> {
    for event in events {
        match event {
            RenderEvent::Started {
                generation: g,
                width,
                height,
                max_iterations,
            } => info!("render {g} started: {width}x{height}, {max_iterations} iterations"),
            RenderEvent::Progress { generation: g, report } => {
                info!("render {g}: {} rows, {}", report.rows_written, report)
            }
            RenderEvent::Finished {
                generation: g,
                outcome,
                elapsed,
            } => {
                info!("render {g} finished as {outcome:?} in {:.3}s", elapsed.as_secs_f64());
                if g == generation {
                    return Some(outcome);
                }
            }
            RenderEvent::Error(error) => {
                warn!("{error}");
                if error.generation == generation {
                    return None;
                }
            }
        }
    }

    None
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (sender, receiver) = mpsc::channel();
    let surface = Arc::new(PixelSurface::new(WIDTH, HEIGHT));
    let presenter = Arc::new(ChannelPresenter {
        sender: Mutex::new(sender),
    });
    let mut controller = InteractiveController::new(surface.clone(), presenter);

    let full_view = RenderTrigger::new(default_region());
    controller.submit(full_view);

    // zoom straight away so the full view render is superseded or skipped
    let seahorse = default_region().zoomed(Complex::new(-0.75, 0.1), 0.05)?;
    let generation = controller.submit(
        RenderTrigger::new(seahorse)
            .with_colour_map(ColourMapKind::HsvShaded)
            .with_super_samples(2),
    );

    let outcome = wait_for_finish(&receiver, generation);
    controller.shutdown();

    match outcome {
        Some(RenderOutcome::Completed) => {
            let opaque = surface
                .snapshot()
                .chunks_exact(4)
                .filter(|pixel| pixel[3] == 255)
                .count();
            info!("{opaque} of {} pixels painted", WIDTH * HEIGHT);
            Ok(())
        }
        other => Err(format!("render {generation} did not complete: {other:?}").into()),
    }
}
