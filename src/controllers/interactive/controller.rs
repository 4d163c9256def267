use crate::controllers::interactive::data::render_trigger::RenderTrigger;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render_scanlines::ports::progress_sink::ProgressSink;
use crate::core::actions::render_scanlines::ports::surface::Surface;
use crate::core::actions::render_scanlines::progress::ProgressReport;
use crate::core::actions::render_scanlines::render_request::{RenderRequest, RenderRequestError};
use crate::core::actions::render_scanlines::render_scanlines::{RenderOutcome, render_scanlines};
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderSettings;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    running: AtomicBool,
    latest_request: Mutex<Option<(u64, RenderTrigger)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    surface: Arc<dyn Surface>,
    presenter_port: Arc<dyn RenderPresenterPort>,
    settings: RenderSettings,
}

impl SharedState {
    fn latest_request(&self) -> MutexGuard<'_, Option<(u64, RenderTrigger)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Forwards renderer progress to the presenter as generation-tagged events.
struct PresenterProgress<'a> {
    port: &'a dyn RenderPresenterPort,
    generation: u64,
}

impl ProgressSink for PresenterProgress<'_> {
    fn report(&self, report: ProgressReport) {
        self.port.present(RenderEvent::Progress {
            generation: self.generation,
            report,
        });
    }
}

/// Owns the generation counter and the render worker.
///
/// At most one render runs at a time. Triggers that arrive while a render is
/// running replace whatever trigger is still waiting, and the running render
/// stops at its next row boundary, so the newest trigger always wins.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        surface: Arc<dyn Surface>,
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        Self::with_settings(surface, presenter_port, RenderSettings::default())
    }

    pub fn with_settings(
        surface: Arc<dyn Surface>,
        presenter_port: Arc<dyn RenderPresenterPort>,
        settings: RenderSettings,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            running: AtomicBool::new(false),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            surface,
            presenter_port,
            settings,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Starts a new generation for `trigger` and returns it. Any render of an
    /// older generation is abandoned at its next row boundary.
    pub fn submit(&self, trigger: RenderTrigger) -> u64 {
        let generation = {
            let mut guard = self.shared.latest_request();
            let generation = self.shared.generation.fetch_add(1, Ordering::AcqRel) + 1;
            *guard = Some((generation, trigger));
            generation
        };

        debug!("render {} submitted", generation);
        self.shared.wake.notify_one();

        generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        info!("render worker started");
        let mut rng = StdRng::from_entropy();

        loop {
            let (job_generation, trigger) = {
                let mut guard = shared.latest_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        info!("render worker stopped");
                        return;
                    }

                    if let Some(job) = guard.take() {
                        shared.running.store(true, Ordering::Release);
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::run_job(shared, job_generation, &trigger, &mut rng);

            shared.running.store(false, Ordering::Release);
        }
    }

    fn run_job(shared: &SharedState, job_generation: u64, trigger: &RenderTrigger, rng: &mut StdRng) {
        let port = shared.presenter_port.as_ref();

        let request = match Self::build_request(shared.surface.as_ref(), trigger) {
            Ok(request) => request,
            Err(err) => {
                debug!("render {} could not start: {}", job_generation, err);
                port.present(RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message: err.to_string(),
                }));
                shared
                    .last_completed_generation
                    .fetch_max(job_generation, Ordering::AcqRel);
                return;
            }
        };

        let generation_token = GenerationToken::new(&shared.generation, job_generation);
        let cancel_token =
            || shared.shutdown.load(Ordering::Relaxed) || generation_token.is_cancelled();
        let progress = PresenterProgress {
            port,
            generation: job_generation,
        };

        debug!(
            "render {} started: {}x{}, {} iterations",
            job_generation,
            request.width(),
            request.height(),
            request.max_iterations()
        );
        port.present(RenderEvent::Started {
            generation: job_generation,
            width: request.width(),
            height: request.height(),
            max_iterations: request.max_iterations(),
        });

        let start = Instant::now();
        let outcome = render_scanlines(
            &request,
            &shared.settings,
            shared.surface.as_ref(),
            &progress,
            &cancel_token,
            rng,
        );
        let elapsed = start.elapsed();

        match outcome {
            RenderOutcome::Completed => {
                info!(
                    "render {} completed in {:.3}s",
                    job_generation,
                    elapsed.as_secs_f64()
                );
                shared
                    .last_completed_generation
                    .fetch_max(job_generation, Ordering::AcqRel);
            }
            RenderOutcome::Superseded { rows_written } => {
                debug!("render {} superseded at row {}", job_generation, rows_written);
            }
            RenderOutcome::StaleGeometry { rows_written } => {
                debug!("render {} stale at row {}", job_generation, rows_written);
            }
        }

        port.present(RenderEvent::Finished {
            generation: job_generation,
            outcome,
            elapsed,
        });
    }

    fn build_request(
        surface: &dyn Surface,
        trigger: &RenderTrigger,
    ) -> Result<RenderRequest, RenderRequestError> {
        RenderRequest::new(trigger.region, surface.width(), surface.height())?
            .with_fractal(trigger.fractal)
            .with_colour_map(trigger.colour_map)
            .with_super_samples(trigger.super_samples)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
