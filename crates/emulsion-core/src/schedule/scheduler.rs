use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::consts::{DEFAULT_DEBOUNCE_MS, DEFAULT_FULL_MAX_DIMENSION};
use crate::frame::Image;
use crate::io::image_io::save_image;
use crate::pipeline::engine::{render_with, RenderContext};
use crate::pipeline::{CancelToken, PreviewPolicy, Tier};
use crate::preset::Preset;

use super::messages::{RenderCommand, RenderEvent};

/// Handle to the render worker. Cloneable state lives behind atomics; the
/// worker exits when the last command sender is dropped.
pub struct RenderScheduler {
    cmd_tx: mpsc::Sender<RenderCommand>,
    live: Arc<AtomicU64>,
    in_flight: Arc<Mutex<Option<CancelToken>>>,
}

impl RenderScheduler {
    /// Spawn the workers with the default debounce window.
    pub fn new(policy: PreviewPolicy) -> (Self, mpsc::Receiver<RenderEvent>) {
        Self::with_debounce(policy, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    pub fn with_debounce(
        policy: PreviewPolicy,
        debounce: Duration,
    ) -> (Self, mpsc::Receiver<RenderEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RenderCommand>();
        let (event_tx, event_rx) = mpsc::channel::<RenderEvent>();

        let live = Arc::new(AtomicU64::new(0));
        let in_flight = Arc::new(Mutex::new(None));

        let worker = Worker {
            policy,
            debounce,
            live: Arc::clone(&live),
            in_flight: Arc::clone(&in_flight),
            event_tx: event_tx.clone(),
            save_tx: spawn_save_worker(event_tx),
            buffers: None,
            frame_counter: 0,
        };

        std::thread::Builder::new()
            .name("emulsion-render".into())
            .spawn(move || worker.run(cmd_rx))
            .expect("Failed to spawn render worker thread");

        let scheduler = Self {
            cmd_tx,
            live,
            in_flight,
        };
        (scheduler, event_rx)
    }

    /// Replace the source image. Both capped buffers are regenerated and
    /// any in-flight render is invalidated.
    pub fn load_source(&self, image: Image) {
        let generation = self.bump();
        let _ = self.cmd_tx.send(RenderCommand::LoadSource { image, generation });
    }

    /// Enqueue a preview render for the given effective preset. Returns
    /// the generation the eventual event will carry.
    pub fn request_render(&self, preset: Preset) -> u64 {
        let generation = self.bump();
        let _ = self.cmd_tx.send(RenderCommand::Render { preset, generation });
        generation
    }

    /// Export the full-resolution buffer. Serialized, off the interactive
    /// path; does not invalidate pending previews.
    pub fn save(&self, preset: Preset, path: PathBuf) {
        let _ = self.cmd_tx.send(RenderCommand::Save { preset, path });
    }

    /// Whether an event carrying this generation is still the newest
    /// issued request.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.live.load(Ordering::Acquire)
    }

    pub fn generation(&self) -> u64 {
        self.live.load(Ordering::Acquire)
    }

    /// Advance the live generation and cancel whatever render it obsoletes.
    fn bump(&self) -> u64 {
        let generation = self.live.fetch_add(1, Ordering::AcqRel) + 1;
        self.cancel_in_flight();
        generation
    }

    fn cancel_in_flight(&self) {
        if let Ok(slot) = self.in_flight.lock() {
            if let Some(token) = slot.as_ref() {
                token.cancel();
            }
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        // The command sender drops right after, disconnecting the channel;
        // cancelling first lets an in-flight render bail between stages.
        self.cancel_in_flight();
    }
}

/// Source image captured at two resolutions: the interactive preview cap
/// and the (much larger) export cap.
struct SourceBuffers {
    preview: Image,
    full: Image,
}

struct SaveJob {
    image: Image,
    preset: Preset,
    path: PathBuf,
}

struct Worker {
    policy: PreviewPolicy,
    debounce: Duration,
    live: Arc<AtomicU64>,
    in_flight: Arc<Mutex<Option<CancelToken>>>,
    event_tx: mpsc::Sender<RenderEvent>,
    save_tx: mpsc::Sender<SaveJob>,
    buffers: Option<SourceBuffers>,
    frame_counter: u64,
}

impl Worker {
    fn run(mut self, cmd_rx: mpsc::Receiver<RenderCommand>) {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                RenderCommand::LoadSource { image, generation } => {
                    self.handle_load_source(image, generation);
                }
                RenderCommand::Render { preset, generation } => {
                    let carried = self.handle_render_debounced(&cmd_rx, preset, generation);
                    match carried {
                        Some(RenderCommand::LoadSource { image, generation }) => {
                            self.handle_load_source(image, generation);
                        }
                        Some(RenderCommand::Save { preset, path }) => {
                            self.handle_save(preset, path);
                        }
                        Some(RenderCommand::Render { .. }) | None => {}
                    }
                }
                RenderCommand::Save { preset, path } => {
                    self.handle_save(preset, path);
                }
            }
        }
    }

    fn handle_load_source(&mut self, image: Image, generation: u64) {
        debug!(
            generation,
            width = image.width(),
            height = image.height(),
            "source loaded"
        );
        self.buffers = Some(SourceBuffers {
            preview: image.resize_to_fit(self.policy.max_dimension),
            full: image.resize_to_fit(DEFAULT_FULL_MAX_DIMENSION),
        });
        self.frame_counter = 0;
    }

    /// Debounce a burst of render requests: keep draining the channel
    /// until it stays quiet for the window, rendering only the survivor.
    /// A non-render command ends the window and is handed back.
    fn handle_render_debounced(
        &mut self,
        cmd_rx: &mpsc::Receiver<RenderCommand>,
        mut preset: Preset,
        mut generation: u64,
    ) -> Option<RenderCommand> {
        let mut carried = None;
        loop {
            match cmd_rx.recv_timeout(self.debounce) {
                Ok(RenderCommand::Render { preset: p, generation: g }) => {
                    preset = p;
                    generation = g;
                }
                Ok(other) => {
                    carried = Some(other);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }

        self.render_preview(preset, generation);
        carried
    }

    fn render_preview(&mut self, preset: Preset, generation: u64) {
        if generation != self.live.load(Ordering::Acquire) {
            debug!(generation, "render request superseded before start");
            return;
        }
        let Some(buffers) = &self.buffers else {
            debug!("render requested with no source loaded");
            return;
        };

        let token = CancelToken::new();
        if let Ok(mut slot) = self.in_flight.lock() {
            *slot = Some(token.clone());
        }

        let ctx = RenderContext {
            policy: self.policy.clone(),
            frame_counter: self.frame_counter,
            cancel: Some(token),
        };
        let start = Instant::now();
        let result = render_with(&buffers.preview, &preset, Tier::Preview, &ctx);

        if let Ok(mut slot) = self.in_flight.lock() {
            *slot = None;
        }

        if generation != self.live.load(Ordering::Acquire) {
            debug!(generation, "render result stale at delivery, dropped");
            return;
        }

        match result {
            Ok(Some(image)) => {
                self.frame_counter = self.frame_counter.wrapping_add(1);
                let _ = self.event_tx.send(RenderEvent::Preview {
                    image,
                    generation,
                    elapsed: start.elapsed(),
                });
            }
            // Cancelled between stages; a newer request owns the display.
            Ok(None) => {
                debug!(generation, "render cancelled");
            }
            Err(e) => {
                warn!(generation, error = %e, "render failed, falling back to source");
                let _ = self.event_tx.send(RenderEvent::Fallback {
                    image: buffers.preview.clone(),
                    generation,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn handle_save(&self, preset: Preset, path: PathBuf) {
        let Some(buffers) = &self.buffers else {
            let _ = self.event_tx.send(RenderEvent::SaveFailed {
                path,
                message: "no source image loaded".into(),
            });
            return;
        };
        let _ = self.save_tx.send(SaveJob {
            image: buffers.full.clone(),
            preset,
            path,
        });
    }
}

/// One save in flight at a time: the channel serializes jobs and the
/// thread renders each at full tier before writing.
fn spawn_save_worker(event_tx: mpsc::Sender<RenderEvent>) -> mpsc::Sender<SaveJob> {
    let (save_tx, save_rx) = mpsc::channel::<SaveJob>();

    std::thread::Builder::new()
        .name("emulsion-save".into())
        .spawn(move || {
            while let Ok(job) = save_rx.recv() {
                let start = Instant::now();
                let ctx = RenderContext::default();
                let rendered = render_with(&job.image, &job.preset, Tier::Full, &ctx);

                let outcome = match rendered {
                    Ok(Some(image)) => save_image(&image, &job.path),
                    Ok(None) => save_image(&job.image, &job.path),
                    Err(e) => Err(e),
                };

                let event = match outcome {
                    Ok(()) => RenderEvent::Saved {
                        path: job.path,
                        elapsed: start.elapsed(),
                    },
                    Err(e) => RenderEvent::SaveFailed {
                        path: job.path,
                        message: e.to_string(),
                    },
                };
                let _ = event_tx.send(event);
            }
        })
        .expect("Failed to spawn save worker thread");

    save_tx
}
