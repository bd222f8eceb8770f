use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, trace};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::actions::cancellation::SupersededToken;
use crate::core::actions::compute_frame::compute_frame_cancelable;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn RenderPresenterPort>,
}

impl SharedState {
    /// Blocks until a request is waiting. `None` once shutdown is requested.
    fn next_job(&self) -> Option<(u64, RenderRequest)> {
        let mut pending = self.latest_request.lock().unwrap();

        loop {
            if self.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = pending.take() {
                return Some(job);
            }

            pending = self.wake.wait(pending).unwrap();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }

    fn render(&self, generation: u64, request: RenderRequest) {
        let cancel_token = SupersededToken::new(generation, &self.generation, &self.shutdown);

        self.presenter_port.present(RenderEvent::Started { generation });

        let start = Instant::now();
        let result = compute_frame_cancelable(&request.viewport, request.size, &cancel_token);
        let render_duration = start.elapsed();

        let Ok(frame) = result else {
            trace!(generation, "render pass cancelled");
            return;
        };

        // A newer request can land between the last cancellation check and
        // the end of the pass.
        if !self.is_current(generation) {
            trace!(generation, "finished frame is stale, discarding");
            return;
        }

        debug!(
            generation,
            width = request.size.width(),
            height = request.size.height(),
            ?render_duration,
            "frame rendered"
        );

        self.presenter_port.present(RenderEvent::Frame(FrameData {
            generation,
            frame,
            viewport: request.viewport,
            render_duration,
        }));

        self.last_completed_generation
            .store(generation, Ordering::Release);
    }
}

/// Runs render passes on a dedicated thread, one at a time.
///
/// Only the newest request matters: submitting a request replaces any
/// request still waiting, and a pass in progress for an older generation is
/// abandoned at its next cancellation check without emitting a frame.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    thread: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(presenter_port: Arc<dyn RenderPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let thread_shared = Arc::clone(&shared);
        let thread = thread::spawn(move || {
            while let Some((generation, request)) = thread_shared.next_job() {
                thread_shared.render(generation, request);
            }
        });

        Self {
            shared,
            thread: Some(thread),
        }
    }

    /// Queues `request` and returns its generation.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let superseded = self
            .shared
            .latest_request
            .lock()
            .unwrap()
            .replace((generation, request));
        if let Some((superseded, _)) = superseded {
            trace!(superseded, generation, "pending render superseded");
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Stops the render thread after its current pass. Idempotent.
    pub fn shutdown(&mut self) {
        {
            // Held so the flag cannot slip in between the thread's check and
            // its wait.
            let _pending = self.shared.latest_request.lock().unwrap();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    /// Newest generation that produced a frame, 0 before the first one.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
