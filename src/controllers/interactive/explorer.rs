use std::sync::Arc;

use tracing::debug;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::interaction::{InteractionController, InteractionEffect};
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::controllers::interactive::render_worker::RenderWorker;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::{ViewportReadout, ViewportState};

/// Feeds input events through the interaction state machine and schedules
/// a render on the worker whenever the viewport needs redrawing.
///
/// All viewport mutations happen here, on the caller's thread; the worker
/// only ever sees immutable snapshots.
pub struct Explorer {
    interaction: InteractionController,
    worker: RenderWorker,
}

impl Explorer {
    /// Starts the worker and requests the first frame.
    pub fn new(
        viewport: ViewportState,
        size: FrameSize,
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        let explorer = Self {
            interaction: InteractionController::new(viewport, size),
            worker: RenderWorker::new(presenter_port),
        };
        explorer.request_render();
        explorer
    }

    pub fn handle_event(&mut self, event: InputEvent) -> InteractionEffect {
        let effect = self.interaction.handle_event(event);

        if effect == InteractionEffect::Render {
            self.request_render();
        }

        effect
    }

    /// Submits the current viewport and returns the generation it was given.
    pub fn request_render(&self) -> u64 {
        let request = RenderRequest {
            viewport: *self.interaction.viewport(),
            size: self.interaction.size(),
        };
        let generation = self.worker.submit_request(request);

        debug!(
            generation,
            zoom = request.viewport.zoom(),
            max_iterations = request.viewport.max_iterations(),
            scheme = %request.viewport.scheme(),
            "render requested"
        );

        generation
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        self.interaction.viewport()
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.interaction.size()
    }

    #[must_use]
    pub fn readout(&self) -> ViewportReadout {
        self.interaction.readout()
    }

    #[must_use]
    pub fn iterations_readout(&self) -> u32 {
        self.interaction.iterations_readout()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.worker.last_completed_generation()
    }

    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }
}
