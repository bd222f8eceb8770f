use std::time::Duration;

use crate::controllers::interactive::events::input::InputEvent;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

/// Tracks which generations have started and which reached the screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStatus {
    latest_started: u64,
    last_presented: u64,
    last_render_duration: Option<Duration>,
}

impl RenderStatus {
    pub fn record_started(&mut self, generation: u64) {
        self.latest_started = self.latest_started.max(generation);
    }

    /// Returns false for a frame older than the one already on screen.
    pub fn accept_frame(&mut self, generation: u64, render_duration: Duration) -> bool {
        if generation <= self.last_presented {
            return false;
        }

        self.last_presented = generation;
        self.latest_started = self.latest_started.max(generation);
        self.last_render_duration = Some(render_duration);
        true
    }

    /// True while a started pass has not yet been superseded by a frame.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.latest_started > self.last_presented
    }

    #[must_use]
    pub fn last_presented(&self) -> u64 {
        self.last_presented
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}

/// Values bound to egui widgets between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiAppState {
    pub slider_iterations: u32,
    pub selected_scheme: ColourSchemeKind,
    pub status_message: Option<String>,
}

impl GuiAppState {
    #[must_use]
    pub fn new(viewport: &ViewportState) -> Self {
        Self {
            slider_iterations: viewport.max_iterations(),
            selected_scheme: viewport.scheme(),
            status_message: None,
        }
    }

    /// Pulls widget values back from the viewport after it was changed by
    /// an event (snapping, reset).
    pub fn sync(&mut self, viewport: &ViewportState) {
        self.slider_iterations = viewport.max_iterations();
        self.selected_scheme = viewport.scheme();
    }

    /// Events for one frame of slider interaction. Dragging only updates
    /// the value; releasing the handle, or a click or key press that changes
    /// the value without a drag, commits it.
    #[must_use]
    pub fn slider_events(&self, changed: bool, dragging: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if changed {
            events.push(InputEvent::IterationsInput(self.slider_iterations));
        }

        if released || (changed && !dragging) {
            events.push(InputEvent::IterationsCommit);
        }

        events
    }
}
