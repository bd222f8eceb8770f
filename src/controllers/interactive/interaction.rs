use tracing::trace;

use crate::controllers::interactive::events::input::InputEvent;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::CanvasPosition;
use crate::core::data::viewport::{ViewportReadout, ViewportState};
use crate::core::util::coordinate_mapping::{fraction_to_complex, pixel_to_fraction};

/// Pointer travel, in pixels along either axis, beyond which a press is a
/// drag rather than a click.
pub const DRAG_THRESHOLD_PIXELS: f64 = 3.0;

/// What the host has to do after an event has been applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionEffect {
    None,
    /// Readout text changed. No render needed.
    Readout,
    Render,
    Export,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    pub start_position: CanvasPosition,
    pub start_center: Complex,
    pub moved: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Dragging(DragSession),
}

/// Pan, click-zoom, slider, scheme and reset handling over a single
/// [`ViewportState`].
#[derive(Debug, Clone)]
pub struct InteractionController {
    viewport: ViewportState,
    size: FrameSize,
    state: InteractionState,
}

impl InteractionController {
    #[must_use]
    pub fn new(viewport: ViewportState, size: FrameSize) -> Self {
        Self {
            viewport,
            size,
            state: InteractionState::Idle,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn readout(&self) -> ViewportReadout {
        self.viewport.readout()
    }

    /// Value shown next to the iteration slider.
    #[must_use]
    pub fn iterations_readout(&self) -> u32 {
        self.viewport.max_iterations()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> InteractionEffect {
        let effect = match event {
            InputEvent::PointerDown(position) => self.begin_drag(position),
            InputEvent::PointerMove(position) => self.drag_to(position),
            InputEvent::PointerUp(position) => self.release(position),
            InputEvent::PointerLeave => self.leave(),
            InputEvent::IterationsInput(requested) => {
                let stored = self.viewport.set_max_iterations(requested);
                trace!(requested, stored, "iteration budget updated");
                InteractionEffect::Readout
            }
            InputEvent::IterationsCommit => InteractionEffect::Render,
            InputEvent::SelectScheme(scheme) => {
                self.viewport.set_scheme(scheme);
                InteractionEffect::Render
            }
            InputEvent::Reset => {
                self.viewport.reset();
                self.state = InteractionState::Idle;
                InteractionEffect::Render
            }
            InputEvent::Export => InteractionEffect::Export,
        };

        trace!(?event, ?effect, state = ?self.state, "input handled");
        effect
    }

    fn begin_drag(&mut self, position: CanvasPosition) -> InteractionEffect {
        self.state = InteractionState::Dragging(DragSession {
            start_position: position,
            start_center: self.viewport.center(),
            moved: false,
        });

        InteractionEffect::None
    }

    fn drag_to(&mut self, position: CanvasPosition) -> InteractionEffect {
        let InteractionState::Dragging(session) = &mut self.state else {
            return InteractionEffect::None;
        };

        let dx = position.x - session.start_position.x;
        let dy = position.y - session.start_position.y;

        if dx.abs() > DRAG_THRESHOLD_PIXELS || dy.abs() > DRAG_THRESHOLD_PIXELS {
            session.moved = true;
        }

        let span = self.viewport.plane_span();
        let center = Complex::new(
            session.start_center.real - dx / f64::from(self.size.width()) * span,
            session.start_center.imag - dy / f64::from(self.size.height()) * span,
        );
        self.viewport.set_center(center);

        InteractionEffect::Readout
    }

    fn release(&mut self, position: CanvasPosition) -> InteractionEffect {
        let InteractionState::Dragging(session) = self.state else {
            return InteractionEffect::None;
        };
        self.state = InteractionState::Idle;

        if !session.moved {
            // Any sub-threshold pan already moved the plane with the cursor,
            // so the fraction is taken against the current center.
            let fraction = pixel_to_fraction(position, self.size);
            self.viewport
                .set_center(fraction_to_complex(fraction, &self.viewport));
            self.viewport.zoom_in();
        }

        InteractionEffect::Render
    }

    fn leave(&mut self) -> InteractionEffect {
        let InteractionState::Dragging(session) = self.state else {
            return InteractionEffect::None;
        };
        self.state = InteractionState::Idle;

        if session.moved {
            InteractionEffect::Render
        } else {
            InteractionEffect::None
        }
    }
}
