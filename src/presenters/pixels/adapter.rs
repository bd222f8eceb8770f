use std::sync::Mutex;

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Collects render events from the worker thread and wakes the event loop.
pub struct PixelsAdapter {
    render_events: Mutex<Vec<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl RenderPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        self.render_events.lock().unwrap().push(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_events: Mutex::new(Vec::new()),
            event_loop_proxy,
        }
    }

    /// Drains everything received since the last call, oldest first.
    pub fn take_render_events(&self) -> Vec<RenderEvent> {
        std::mem::take(&mut *self.render_events.lock().unwrap())
    }
}
