use std::sync::Arc;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::CanvasPosition;
use crate::core::data::viewport::ViewportState;
use crate::input::gui::app::state::RenderStatus;

pub trait GuiPresenterPort {
    fn share_adapter(&self) -> Arc<dyn RenderPresenterPort>;

    /// Applies pending render events, then draws the canvas with the egui
    /// overlay on top.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    /// Follows a window resize. A zero-sized window is accepted and skipped.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Pulls pending render events into the presenter. Returns true when
    /// anything changed.
    fn poll_render_events(&mut self) -> bool;

    fn status(&self) -> RenderStatus;

    /// The frame currently on screen and the viewport it shows.
    fn latest_frame(&self) -> Option<(&FrameBuffer, &ViewportState)>;

    /// Maps a physical window position onto the canvas. `Err` carries the
    /// position when it lies outside the canvas area.
    fn window_to_canvas(&self, position: (f64, f64)) -> Result<CanvasPosition, CanvasPosition>;
}
