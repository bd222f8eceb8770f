use std::path::PathBuf;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::window::Window;

use crate::controllers::export::export_frame;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::explorer::Explorer;
use crate::controllers::interactive::interaction::InteractionEffect;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;
use crate::presenters::file::image_file::ImageFileExporter;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    explorer: Explorer,
    state: GuiAppState,
    exporter: ImageFileExporter,
    export_directory: PathBuf,
    /// Last cursor position in physical window pixels.
    cursor: Option<(f64, f64)>,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        explorer: Explorer,
        exporter: ImageFileExporter,
        export_directory: PathBuf,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let state = GuiAppState::new(explorer.viewport());

        Self {
            window,
            presenter,
            explorer,
            state,
            exporter,
            export_directory,
            cursor: None,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), winit::error::EventLoopError> {
        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.presenter.poll_render_events() {
                    self.redraw_pending = true;
                }
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.explorer.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;

                let egui_output = self.update_ui();

                self.egui_state
                    .handle_platform_output(self.window, egui_output.platform_output.clone());

                if egui_output
                    .viewport_output
                    .values()
                    .any(|v| v.repaint_delay.is_zero())
                {
                    self.redraw_pending = true;
                }

                if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
                    error!(error = %e, "render error");
                    self.explorer.shutdown();
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if !resize_presenter(&mut self.presenter, size.width, size.height) {
                    self.explorer.shutdown();
                    elwt.exit();
                    return;
                }
                self.redraw_pending = true;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                if !resize_presenter(&mut self.presenter, size.width, size.height) {
                    self.explorer.shutdown();
                    elwt.exit();
                    return;
                }
                self.redraw_pending = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                let canvas = self
                    .presenter
                    .window_to_canvas((position.x, position.y))
                    .unwrap_or_else(|outside| outside);
                self.apply(InputEvent::PointerMove(canvas));
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.apply(InputEvent::PointerLeave);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some(cursor) = self.cursor else {
                    return;
                };

                match state {
                    // Presses over the panel or the letterbox never start a drag.
                    ElementState::Pressed if !response.consumed => {
                        if let Ok(canvas) = self.presenter.window_to_canvas(cursor) {
                            self.apply(InputEvent::PointerDown(canvas));
                        }
                    }
                    ElementState::Pressed => {}
                    ElementState::Released => {
                        let canvas = self
                            .presenter
                            .window_to_canvas(cursor)
                            .unwrap_or_else(|outside| outside);
                        self.apply(InputEvent::PointerUp(canvas));
                    }
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, event: InputEvent) {
        let effect = self.explorer.handle_event(event);

        match effect {
            InteractionEffect::Export => self.export(),
            InteractionEffect::Readout | InteractionEffect::Render => {
                self.redraw_pending = true;
            }
            InteractionEffect::None => {}
        }

        self.state.sync(self.explorer.viewport());
    }

    fn export(&mut self) {
        let Some((frame, viewport)) = self.presenter.latest_frame() else {
            self.state.status_message = Some("Nothing to export yet".to_string());
            return;
        };

        let message = match export_frame(&self.exporter, frame, viewport.zoom(), &self.export_directory) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                error!(error = %e, "export failed");
                e.to_string()
            }
        };

        info!(status = %message, "export finished");
        self.state.status_message = Some(message);
        self.redraw_pending = true;
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let readout = self.explorer.readout();
        let iterations = self.explorer.iterations_readout();
        let status = self.presenter.status();
        let mut events = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 260.0])
                .show(ctx, |ui| {
                    ui.label(format!("Real: {}", readout.center_real));
                    ui.label(format!("Imag: {}", readout.center_imag));
                    ui.label(format!("Zoom: {}", readout.magnification));
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Iterations:");
                        let slider = ui.add(
                            egui::Slider::new(&mut self.state.slider_iterations, 50..=1000)
                                .step_by(25.0)
                                .show_value(false),
                        );
                        ui.label(iterations.to_string());

                        events.extend(self.state.slider_events(
                            slider.changed(),
                            slider.dragged(),
                            slider.drag_released(),
                        ));
                    });

                    ui.label("Colour scheme:");
                    ui.horizontal_wrapped(|ui| {
                        for &kind in ColourSchemeKind::ALL {
                            let selected = self.state.selected_scheme == kind;
                            if ui.selectable_label(selected, kind.display_name()).clicked() {
                                events.push(InputEvent::SelectScheme(kind));
                            }
                        }
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Reset").clicked() {
                            events.push(InputEvent::Reset);
                        }
                        if ui.button("Export").clicked() {
                            events.push(InputEvent::Export);
                        }
                    });

                    if status.is_rendering() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Rendering…");
                        });
                    } else if let Some(duration) = status.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }

                    if let Some(message) = &self.state.status_message {
                        ui.separator();
                        ui.label(message.as_str());
                    }
                });
        });

        for event in events {
            self.apply(event);
        }

        output
    }
}

/// Returns false when the surface could not follow the window.
fn resize_presenter<T: GuiPresenterPort>(presenter: &mut T, width: u32, height: u32) -> bool {
    match presenter.resize(width, height) {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, width, height, "surface resize failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::controllers::interactive::events::render::RenderEvent;
    use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
    use crate::core::data::frame_buffer::FrameBuffer;
    use crate::core::data::point::CanvasPosition;
    use crate::core::data::viewport::ViewportState;
    use crate::input::gui::app::state::RenderStatus;

    struct NullAdapter;

    impl RenderPresenterPort for NullAdapter {
        fn present(&self, _event: RenderEvent) {}
    }

    /// Rejects any surface wider than `max_width`.
    struct MockPresenter {
        max_width: u32,
        resized_to: Option<(u32, u32)>,
    }

    impl GuiPresenterPort for MockPresenter {
        fn share_adapter(&self) -> Arc<dyn RenderPresenterPort> {
            Arc::new(NullAdapter)
        }

        fn render(
            &mut self,
            _egui_output: egui::FullOutput,
            _egui_ctx: &Context,
        ) -> Result<(), pixels::Error> {
            Ok(())
        }

        fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
            if width > self.max_width {
                return Err(pixels::TextureError::TextureWidth(width));
            }
            self.resized_to = Some((width, height));
            Ok(())
        }

        fn poll_render_events(&mut self) -> bool {
            false
        }

        fn status(&self) -> RenderStatus {
            RenderStatus::default()
        }

        fn latest_frame(&self) -> Option<(&FrameBuffer, &ViewportState)> {
            None
        }

        fn window_to_canvas(&self, position: (f64, f64)) -> Result<CanvasPosition, CanvasPosition> {
            Ok(CanvasPosition::new(position.0, position.1))
        }
    }

    #[test]
    fn test_resize_presenter_applies_valid_size() {
        let mut presenter = MockPresenter {
            max_width: 4096,
            resized_to: None,
        };

        assert!(resize_presenter(&mut presenter, 800, 600));
        assert_eq!(presenter.resized_to, Some((800, 600)));
    }

    #[test]
    fn test_resize_presenter_reports_failure_instead_of_panicking() {
        let mut presenter = MockPresenter {
            max_width: 4096,
            resized_to: None,
        };

        assert!(!resize_presenter(&mut presenter, 10_000, 600));
        assert_eq!(presenter.resized_to, None);
    }
}
