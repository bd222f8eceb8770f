use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use tracing::trace;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::CanvasPosition;
use crate::core::data::viewport::ViewportState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::RenderStatus;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Draws rendered frames into a fixed-size pixels buffer, scaled to the
/// window, with egui painted on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    canvas_size: FrameSize,
    surface_width: u32,
    surface_height: u32,
    status: RenderStatus,
    latest: Option<(FrameBuffer, ViewportState)>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn RenderPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn RenderPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.poll_render_events();

        self.pixels.render_with(|encoder, render_target, context| {
            // The scaling pass draws the canvas buffer onto the surface.
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the canvas
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        // Only the surface follows the window; the canvas buffer keeps the
        // size frames are rendered at.
        self.pixels.resize_surface(width, height)
    }

    fn poll_render_events(&mut self) -> bool {
        let events = self.adapter.take_render_events();
        let changed = !events.is_empty();

        for event in events {
            match event {
                RenderEvent::Started { generation } => {
                    self.status.record_started(generation);
                }
                RenderEvent::Frame(frame) => {
                    if frame.frame.size() != self.canvas_size
                        || !self.status.accept_frame(frame.generation, frame.render_duration)
                    {
                        trace!(generation = frame.generation, "dropping stale frame");
                        continue;
                    }

                    self.pixels.frame_mut().copy_from_slice(frame.frame.data());
                    self.latest = Some((frame.frame, frame.viewport));
                }
            }
        }

        changed
    }

    fn status(&self) -> RenderStatus {
        self.status
    }

    fn latest_frame(&self) -> Option<(&FrameBuffer, &ViewportState)> {
        self.latest.as_ref().map(|(frame, viewport)| (frame, viewport))
    }

    fn window_to_canvas(&self, position: (f64, f64)) -> Result<CanvasPosition, CanvasPosition> {
        match self
            .pixels
            .window_pos_to_pixel((position.0 as f32, position.1 as f32))
        {
            Ok((x, y)) => Ok(CanvasPosition::new(x as f64, y as f64)),
            Err((x, y)) => Err(CanvasPosition::new(x as f64, y as f64)),
        }
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        canvas_size: FrameSize,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let mut pixels = Pixels::new(canvas_size.width(), canvas_size.height(), surface_texture)?;
        Self::draw_placeholder(pixels.frame_mut());

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            canvas_size,
            surface_width: size.width,
            surface_height: size.height,
            status: RenderStatus::default(),
            latest: None,
        })
    }

    fn draw_placeholder(frame: &mut [u8]) {
        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}
