use std::marker::PhantomData;

use anyhow::anyhow;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::config::types::ExplorerConfig;
use crate::controllers::interactive::explorer::Explorer;
use crate::core::data::viewport::ViewportState;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::file::image_file::ImageFileExporter;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let canvas_size = self.config.frame_size()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .map_err(|e| anyhow!("failed to create event loop: {e}"))?;

        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(canvas_size.width()),
                    f64::from(canvas_size.height()),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .map_err(|e| anyhow!("failed to create window: {e}"))?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, canvas_size)
            .map_err(|e| anyhow!("failed to create pixels surface: {e}"))?;
        let explorer = Explorer::new(
            ViewportState::default(),
            canvas_size,
            presenter.share_adapter(),
        );
        let app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            explorer,
            ImageFileExporter::new(self.config.export.format),
            self.config.export.directory.clone(),
        );

        app.run(event_loop)
            .map_err(|e| anyhow!("event loop error: {e}"))?;

        Ok(())
    }
}
