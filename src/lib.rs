pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::cli::CliRenderController;
pub use controllers::export::{export_file_name, export_frame};
pub use controllers::interactive::{
    Explorer, InputEvent, InteractionController, InteractionEffect, RenderEvent,
    RenderPresenterPort, RenderWorker,
};
pub use controllers::ports::file_exporter::{ExportError, ExportFormat, FileExporterPort};
pub use crate::core::actions::compute_frame::{compute_frame, compute_frame_cancelable};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::frame_size::FrameSize;
pub use crate::core::data::point::CanvasPosition;
pub use crate::core::data::viewport::{ViewportReadout, ViewportState};
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
pub use presenters::file::image_file::ImageFileExporter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
