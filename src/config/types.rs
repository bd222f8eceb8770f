use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::controllers::ports::file_exporter::ExportFormat;
use crate::core::data::frame_size::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

pub const DEFAULT_EXPORT_DIRECTORY: &str = "output";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Root configuration container. Every section and key is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub canvas: CanvasConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Size of the rendered frame in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where exported images are written. Created on first export.
    pub directory: PathBuf,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_EXPORT_DIRECTORY),
            format: ExportFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"mandelbrot_explorer=debug"`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
