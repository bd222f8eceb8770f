use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::config::types::ExplorerConfig;
use crate::core::data::frame_size::FrameSize;

pub const DEFAULT_CONFIG_FILE: &str = "mandelbrot_explorer.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ExplorerConfig {
    /// Loads `mandelbrot_explorer.toml` from the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `ExplorerConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - Canvas dimensions are non-zero
    /// - The export directory is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frame_size()?;

        if self.export.directory.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Export directory must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn frame_size(&self) -> Result<FrameSize, ConfigError> {
        FrameSize::new(self.canvas.width, self.canvas.height).map_err(|e| {
            ConfigError::ValidationError {
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::ports::file_exporter::ExportFormat;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();

        let config = ExplorerConfig::load_from(&temp.path().join("absent.toml")).unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.canvas.width, 1000);
        assert_eq!(config.canvas.height, 1000);
        assert_eq!(config.export.directory, PathBuf::from("output"));
        assert_eq!(config.export.format, ExportFormat::Png);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("explorer.toml");
        fs::write(
            &path,
            "[canvas]\nwidth = 640\n\n[export]\nformat = \"ppm\"\n",
        )
        .unwrap();

        let config = ExplorerConfig::load_from(&path).unwrap();

        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 1000);
        assert_eq!(config.export.format, ExportFormat::Ppm);
        assert_eq!(config.export.directory, PathBuf::from("output"));
        assert_eq!(config.frame_size().unwrap(), FrameSize::new(640, 1000).unwrap());
    }

    #[test]
    fn test_full_file() {
        let config = ExplorerConfig::parse(
            r#"
            [canvas]
            width = 800
            height = 600

            [export]
            directory = "renders"
            format = "png"

            [logging]
            filter = "mandelbrot_explorer=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.frame_size().unwrap(), FrameSize::new(800, 600).unwrap());
        assert_eq!(config.export.directory, PathBuf::from("renders"));
        assert_eq!(config.logging.filter, "mandelbrot_explorer=debug");
    }

    #[test]
    fn test_zero_canvas_is_rejected() {
        let result = ExplorerConfig::parse("[canvas]\nheight = 0\n");

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        let result = ExplorerConfig::parse("[export]\ndirectory = \"\"\n");

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let result = ExplorerConfig::load_from(&path);

        match result {
            Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = ExplorerConfig::parse("[export]\nformat = \"gif\"\n");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
