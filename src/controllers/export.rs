use std::fs;
use std::path::{Path, PathBuf};

use time::{Date, OffsetDateTime};
use tracing::info;

use crate::controllers::ports::file_exporter::{ExportError, ExportFormat, FileExporterPort};
use crate::core::data::frame_buffer::FrameBuffer;

/// `mandelbrot-YYYY-MM-DD-<zoom>x.<ext>`, with the zoom rounded half away
/// from zero.
#[must_use]
pub fn export_file_name(date: Date, zoom: f64, format: ExportFormat) -> String {
    format!(
        "mandelbrot-{:04}-{:02}-{:02}-{}x.{}",
        date.year(),
        u8::from(date.month()),
        date.day(),
        zoom.round(),
        format.extension()
    )
}

/// Writes `frame` into `directory` under its dated file name, creating the
/// directory if needed. Returns the path written.
pub fn export_frame<P: FileExporterPort + ?Sized>(
    exporter: &P,
    frame: &FrameBuffer,
    zoom: f64,
    directory: &Path,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(directory).map_err(|source| ExportError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let today = OffsetDateTime::now_utc().date();
    let path = directory.join(export_file_name(today, zoom, exporter.format()));

    exporter.export(frame, &path)?;

    info!(
        path = %path.display(),
        width = frame.size().width(),
        height = frame.size().height(),
        "frame exported"
    );

    Ok(path)
}
