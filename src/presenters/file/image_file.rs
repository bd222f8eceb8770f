use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::controllers::ports::file_exporter::{ExportError, ExportFormat, FileExporterPort};
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};

/// Encodes frames with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileExporter {
    format: ExportFormat,
}

impl FileExporterPort for ImageFileExporter {
    fn format(&self) -> ExportFormat {
        self.format
    }

    fn export(&self, frame: &FrameBuffer, filepath: &Path) -> Result<(), ExportError> {
        let file = File::create(filepath).map_err(|source| ExportError::Write {
            path: filepath.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let width = frame.size().width();
        let height = frame.size().height();

        let encoded = match self.format {
            ExportFormat::Png => PngEncoder::new(&mut writer).write_image(
                frame.data(),
                width,
                height,
                ExtendedColorType::Rgba8,
            ),
            ExportFormat::Ppm => PnmEncoder::new(&mut writer)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                .write_image(&rgb_bytes(frame), width, height, ExtendedColorType::Rgb8),
        };

        encoded.map_err(|error| match error {
            ImageError::IoError(source) => ExportError::Write {
                path: filepath.to_path_buf(),
                source,
            },
            source => ExportError::Encode {
                path: filepath.to_path_buf(),
                source,
            },
        })?;

        // Small images sit entirely in the buffer until here.
        writer.flush().map_err(|source| ExportError::Write {
            path: filepath.to_path_buf(),
            source,
        })
    }
}

impl ImageFileExporter {
    #[must_use]
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }
}

fn rgb_bytes(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .data()
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect()
}
