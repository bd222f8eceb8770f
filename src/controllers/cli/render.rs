use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::controllers::export::export_frame;
use crate::controllers::ports::file_exporter::{ExportError, FileExporterPort};
use crate::core::actions::compute_frame::compute_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::ViewportState;

/// Renders single frames synchronously and hands them to a file exporter.
pub struct CliRenderController<P: FileExporterPort> {
    exporter: P,
    rendered: Option<(FrameBuffer, ViewportState)>,
}

impl<P: FileExporterPort> CliRenderController<P> {
    pub fn new(exporter: P) -> Self {
        Self {
            exporter,
            rendered: None,
        }
    }

    pub fn render(&mut self, viewport: ViewportState, size: FrameSize) -> Duration {
        info!(
            width = size.width(),
            height = size.height(),
            center_real = viewport.center().real,
            center_imag = viewport.center().imag,
            zoom = viewport.zoom(),
            max_iterations = viewport.max_iterations(),
            scheme = %viewport.scheme(),
            "rendering"
        );

        let start = Instant::now();
        let frame = compute_frame(&viewport, size);
        let duration = start.elapsed();

        debug!(?duration, "render finished");

        self.rendered = Some((frame, viewport));
        duration
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.rendered.as_ref().map(|(frame, _)| frame)
    }

    /// Writes the last frame to an explicit path.
    pub fn write(&self, filepath: &Path) -> Result<(), ExportError> {
        let (frame, _) = self.rendered.as_ref().ok_or(ExportError::NothingRendered)?;

        self.exporter.export(frame, filepath)?;
        info!(path = %filepath.display(), "frame written");

        Ok(())
    }

    /// Writes the last frame into `directory` under its dated export name.
    pub fn export_to(&self, directory: &Path) -> Result<PathBuf, ExportError> {
        let (frame, viewport) = self.rendered.as_ref().ok_or(ExportError::NothingRendered)?;

        export_frame(&self.exporter, frame, viewport.zoom(), directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::ports::file_exporter::ExportFormat;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockExporter {
        written: RefCell<Vec<(PathBuf, FrameSize)>>,
    }

    impl FileExporterPort for &MockExporter {
        fn format(&self) -> ExportFormat {
            ExportFormat::Png
        }

        fn export(&self, frame: &FrameBuffer, filepath: &Path) -> Result<(), ExportError> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), frame.size()));
            Ok(())
        }
    }

    #[test]
    fn test_write_before_render_fails() {
        let exporter = MockExporter::default();
        let controller = CliRenderController::new(&exporter);

        let result = controller.write(Path::new("unused.png"));

        assert!(matches!(result, Err(ExportError::NothingRendered)));
        assert!(exporter.written.borrow().is_empty());
    }

    #[test]
    fn test_render_then_write_passes_frame_to_exporter() {
        let exporter = MockExporter::default();
        let mut controller = CliRenderController::new(&exporter);
        let size = FrameSize::new(8, 6).unwrap();

        controller.render(ViewportState::default(), size);
        controller.write(Path::new("out.png")).unwrap();

        assert_eq!(controller.frame().map(FrameBuffer::size), Some(size));
        assert_eq!(
            *exporter.written.borrow(),
            vec![(PathBuf::from("out.png"), size)]
        );
    }

    #[test]
    fn test_export_to_uses_zoom_in_file_name() {
        let temp = tempfile::tempdir().unwrap();
        let exporter = MockExporter::default();
        let mut controller = CliRenderController::new(&exporter);
        let mut viewport = ViewportState::default();
        viewport.zoom_in();
        viewport.zoom_in();

        controller.render(viewport, FrameSize::new(4, 4).unwrap());
        let path = controller.export_to(temp.path()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("-6x.png"), "{}", name);
    }
}
