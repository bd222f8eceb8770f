use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_frame_buffer::generate_frame_buffer::generate_frame_buffer;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::SchemeColourMap;

/// Renders the whole frame for `viewport` in one pass.
#[must_use]
pub fn compute_frame(viewport: &ViewportState, size: FrameSize) -> FrameBuffer {
    match compute_frame_cancelable(viewport, size, &NeverCancel) {
        Ok(frame) => frame,
        Err(Cancelled) => unreachable!("NeverCancel never cancels"),
    }
}

/// Escape values first, colours second. Both stages poll `cancel`.
pub fn compute_frame_cancelable<C: CancelToken>(
    viewport: &ViewportState,
    size: FrameSize,
    cancel: &C,
) -> Result<FrameBuffer, Cancelled> {
    let algorithm = MandelbrotAlgorithm::new(size, *viewport);
    let colour_map = SchemeColourMap::new(viewport.scheme(), viewport.max_iterations());

    let grid = generate_fractal(size, &algorithm, cancel)?;

    if cancel.is_cancelled() {
        return Err(Cancelled);
    }

    generate_frame_buffer(&grid, &colour_map, cancel)
}
