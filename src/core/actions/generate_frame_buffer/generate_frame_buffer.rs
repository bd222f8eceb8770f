use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal::FractalGrid;
use crate::core::actions::generate_frame_buffer::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::FrameBuffer;

/// Colours every value of `grid` into a fresh, fully opaque frame.
///
/// Checks `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A
/// cancelled pass drops the partially written frame.
pub fn generate_frame_buffer<T, CMap, C>(
    grid: &FractalGrid<T>,
    mapper: &CMap,
    cancel: &C,
) -> Result<FrameBuffer, Cancelled>
where
    T: Copy,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut frame = FrameBuffer::new(grid.size());

    for (i, (pixel, &value)) in frame.pixels_mut().zip(grid.values()).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        pixel.copy_from_slice(&mapper.map(value).to_rgba());
    }

    Ok(frame)
}
