use crate::core::data::point::CanvasPosition;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

/// Everything the host can feed into the explorer. Pointer positions are in
/// canvas pixel units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(CanvasPosition),
    PointerMove(CanvasPosition),
    PointerUp(CanvasPosition),
    PointerLeave,
    /// Continuous slider movement. Updates the budget without rendering.
    IterationsInput(u32),
    /// Slider released.
    IterationsCommit,
    SelectScheme(ColourSchemeKind),
    Reset,
    Export,
}
