/// Integer pixel position inside a frame, origin at the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Position in canvas pixel units. Fractional, and may lie outside
/// the canvas while a drag is in progress.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CanvasPosition {
    pub x: f64,
    pub y: f64,
}

impl CanvasPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
