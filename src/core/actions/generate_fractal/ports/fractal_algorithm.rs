use crate::core::data::point::Point;

/// Per-pixel computation driven by the render loop.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
