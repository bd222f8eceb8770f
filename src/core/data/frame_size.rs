use thiserror::Error;

use crate::core::data::point::Point;

pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FrameSizeError {
    #[error("frame size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of a framebuffer in pixels. Both sides are non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major iterator over every pixel position.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_new_valid() {
        let size = FrameSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_frame_size_rejects_zero_dimensions() {
        assert_eq!(
            FrameSize::new(0, 10),
            Err(FrameSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            FrameSize::new(10, 0),
            Err(FrameSizeError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_default_is_reference_canvas() {
        let size = FrameSize::default();

        assert_eq!((size.width(), size.height()), (1000, 1000));
    }

    #[test]
    fn test_points_are_row_major() {
        let size = FrameSize::new(2, 2).unwrap();
        let points: Vec<Point> = size.points().collect();

        assert_eq!(
            points,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
            ]
        );
    }
}
