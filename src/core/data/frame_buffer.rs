use crate::core::data::frame_size::FrameSize;

pub const BYTES_PER_PIXEL: usize = 4;

fn frame_size_to_buffer_len(size: FrameSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

/// Row-major RGBA pixels, alpha always opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    size: FrameSize,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Opaque black frame.
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        let mut data = vec![0; frame_size_to_buffer_len(size)];
        for alpha in data.iter_mut().skip(3).step_by(BYTES_PER_PIXEL) {
            *alpha = 255;
        }

        Self { size, data }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA chunks in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_size(width: u32, height: u32) -> FrameSize {
        FrameSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_opaque_black_frame() {
        let buffer = FrameBuffer::new(create_size(10, 10));

        assert_eq!(buffer.size(), create_size(10, 10));
        assert_eq!(buffer.data().len(), 400);
        for pixel in buffer.data().chunks_exact(4) {
            assert_eq!(pixel, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_pixels_mut_visits_every_pixel_in_row_major_order() {
        let mut buffer = FrameBuffer::new(create_size(3, 2));

        for (i, pixel) in buffer.pixels_mut().enumerate() {
            pixel[0] = i as u8;
        }

        // (1, 0) is the second chunk, (0, 1) starts the second row.
        assert_eq!(buffer.data()[4], 1);
        assert_eq!(buffer.data()[12], 3);
        assert_eq!(&buffer.data()[20..24], &[5, 0, 0, 255]);
    }

    #[test]
    fn test_pixels_mut_yields_one_chunk_per_pixel() {
        let mut buffer = FrameBuffer::new(create_size(4, 3));

        assert_eq!(buffer.pixels_mut().count(), 12);
        assert!(buffer.pixels_mut().all(|pixel| pixel.len() == BYTES_PER_PIXEL));
    }
}
