use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;

/// One computed value per pixel, row-major. The value count always matches
/// the frame size.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalGrid<T> {
    size: FrameSize,
    values: Vec<T>,
}

impl<T> FractalGrid<T> {
    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Runs `algorithm` over every pixel of the frame, one pixel at a time in
/// row-major order.
///
/// Checks `cancel` before the first pixel and then every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A cancelled pass returns no
/// partial data.
pub fn generate_fractal<Alg, C>(
    size: FrameSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<FractalGrid<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let mut values = Vec::with_capacity(size.pixel_count());

    for (i, pixel) in size.points().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        values.push(algorithm.compute(pixel));
    }

    Ok(FractalGrid { size, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Output = u64;

        fn compute(&self, pixel: Point) -> u64 {
            u64::from(pixel.x) + 10 * u64::from(pixel.y)
        }
    }

    #[test]
    fn test_generates_row_major_values() {
        let size = FrameSize::new(3, 2).unwrap();

        let grid = generate_fractal(size, &StubAlgorithm {}, &NeverCancel).unwrap();

        assert_eq!(grid.size(), size);
        assert_eq!(grid.values(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_single_pixel_frame() {
        let size = FrameSize::new(1, 1).unwrap();

        let grid = generate_fractal(size, &StubAlgorithm {}, &NeverCancel).unwrap();

        assert_eq!(grid.values(), &[0]);
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let size = FrameSize::new(4, 4).unwrap();
        let cancel = || true;

        let result = generate_fractal(size, &StubAlgorithm {}, &cancel);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancellation_checked_periodically() {
        let size = FrameSize::new(64, 64).unwrap();
        let checks = AtomicUsize::new(0);
        let cancel = || {
            checks.fetch_add(1, Ordering::Relaxed);
            false
        };

        generate_fractal(size, &StubAlgorithm {}, &cancel).unwrap();

        assert_eq!(
            checks.load(Ordering::Relaxed),
            (64 * 64) / CANCEL_CHECK_INTERVAL_PIXELS
        );
    }

    #[test]
    fn test_cancellation_mid_pass_stops_early() {
        let size = FrameSize::new(100, 100).unwrap();
        let checks = AtomicUsize::new(0);
        let cancel = || checks.fetch_add(1, Ordering::Relaxed) >= 2;

        let result = generate_fractal(size, &StubAlgorithm {}, &cancel);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(checks.load(Ordering::Relaxed), 3);
    }
}
