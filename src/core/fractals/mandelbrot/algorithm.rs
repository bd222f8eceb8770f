use std::f64::consts::LN_2;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;
use crate::core::util::coordinate_mapping::point_to_complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Smoothed escape time of `c` under `z <- z² + c`, starting from `z = 0`.
///
/// Returns exactly `max_iterations` when all `max_iterations` steps stay
/// within the escape radius. An orbit that leaves on step `n` (including the
/// last allowed step) gets the continuous count `n - log2(log2 |z|)`. Since
/// `|z| > 2` at that point the estimate is strictly below `n`, so escaped
/// values lie in `[0, max_iterations)`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> f64 {
    let mut z = Complex::ZERO;

    for step in 1..=max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return smoothed(step, z);
        }
    }

    f64::from(max_iterations)
}

fn smoothed(step: u32, z: Complex) -> f64 {
    // |z|² > 4, so both logarithms are defined and positive.
    let log_modulus = z.magnitude_squared().ln() / 2.0;
    let nu = (log_modulus / LN_2).ln() / LN_2;

    // Very distant starting points overshoot far enough to push the estimate
    // below zero.
    (f64::from(step) - nu).max(0.0)
}

#[must_use]
pub fn is_interior(escape_value: f64, max_iterations: u32) -> bool {
    escape_value >= f64::from(max_iterations)
}

/// Escape time for each pixel of a frame showing `viewport`.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: FrameSize,
    viewport: ViewportState,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = f64;

    fn compute(&self, pixel: Point) -> f64 {
        let c = point_to_complex(pixel, self.size, &self.viewport);
        escape_time(c, self.viewport.max_iterations())
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(size: FrameSize, viewport: ViewportState) -> Self {
        Self { size, viewport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardioid_center_never_escapes() {
        let c = Complex::new(-0.5, 0.0);

        for max_iterations in [1, 2, 50, 150, 1000] {
            assert_eq!(escape_time(c, max_iterations), f64::from(max_iterations));
        }
    }

    #[test]
    fn test_origin_is_interior() {
        assert!(is_interior(escape_time(Complex::ZERO, 150), 150));
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        let points = [
            Complex::new(2.5, 0.0),
            Complex::new(0.0, -2.01),
            Complex::new(-1.5, 1.5),
            Complex::new(1e6, 1e6),
        ];

        for c in points {
            for max_iterations in [1, 2, 150] {
                let value = escape_time(c, max_iterations);
                assert!(
                    value < f64::from(max_iterations),
                    "{:?} with budget {} gave {}",
                    c,
                    max_iterations,
                    value
                );
                assert!(value >= 0.0);
            }
        }
    }

    #[test]
    fn test_smoothed_value_for_real_one() {
        // Orbit 0 -> 1 -> 2 -> 5 leaves the radius on the third step.
        let value = escape_time(Complex::new(1.0, 0.0), 150);
        let expected = 3.0 - 5.0_f64.log2().log2();

        assert!((value - expected).abs() < 1e-12);
        assert!((value - 1.784677).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_between_escaped_and_interior_at_small_budgets() {
        let real_one_escaped = 3.0 - 5.0_f64.log2().log2();
        let beyond_radius = 1.0 - 2.5_f64.log2().log2();

        // (c, budget, expected): c = 1 stays bounded for two steps and leaves
        // on the third; c = 2.5 leaves on the first.
        let cases = [
            (Complex::new(1.0, 0.0), 1, 1.0),
            (Complex::new(1.0, 0.0), 2, 2.0),
            (Complex::new(1.0, 0.0), 3, real_one_escaped),
            (Complex::new(1.0, 0.0), 4, real_one_escaped),
            (Complex::new(2.5, 0.0), 1, beyond_radius),
            (Complex::new(2.5, 0.0), 2, beyond_radius),
            (Complex::new(2.5, 0.0), 3, beyond_radius),
            (Complex::new(2.5, 0.0), 4, beyond_radius),
        ];

        for (c, max_iterations, expected) in cases {
            let value = escape_time(c, max_iterations);

            assert!(
                (value - expected).abs() < 1e-12,
                "{:?} with budget {} gave {}, expected {}",
                c,
                max_iterations,
                value,
                expected
            );
            assert_eq!(
                is_interior(value, max_iterations),
                expected == f64::from(max_iterations)
            );
        }
    }

    #[test]
    fn test_escape_on_last_allowed_step_is_not_interior() {
        let value = escape_time(Complex::new(1.0, 0.0), 3);

        assert!(value < 3.0);
        assert!(!is_interior(value, 3));
    }

    #[test]
    fn test_escape_time_is_deterministic() {
        let c = Complex::new(-0.7436447860, 0.1318252536);

        assert_eq!(escape_time(c, 500).to_bits(), escape_time(c, 500).to_bits());
    }

    #[test]
    fn test_algorithm_maps_center_pixel_to_viewport_center() {
        let size = FrameSize::new(10, 10).unwrap();
        let algorithm = MandelbrotAlgorithm::new(size, ViewportState::default());

        assert_eq!(algorithm.compute(Point { x: 5, y: 5 }), 150.0);
        assert!(algorithm.compute(Point { x: 0, y: 0 }) < 150.0);
    }
}
