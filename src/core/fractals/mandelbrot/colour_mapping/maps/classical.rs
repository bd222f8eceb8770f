use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(0, 3, 10);

/// Balanced blue, green and gold bands built from Bernstein-style
/// polynomials of `√t`.
#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let s = normalised(escape_value, max_iterations).sqrt();
    let inv = 1.0 - s;

    Colour::new(
        channel(8.0 * inv * s * s * s * 255.0),
        channel(12.0 * inv * inv * s * s * 255.0),
        channel(6.5 * inv * inv * inv * s * 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_deep_navy() {
        assert_eq!(map(150.0, 150), Colour::new(0, 3, 10));
    }

    #[test]
    fn test_zero_escape_is_black() {
        assert_eq!(map(0.0, 150), Colour::new(0, 0, 0));
    }

    #[test]
    fn test_quarter_gradient() {
        // √0.25 = 0.5
        assert_eq!(map(25.0, 100), Colour::new(127, 191, 103));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(map(37.123, 150), map(37.123, 150));
    }
}
