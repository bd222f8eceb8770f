use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(5, 10, 5);

#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let s = normalised(escape_value, max_iterations).powf(0.85);

    Colour::new(
        channel(20.0 + s * s * 100.0),
        channel(40.0 + s * 180.0),
        channel(30.0 + s * s * 120.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_near_black_green() {
        assert_eq!(map(150.0, 150), INTERIOR);
    }

    #[test]
    fn test_fast_escape_is_moss() {
        assert_eq!(map(0.0, 150), Colour::new(20, 40, 30));
    }

    #[test]
    fn test_green_dominates_everywhere() {
        for escape in 0..150 {
            let colour = map(f64::from(escape), 150);
            assert!(colour.g > colour.r && colour.g > colour.b);
        }
    }
}
