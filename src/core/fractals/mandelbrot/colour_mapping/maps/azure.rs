use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(0, 8, 15);

#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let s = normalised(escape_value, max_iterations).powf(0.8);

    Colour::new(
        channel(20.0 + s * s * 160.0),
        channel(80.0 + s * 120.0),
        channel(150.0 + s * 105.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_near_black_blue() {
        assert_eq!(map(50.0, 50), INTERIOR);
    }

    #[test]
    fn test_fast_escape_is_steel_blue() {
        assert_eq!(map(0.0, 50), Colour::new(20, 80, 150));
    }

    #[test]
    fn test_blue_dominates_everywhere() {
        for escape in 0..50 {
            let colour = map(f64::from(escape), 50);
            assert!(colour.b >= colour.g && colour.b >= colour.r);
        }
    }
}
