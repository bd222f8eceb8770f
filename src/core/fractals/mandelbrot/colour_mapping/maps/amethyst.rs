use std::f64::consts::PI;

use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(10, 0, 15);

#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let s = normalised(escape_value, max_iterations).powf(0.75);

    Colour::new(
        channel(80.0 + s * 175.0),
        channel(20.0 + s * s * 150.0),
        channel(120.0 + (s * PI).sin() * 135.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_near_black_violet() {
        assert_eq!(map(200.0, 200), INTERIOR);
    }

    #[test]
    fn test_fast_escape_is_plum() {
        assert_eq!(map(0.0, 200), Colour::new(80, 20, 120));
    }

    #[test]
    fn test_blue_peaks_mid_ramp() {
        // s = 0.5 when t = 0.5^(4/3)
        let t = 0.5_f64.powf(4.0 / 3.0);
        let colour = map(t * 200.0, 200);

        assert_eq!(colour.b, 255);
    }
}
