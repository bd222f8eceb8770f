use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(0, 0, 0);

/// Square-root grey ramp from black to white.
#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let value = channel(normalised(escape_value, max_iterations).sqrt() * 255.0);

    Colour::new(value, value, value)
}
