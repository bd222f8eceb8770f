use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::is_interior;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{channel, normalised};

pub const INTERIOR: Colour = Colour::new(0, 0, 0);

/// Red first, then orange, with a faint warm white at the far end.
#[must_use]
pub fn map(escape_value: f64, max_iterations: u32) -> Colour {
    if is_interior(escape_value, max_iterations) {
        return INTERIOR;
    }

    let s = normalised(escape_value, max_iterations).powf(0.7);

    Colour::new(
        channel(255.0 * (s * 1.5).min(1.0)),
        channel(180.0 * ((s - 0.3) * 2.0).clamp(0.0, 1.0)),
        channel(100.0 * ((s - 0.7) * 3.0).max(0.0)),
    )
}
