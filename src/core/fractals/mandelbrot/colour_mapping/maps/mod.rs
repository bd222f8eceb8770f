//! One module per colour scheme. Every scheme has a fixed colour for
//! interior points and a gradient over `t = escape_value / max_iterations`
//! for everything else.

pub mod amethyst;
pub mod azure;
pub mod classical;
pub mod ember;
pub mod monochrome;
pub mod sage;

/// Floors then clamps to a channel value. NaN maps to 0.
pub(crate) fn channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

pub(crate) fn normalised(escape_value: f64, max_iterations: u32) -> f64 {
    escape_value / f64::from(max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_floors_and_clamps() {
        assert_eq!(channel(12.99), 12);
        assert_eq!(channel(-4.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(f64::NAN), 0);
    }
}
