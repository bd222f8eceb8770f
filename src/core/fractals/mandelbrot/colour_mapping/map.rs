use crate::core::actions::generate_frame_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

/// A colour scheme bound to the iteration budget its escape values were
/// computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeColourMap {
    kind: ColourSchemeKind,
    max_iterations: u32,
}

impl ColourMap<f64> for SchemeColourMap {
    fn map(&self, escape_value: f64) -> Colour {
        self.kind.map(escape_value, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

impl SchemeColourMap {
    #[must_use]
    pub fn new(kind: ColourSchemeKind, max_iterations: u32) -> Self {
        Self {
            kind,
            max_iterations,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ColourSchemeKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_kind() {
        for &kind in ColourSchemeKind::ALL {
            let map = SchemeColourMap::new(kind, 150);

            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
            assert_eq!(map.map(42.5), kind.map(42.5, 150));
            assert_eq!(map.map(150.0), kind.map(150.0, 150));
        }
    }
}
