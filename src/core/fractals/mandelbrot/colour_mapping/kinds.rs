use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    amethyst, azure, classical, ember, monochrome, sage,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour scheme '{0}'")]
pub struct ParseSchemeError(pub String);

/// The closed set of colour schemes a frame can be rendered with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourSchemeKind {
    #[default]
    Classical,
    Monochrome,
    Ember,
    Azure,
    Amethyst,
    Sage,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Classical,
        Self::Monochrome,
        Self::Ember,
        Self::Azure,
        Self::Amethyst,
        Self::Sage,
    ];

    /// Lower-case identifier used in config files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::Monochrome => "monochrome",
            Self::Ember => "ember",
            Self::Azure => "azure",
            Self::Amethyst => "amethyst",
            Self::Sage => "sage",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classical => "Classical",
            Self::Monochrome => "Monochrome",
            Self::Ember => "Ember",
            Self::Azure => "Azure",
            Self::Amethyst => "Amethyst",
            Self::Sage => "Sage",
        }
    }

    /// Colour for an escape value produced with the given iteration budget.
    #[must_use]
    pub fn map(self, escape_value: f64, max_iterations: u32) -> Colour {
        match self {
            Self::Classical => classical::map(escape_value, max_iterations),
            Self::Monochrome => monochrome::map(escape_value, max_iterations),
            Self::Ember => ember::map(escape_value, max_iterations),
            Self::Azure => azure::map(escape_value, max_iterations),
            Self::Amethyst => amethyst::map(escape_value, max_iterations),
            Self::Sage => sage::map(escape_value, max_iterations),
        }
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourSchemeKind {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}
