use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::EngineError;
use crate::types::ColorPair;

pub mod contrast;
pub mod dark;
pub mod lab;
pub mod standard;

/// The interchangeable algorithms for deriving a fill/stroke pair from two
/// base colors. Stateless: every operation is a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Standard,
    Dark,
    Contrast,
    Lab,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Standard,
        Strategy::Dark,
        Strategy::Contrast,
        Strategy::Lab,
    ];

    /// Derive the (fill, stroke) pair. Standard, Dark and Contrast are
    /// total; Lab can fail with `NonConvergence`.
    pub fn build_colors(&self, light: &Color, dark: &Color) -> Result<ColorPair, EngineError> {
        match self {
            Strategy::Standard => Ok(standard::build_colors(light, dark)),
            Strategy::Dark => Ok(dark::build_colors(light, dark)),
            Strategy::Contrast => Ok(contrast::build_colors(light, dark)),
            Strategy::Lab => lab::build_colors(light, dark),
        }
    }

    pub fn fill_style(&self, light: &Color, dark: &Color) -> Result<String, EngineError> {
        match self {
            Strategy::Standard => Ok(standard::fill_style(light, dark)),
            Strategy::Dark => Ok(dark::fill_style(light, dark)),
            Strategy::Contrast => Ok(contrast::fill_style(light, dark)),
            Strategy::Lab => lab::fill_style(light, dark),
        }
    }

    pub fn stroke_style(&self, light: &Color, dark: &Color) -> Result<String, EngineError> {
        match self {
            Strategy::Standard => Ok(standard::stroke_style(light, dark)),
            Strategy::Dark => Ok(dark::stroke_style(light, dark)),
            Strategy::Contrast => Ok(contrast::stroke_style(light, dark)),
            Strategy::Lab => lab::stroke_style(light, dark),
        }
    }

    /// Border equals stroke under every current strategy.
    pub fn border(&self, light: &Color, dark: &Color) -> Result<String, EngineError> {
        self.stroke_style(light, dark)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Standard => "standard",
            Strategy::Dark => "dark",
            Strategy::Contrast => "contrast",
            Strategy::Lab => "lab",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Strategy::Standard),
            "dark" => Ok(Strategy::Dark),
            "contrast" => Ok(Strategy::Contrast),
            "lab" => Ok(Strategy::Lab),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}
