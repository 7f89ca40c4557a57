//! The nine selectable pattern modes, addressed by menu letter `a` to `i`

use std::fmt;
use std::str::FromStr;

use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::pattern::motif::{Motif, MotifStrategy};

/// Pattern selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternMode {
    /// `a`: 2x2 Bayer-like mosaic
    Bayer,
    /// `b`: red, green, blue columns
    RgbRows,
    /// `c`: diagonal red, green, blue lines
    DiagonalRgb,
    /// `d`: 3x3 custom layout
    Custom3x3,
    /// `e`: uniform random colors
    UniformDistribution,
    /// `f`: labeled "gaussian", draws the same uniform colors as `e`
    GaussianDistribution,
    /// `g`: per-cell random colors
    RandomDistribution,
    /// `h`: balanced 2x6 grid
    Balanced6x6,
    /// `i`: equal color counts in shuffled positions
    StochasticDistribution,
}

impl PatternMode {
    /// All modes in menu order
    pub const ALL: [Self; 9] = [
        Self::Bayer,
        Self::RgbRows,
        Self::DiagonalRgb,
        Self::Custom3x3,
        Self::UniformDistribution,
        Self::GaussianDistribution,
        Self::RandomDistribution,
        Self::Balanced6x6,
        Self::StochasticDistribution,
    ];

    /// Menu letter of the mode
    pub const fn letter(self) -> char {
        match self {
            Self::Bayer => 'a',
            Self::RgbRows => 'b',
            Self::DiagonalRgb => 'c',
            Self::Custom3x3 => 'd',
            Self::UniformDistribution => 'e',
            Self::GaussianDistribution => 'f',
            Self::RandomDistribution => 'g',
            Self::Balanced6x6 => 'h',
            Self::StochasticDistribution => 'i',
        }
    }

    /// Look a mode up by menu letter (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if `letter` is not one of `a` to `i`
    pub fn from_letter(letter: char) -> Result<Self> {
        let lowered = letter.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.letter() == lowered)
            .ok_or_else(|| {
                invalid_parameter("pattern_mode", &letter, &"choose a letter from 'a' to 'i'")
            })
    }

    /// Stem used when naming output files
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bayer => "bayer",
            Self::RgbRows => "rgb",
            Self::DiagonalRgb => "diagonal_rgb",
            Self::Custom3x3 => "custom_3x3",
            Self::UniformDistribution => "uniform_distribution",
            Self::GaussianDistribution => "gaussian_distribution",
            Self::RandomDistribution => "random_distribution",
            Self::Balanced6x6 => "balanced_6x6",
            Self::StochasticDistribution => "stochastic_distribution",
        }
    }

    /// Menu label
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bayer => "Bayer pattern",
            Self::RgbRows => "RGBRGB pattern",
            Self::DiagonalRgb => "Diagonal Red-Green-Blue lines",
            Self::Custom3x3 => "3x3 custom pattern (Green, Blue, Red)",
            Self::UniformDistribution => "Uniform distribution of Red, Green, and Blue",
            Self::GaussianDistribution => "Gaussian distribution of Red, Green, and Blue",
            Self::RandomDistribution => "Random distribution of Red, Green, and Blue",
            Self::Balanced6x6 => "Balanced RGB 6x6 Grid",
            Self::StochasticDistribution => "Stochastic Equal Distribution",
        }
    }

    /// Motif construction strategy for this mode
    pub fn strategy(self) -> MotifStrategy {
        match self {
            Self::Bayer => MotifStrategy::Fixed(Motif::bayer()),
            Self::RgbRows => MotifStrategy::Fixed(Motif::rgb_rows()),
            Self::DiagonalRgb => MotifStrategy::Fixed(Motif::diagonal_rgb()),
            Self::Custom3x3 => MotifStrategy::Fixed(Motif::custom_3x3()),
            Self::Balanced6x6 => MotifStrategy::Fixed(Motif::balanced_6x6()),
            // "gaussian" has always drawn uniformly, same as `e`
            Self::UniformDistribution | Self::GaussianDistribution => MotifStrategy::RandomUniform,
            Self::RandomDistribution => MotifStrategy::RandomPerCell,
            Self::StochasticDistribution => MotifStrategy::RandomEqualShuffle,
        }
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.letter(), self.description())
    }
}

impl FromStr for PatternMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().to_ascii_lowercase();
        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::from_letter(letter);
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.slug() == trimmed)
            .ok_or_else(|| {
                invalid_parameter(
                    "pattern_mode",
                    &s,
                    &"expected a letter from 'a' to 'i' or a pattern name",
                )
            })
    }
}
