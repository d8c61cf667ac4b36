// THEORY:
// Startup configuration. It is read once before the first round and never
// reloaded. Every field has a default, so an empty file (or no file at all)
// gives a playable game.

use crate::core_modules::color::color::NamedColorRange;
use crate::core_modules::frame::PixelFormat;
use crate::core_modules::palette::Palette;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_GOAL_PERCENTAGE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Percent of the frame that must match the target to win a round (0-100).
    pub goal_percentage: f64,
    /// "grayscale" or "rgb". Anything else is read as grayscale.
    pub pixel_format: String,
    /// Fixed seed for the color picker. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Replaces the standard palette when present.
    pub palette: Option<Vec<NamedColorRange>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal_percentage: DEFAULT_GOAL_PERCENTAGE,
            pixel_format: PixelFormat::Grayscale.tag().to_string(),
            rng_seed: None,
            palette: None,
        }
    }
}

impl GameConfig {
    // Load config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.goal_percentage) {
            return Err(GameError::InvalidGoalPercentage(self.goal_percentage));
        }
        Ok(())
    }

    /// The configured pixel format, unknown tags resolved to grayscale.
    pub fn format(&self) -> PixelFormat {
        PixelFormat::from_tag(&self.pixel_format)
    }

    pub fn build_palette(&self) -> Result<Palette> {
        match &self.palette {
            Some(ranges) => Palette::new(ranges.clone()),
            None => Ok(Palette::standard()),
        }
    }
}
