use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use crate::hash::HASH_MODULUS;
use crate::palette::Palette;
use crate::search::{DEFAULT_FLIP_PROBABILITY, DEFAULT_MAX_ATTEMPTS};

const DEFAULT_MODULUS: NonZeroU64 = NonZeroU64::new(HASH_MODULUS).unwrap();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid palette color {0:?}, expected #rrggbb")]
    InvalidColor(SmolStr),
    #[error("flip probability {0} is outside [0, 1]")]
    FlipProbability(f64),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the hasher and the variation search read. Immutable once
/// built; every search borrows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueConfig {
    pub palette: Palette,
    /// Attempt ceiling for the variation search.
    pub max_attempts: u32,
    /// Independent per-character chance of flipping case on each attempt.
    pub flip_probability: f64,
    /// Changing this changes every username's color.
    pub modulus: NonZeroU64,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            palette: Palette::reference(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            flip_probability: DEFAULT_FLIP_PROBABILITY,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl HueConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(ConfigError::FlipProbability(self.flip_probability));
        }
        Ok(())
    }

    /// N, the number of distinct color indices.
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::NAME_COLOR_COUNT;

    #[test]
    fn defaults_match_reference_constants() {
        let config = HueConfig::default();
        assert_eq!(config.color_count(), NAME_COLOR_COUNT);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.flip_probability, 0.5);
        assert_eq!(config.modulus.get(), 9_007_199_254_740_991);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = HueConfig::from_toml("").expect("parse");
        assert_eq!(config, HueConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let raw = r##"
            palette = ["#111111", "#222222", "#333333"]
            max_attempts = 50
            flip_probability = 0.25
        "##;
        let config = HueConfig::from_toml(raw).expect("parse");
        assert_eq!(config.color_count(), 3);
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.flip_probability, 0.25);
        assert_eq!(config.modulus.get(), HASH_MODULUS);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            HueConfig::from_toml("flip_probability = 1.5"),
            Err(ConfigError::FlipProbability(_))
        ));
        assert!(matches!(
            HueConfig::from_toml("modulus = 0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HueConfig::from_toml("palette = []"),
            Err(ConfigError::Parse(_))
        ));
    }
}
