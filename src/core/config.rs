//! Cube configuration.
//!
//! Callers describe the cube they want once and build from it:
//! - `size`: side length N
//! - `scramble_length`: moves per scramble (defaults to `2·N² + 5`)
//! - `seed`: fixed seed for reproducible scrambles, or entropy when absent

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::rng::CubeRng;
use super::state::CubeState;
use crate::scramble;

/// Configuration for a cube and its scrambles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Side length N (at least 2).
    pub size: usize,

    /// Moves per scramble. `None` uses [`scramble::default_length`].
    pub scramble_length: Option<usize>,

    /// Seed for the scramble RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            scramble_length: None,
            seed: None,
        }
    }
}

impl CubeConfig {
    /// Create a config for a cube of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the cube size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set an explicit scramble length.
    #[must_use]
    pub fn with_scramble_length(mut self, length: usize) -> Self {
        self.scramble_length = Some(length);
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Scramble length after applying the size-based default.
    #[must_use]
    pub fn scramble_length(&self) -> usize {
        self.scramble_length
            .unwrap_or_else(|| scramble::default_length(self.size))
    }

    /// A solved cube of the configured size.
    pub fn build(&self) -> Result<CubeState> {
        CubeState::new(self.size)
    }

    /// The configured RNG: seeded if a seed was given, otherwise from entropy.
    #[must_use]
    pub fn rng(&self) -> CubeRng {
        match self.seed {
            Some(seed) => CubeRng::new(seed),
            None => CubeRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CubeError;

    #[test]
    fn test_default_config() {
        let config = CubeConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.scramble_length, None);
        assert_eq!(config.scramble_length(), 23);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CubeConfig::new(4).with_scramble_length(40).with_seed(7);

        assert_eq!(config.size, 4);
        assert_eq!(config.scramble_length(), 40);
        assert_eq!(config.rng().seed(), 7);
        assert_eq!(config.build().unwrap().size(), 4);
    }

    #[test]
    fn test_default_length_scales_with_size() {
        assert_eq!(CubeConfig::new(2).scramble_length(), 13);
        assert_eq!(CubeConfig::new(5).scramble_length(), 55);
    }

    #[test]
    fn test_build_rejects_small_cubes() {
        let config = CubeConfig::default().with_size(1);
        assert_eq!(config.build(), Err(CubeError::InvalidSize(1)));
    }

    #[test]
    fn test_serialization() {
        let config = CubeConfig::new(5).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CubeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
