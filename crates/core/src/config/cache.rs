// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event cache configuration
//!
//! Controls how much backing storage a cache reserves up front and how much it
//! keeps between rounds. The defaults start empty and release storage once it
//! exceeds twice the size of the last round.

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a cache configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid cache config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("shrink_factor must be at least 1, got {0}")]
    InvalidShrinkFactor(usize),
}

/// Tunables for an event cache's storage retention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Records reserved when the cache is created
    pub initial_capacity: usize,
    /// Storage is released when capacity exceeds `shrink_factor` times the
    /// length of the round just finished
    pub shrink_factor: usize,
}

impl CacheConfig {
    pub const DEFAULT_SHRINK_FACTOR: usize = 2;

    pub fn new() -> Self {
        Self {
            initial_capacity: 0,
            shrink_factor: Self::DEFAULT_SHRINK_FACTOR,
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the shrink factor. 0 is rejected by [`CacheConfig::validate`] and
    /// raised to 1 when a cache is built from it.
    pub fn with_shrink_factor(mut self, shrink_factor: usize) -> Self {
        self.shrink_factor = shrink_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shrink_factor == 0 {
            return Err(ConfigError::InvalidShrinkFactor(self.shrink_factor));
        }
        Ok(())
    }

    /// Whether storage of `capacity` records should be released after a round
    /// of `round_len` records. Never shrinks below `initial_capacity`.
    pub fn should_shrink(&self, capacity: usize, round_len: usize) -> bool {
        capacity
            > round_len
                .saturating_mul(self.shrink_factor)
                .max(self.initial_capacity)
    }

    /// Capacity kept after a shrink following a round of `round_len` records
    pub fn retained_capacity(&self, round_len: usize) -> usize {
        round_len.max(self.initial_capacity)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
