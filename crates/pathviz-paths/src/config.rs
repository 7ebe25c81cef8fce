//! Search and session configuration.

use std::fmt;
use std::time::Duration;

use pathviz_core::{Cell, Cost, GridConfig};

/// How moves are priced during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Whether weighted cells cost `weight_multiplier` to enter.
    pub weighting: bool,
    /// Cost of entering a weighted cell when weighting is on. Must be ≥ 1.
    pub weight_multiplier: Cost,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            weighting: false,
            weight_multiplier: 3,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weight_multiplier < 1 {
            return Err(ConfigError::InvalidWeightMultiplier(self.weight_multiplier));
        }
        Ok(())
    }

    /// Cost of moving onto `to`.
    #[inline]
    pub fn move_cost(&self, to: &Cell) -> Cost {
        if self.weighting && to.weighted() {
            self.weight_multiplier
        } else {
            1
        }
    }
}

/// Everything needed to set up a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub grid: GridConfig,
    pub search: SearchOptions,
    /// Delay a scheduler should leave between two steps, in milliseconds.
    pub step_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            search: SearchOptions::default(),
            step_interval_ms: 7,
        }
    }
}

impl SessionConfig {
    /// Check every field that can be checked without building the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cell_size <= 0 {
            return Err(ConfigError::InvalidCellSize(self.grid.cell_size));
        }
        self.search.validate()
    }

    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWeightMultiplier(Cost),
    InvalidCellSize(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeightMultiplier(m) => {
                write!(f, "config: weight multiplier must be at least 1, got {m}")
            }
            Self::InvalidCellSize(s) => write!(f, "config: cell size must be positive, got {s}"),
        }
    }
}

impl std::error::Error for ConfigError {}
