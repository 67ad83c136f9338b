//! Runtime settings for the windowed simulation.
//!
//! There are no configuration files; the binary fills these in from its
//! command line and validates them before creating the window.

use std::time::Duration;

use crate::domain::{DEFAULT_SEED_PROBABILITY, Grid, Pattern, presets};
use crate::error::{ConfigError, GridError};

pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_CELL_SIZE: f32 = 5.0;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    /// Side of one cell in pixels
    pub cell_size: f32,
    pub seed_probability: f64,
    /// Fixed RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
    pub tick_interval_ms: u64,
    /// Name of a preset to place instead of random seeding
    pub pattern: Option<String>,
    pub start_paused: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            seed_probability: DEFAULT_SEED_PROBABILITY,
            seed: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            pattern: None,
            start_paused: false,
        }
    }
}

impl Settings {
    /// Check every field, resolving the pattern name if one is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimension { width: self.width, height: self.height }.into());
        }
        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(GridError::InvalidProbability(self.seed_probability).into());
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        self.resolve_pattern()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Window size in pixels
    pub fn window_size(&self) -> (f32, f32) {
        (self.width as f32 * self.cell_size, self.height as f32 * self.cell_size)
    }

    fn resolve_pattern(&self) -> Result<Option<Pattern>, ConfigError> {
        let Some(name) = &self.pattern else {
            return Ok(None);
        };
        let pattern = presets::by_name(name).ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
        if pattern.width > self.width || pattern.height > self.height {
            return Err(ConfigError::PatternTooLarge {
                name: pattern.name.to_string(),
                pattern_width: pattern.width,
                pattern_height: pattern.height,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Some(pattern))
    }

    /// Build the initial grid: the named pattern centred on a dead grid,
    /// otherwise random seeding (reproducible when `seed` is set)
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        let grid = match self.resolve_pattern()? {
            Some(pattern) => {
                let origin = ((self.width - pattern.width) / 2, (self.height - pattern.height) / 2);
                Grid::from_pattern(self.width, self.height, &pattern, origin)?
            }
            None => match self.seed {
                Some(seed) => Grid::seeded(self.width, self.height, self.seed_probability, seed)?,
                None => Grid::with_probability(self.width, self.height, self.seed_probability)?,
            },
        };
        Ok(grid)
    }

    /// A freshly seeded grid with these dimensions, always drawing from
    /// entropy
    pub fn reseed_grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::with_probability(self.width, self.height, self.seed_probability)?)
    }
}
