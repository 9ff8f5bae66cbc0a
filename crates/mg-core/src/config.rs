//! Generation parameters
//!
//! `MazeConfig` is plain data. It deserializes from a partial document
//! (missing fields take their defaults) so front ends can layer a config
//! file under command-line flags.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COVERAGE, DEFAULT_HALLWAY_WIDTH, DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_SIZE,
    DEFAULT_MIN_ROOM_SIZE, DEFAULT_WIDTH,
};
use crate::error::ConfigError;

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    pub min_room_width: usize,
    pub min_room_height: usize,
    pub max_room_width: usize,
    pub max_room_height: usize,
    /// Target filled fraction of the grid, already normalized to [0, 1]
    pub coverage: f64,
    /// Corridor width in tiles
    pub hallway_width: usize,
    /// Reseeds the generator's stream when set
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_room_width: DEFAULT_MIN_ROOM_SIZE,
            min_room_height: DEFAULT_MIN_ROOM_SIZE,
            max_room_width: DEFAULT_MAX_ROOM_SIZE,
            max_room_height: DEFAULT_MAX_ROOM_SIZE,
            coverage: DEFAULT_COVERAGE,
            hallway_width: DEFAULT_HALLWAY_WIDTH,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Default parameters on a grid of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Total number of tiles
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Number of filled tiles room placement aims for: `floor(area * coverage)`
    pub fn target_cells(&self) -> usize {
        if !self.coverage.is_finite() || self.coverage <= 0.0 {
            return 0;
        }
        (self.area() as f64 * self.coverage).floor() as usize
    }

    /// Inclusive room width range, with the upper end clamped to the grid.
    ///
    /// The range may be empty (`min > max`); placement then finds nothing.
    pub fn room_width_bounds(&self) -> (usize, usize) {
        (self.min_room_width, self.max_room_width.min(self.width))
    }

    /// Inclusive room height range, with the upper end clamped to the grid.
    pub fn room_height_bounds(&self) -> (usize, usize) {
        (self.min_room_height, self.max_room_height.min(self.height))
    }

    /// Check that the parameters describe a usable grid.
    ///
    /// Room size ranges are deliberately not checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.hallway_width == 0 {
            return Err(ConfigError::ZeroHallwayWidth);
        }
        if !self.coverage.is_finite() || !(0.0..=1.0).contains(&self.coverage) {
            return Err(ConfigError::CoverageOutOfRange(self.coverage));
        }
        Ok(())
    }
}
