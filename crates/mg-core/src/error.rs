//! Configuration errors
//!
//! Generation itself never fails: an impossible room size range simply
//! yields no rooms. Only parameters that cannot describe a grid at all are
//! rejected, and only when the caller asks via [`MazeConfig::validate`].
//!
//! [`MazeConfig::validate`]: crate::MazeConfig::validate

use thiserror::Error;

/// Invalid generation parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("Hallway width must be at least 1")]
    ZeroHallwayWidth,

    #[error("Coverage must be a fraction in [0, 1], got {0}")]
    CoverageOutOfRange(f64),
}
