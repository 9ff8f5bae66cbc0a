//! Coverage statistics

use core::fmt;

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// How much of a grid is room or hallway
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub filled: usize,
    pub total: usize,
    /// `filled / total`, 0.0 for an empty grid
    pub ratio: f64,
}

impl CoverageStats {
    pub fn of(grid: &Grid) -> Self {
        Self {
            filled: grid.filled_count(),
            total: grid.area(),
            ratio: grid.coverage(),
        }
    }
}

impl fmt::Display for CoverageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% ({}/{} tiles)",
            self.ratio * 100.0,
            self.filled,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Room, Tile};

    #[test]
    fn test_coverage_of_grid() {
        let mut grid = Grid::new(10, 10);
        grid.fill_rect(&Room::new(0, 0, 5, 5), Tile::Room);
        grid.set(7, 7, Tile::Hallway);

        let stats = CoverageStats::of(&grid);
        assert_eq!(stats.filled, 26);
        assert_eq!(stats.total, 100);
        assert!((stats.ratio - 0.26).abs() < f64::EPSILON);
        assert_eq!(stats.to_string(), "26.0% (26/100 tiles)");
    }

    #[test]
    fn test_empty_grid() {
        let stats = CoverageStats::of(&Grid::new(0, 0));
        assert_eq!(stats.filled, 0);
        assert_eq!(stats.ratio, 0.0);
        assert_eq!(stats.to_string(), "0.0% (0/0 tiles)");
    }
}
