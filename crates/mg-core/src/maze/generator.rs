//! Maze generation (rooms, corridors, pruning)
//!
//! [`RoomsAndCorridors`] runs the three stages in order on a fresh grid and
//! hands back the grid, the rooms and the spanning edges.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::MazeConfig;
use crate::rng::MazeRng;

use super::corridor::connect_rooms;
use super::grid::Grid;
use super::placement::place_rooms;
use super::prune::prune_dead_ends;
use super::room::{Edge, Room};

/// Counters collected while generating one maze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Room candidates drawn
    pub attempts: usize,
    /// Rooms placed
    pub rooms: usize,
    /// Cells covered by rooms
    pub room_cells: usize,
    /// Hallway cells carved before pruning
    pub carved_cells: usize,
    /// Hallway cells removed as dead ends
    pub pruned_cells: usize,
    /// Room and hallway cells in the final grid
    pub filled: usize,
}

/// A generated maze
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    pub grid: Grid,
    /// Rooms in placement order; indices are stable
    pub rooms: Vec<Room>,
    /// Connections in the order they were carved
    pub edges: Vec<Edge>,
    pub stats: GenerationStats,
}

/// A maze generation algorithm
pub trait MazeGenerator {
    /// Registry name of the algorithm
    fn name(&self) -> &'static str;

    /// Build a maze for `config`.
    ///
    /// Never fails: parameters that leave no room for rooms yield an empty grid.
    fn generate(&mut self, config: &MazeConfig) -> Maze;
}

/// Rejection-sampled rooms joined by L-shaped corridors
#[derive(Debug, Clone, Default)]
pub struct RoomsAndCorridors {
    rng: MazeRng,
}

impl RoomsAndCorridors {
    /// Generator drawing from a random seed until a config supplies one
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator drawing from an explicit stream
    pub fn with_rng(rng: MazeRng) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &MazeRng {
        &self.rng
    }
}

impl MazeGenerator for RoomsAndCorridors {
    fn name(&self) -> &'static str {
        GeneratorKind::RoomsAndCorridors.into()
    }

    fn generate(&mut self, config: &MazeConfig) -> Maze {
        if let Some(seed) = config.seed {
            self.rng = MazeRng::new(seed);
        }

        let mut grid = Grid::new(config.width, config.height);

        let placement = place_rooms(config, &mut grid, &mut self.rng);
        let corridors = connect_rooms(config, &mut grid, &placement.rooms, &mut self.rng);
        let pruning = prune_dead_ends(&mut grid, &placement.rooms);

        let stats = GenerationStats {
            attempts: placement.attempts,
            rooms: placement.rooms.len(),
            room_cells: placement.filled,
            carved_cells: corridors.carved,
            pruned_cells: pruning.removed,
            filled: pruning.filled,
        };

        log::info!(
            "generated {}x{} maze: {} rooms, {} edges, {} filled cells (seed {})",
            config.width,
            config.height,
            stats.rooms,
            corridors.edges.len(),
            stats.filled,
            self.rng.seed()
        );

        Maze {
            grid,
            rooms: placement.rooms,
            edges: corridors.edges,
            stats,
        }
    }
}

/// Registered generation algorithms
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GeneratorKind {
    #[default]
    RoomsAndCorridors,
}

impl GeneratorKind {
    /// Instantiate the generator behind this name
    pub fn create(self) -> Box<dyn MazeGenerator> {
        match self {
            GeneratorKind::RoomsAndCorridors => Box::new(RoomsAndCorridors::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Tile;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn small_config(seed: u64) -> MazeConfig {
        MazeConfig {
            min_room_width: 3,
            min_room_height: 3,
            max_room_width: 8,
            max_room_height: 8,
            coverage: 0.4,
            hallway_width: 1,
            seed: Some(seed),
            ..MazeConfig::with_size(60, 40)
        }
    }

    #[test]
    fn test_registry_names() {
        assert_eq!(GeneratorKind::RoomsAndCorridors.to_string(), "rooms_and_corridors");
        assert_eq!(
            GeneratorKind::from_str("rooms_and_corridors").unwrap(),
            GeneratorKind::RoomsAndCorridors
        );
        assert!(GeneratorKind::from_str("drunkard_walk").is_err());
        assert_eq!(GeneratorKind::iter().count(), 1);
    }

    #[test]
    fn test_create_from_registry() {
        let mut generator = GeneratorKind::RoomsAndCorridors.create();
        assert_eq!(generator.name(), "rooms_and_corridors");
        let maze = generator.generate(&small_config(5));
        assert_eq!(maze.grid.width(), 60);
        assert_eq!(maze.grid.height(), 40);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = RoomsAndCorridors::new().generate(&small_config(42));
        let b = RoomsAndCorridors::new().generate(&small_config(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_resets_stream_between_calls() {
        let mut generator = RoomsAndCorridors::new();
        let first = generator.generate(&small_config(7));
        let second = generator.generate(&small_config(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_calls_continue_stream() {
        let mut seeded = RoomsAndCorridors::with_rng(MazeRng::new(3));
        let mut config = small_config(0);
        config.seed = None;

        let first = seeded.generate(&config);
        let second = seeded.generate(&config);
        // same stream, different position
        assert_ne!(first.grid, second.grid);
        assert_eq!(seeded.rng().seed(), 3);
    }

    #[test]
    fn test_stats_match_grid() {
        let maze = RoomsAndCorridors::new().generate(&small_config(11));
        let stats = maze.stats;

        assert_eq!(stats.rooms, maze.rooms.len());
        assert_eq!(stats.filled, maze.grid.filled_count());
        assert_eq!(stats.room_cells, maze.grid.count(Tile::Room));
        assert_eq!(
            stats.carved_cells - stats.pruned_cells,
            maze.grid.count(Tile::Hallway)
        );
        assert_eq!(maze.edges.len(), maze.rooms.len().saturating_sub(1));
    }

    #[test]
    fn test_zero_coverage_boundary() {
        let config = MazeConfig {
            min_room_width: 2,
            min_room_height: 2,
            max_room_width: 2,
            max_room_height: 2,
            coverage: 0.0,
            hallway_width: 1,
            seed: Some(42),
            ..MazeConfig::with_size(10, 10)
        };
        let maze = RoomsAndCorridors::new().generate(&config);
        assert!(maze.rooms.is_empty());
        assert!(maze.edges.is_empty());
        assert_eq!(maze.stats.attempts, 0);
        assert_eq!(maze.grid.filled_count(), 0);
    }

    #[test]
    fn test_unplaceable_rooms_yield_empty_maze() {
        let config = MazeConfig {
            min_room_width: 70,
            max_room_width: 80,
            ..small_config(1)
        };
        let maze = RoomsAndCorridors::new().generate(&config);
        assert!(maze.rooms.is_empty());
        assert_eq!(maze.stats.filled, 0);
    }

    #[test]
    fn test_zero_sized_grid() {
        let config = MazeConfig {
            seed: Some(1),
            ..MazeConfig::with_size(0, 0)
        };
        let maze = RoomsAndCorridors::new().generate(&config);
        assert_eq!(maze.grid.area(), 0);
        assert!(maze.rooms.is_empty());
    }
}
