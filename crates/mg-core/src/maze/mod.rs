//! Maze system
//!
//! Contains the tile grid, rooms, and the three generation stages.

mod corridor;
mod generator;
mod grid;
mod placement;
mod prune;
mod room;
mod stats;
mod tile;

pub use corridor::{
    Corridors, carve_corridor, carve_segment, connect_rooms, connection_point, spanning_edges,
};
pub use generator::{GenerationStats, GeneratorKind, Maze, MazeGenerator, RoomsAndCorridors};
pub use grid::Grid;
pub use placement::{Placement, place_rooms};
pub use prune::{Pruning, prune_dead_ends};
pub use room::{Edge, Room};
pub use stats::CoverageStats;
pub use tile::Tile;
