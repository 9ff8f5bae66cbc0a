//! mg-core: room-and-corridor maze generation
//!
//! This crate contains the generation pipeline with no I/O dependencies:
//! rejection-sampled room placement, greedy spanning connection with
//! L-shaped corridors, and iterative dead-end pruning.
//!
//! Given the same [`MazeConfig`] and seed, every stage draws from the
//! random stream in a fixed order, so layouts are bit-for-bit reproducible.

pub mod maze;

mod config;
mod consts;
mod error;
mod rng;

pub use config::MazeConfig;
pub use consts::*;
pub use error::ConfigError;
pub use maze::{
    CoverageStats, Edge, GenerationStats, GeneratorKind, Grid, Maze, MazeGenerator, Room,
    RoomsAndCorridors, Tile,
};
pub use rng::MazeRng;
