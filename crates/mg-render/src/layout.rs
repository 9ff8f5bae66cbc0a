//! JSON layout export

use std::io::Write;

use mg_core::{CoverageStats, Edge, GenerationStats, Maze, Room};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Machine-readable description of a generated maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub rooms: Vec<Room>,
    pub edges: Vec<Edge>,
    pub coverage: CoverageStats,
    pub stats: GenerationStats,
}

impl Layout {
    pub fn of(maze: &Maze) -> Self {
        Self {
            width: maze.grid.width(),
            height: maze.grid.height(),
            rooms: maze.rooms.clone(),
            edges: maze.edges.clone(),
            coverage: CoverageStats::of(&maze.grid),
            stats: maze.stats,
        }
    }
}

/// Pretty-printed [`Layout`] of `maze`
pub fn write_layout_json<W: Write>(maze: &Maze, mut writer: W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut writer, &Layout::of(maze))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
