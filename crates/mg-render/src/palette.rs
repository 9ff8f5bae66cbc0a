//! Tile colours

use mg_core::Tile;
use serde::{Deserialize, Serialize};

/// RGB colour per tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub empty: [u8; 3],
    pub room: [u8; 3],
    pub hallway: [u8; 3],
}

impl Default for Palette {
    /// Light gray floor, blue rooms, dark hallways
    fn default() -> Self {
        Self {
            empty: [245, 245, 245],
            room: [50, 130, 255],
            hallway: [30, 30, 30],
        }
    }
}

impl Palette {
    pub const fn color(&self, tile: Tile) -> [u8; 3] {
        match tile {
            Tile::Empty => self.empty,
            Tile::Room => self.room,
            Tile::Hallway => self.hallway,
        }
    }
}
