//! Tile kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Room = 1,
    Hallway = 2,
}

impl Tile {
    /// Room or hallway
    pub const fn is_filled(&self) -> bool {
        !matches!(self, Tile::Empty)
    }
}
