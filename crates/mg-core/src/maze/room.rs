//! Rooms and the connections between them

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangular room
///
/// Rooms are immutable once placed. Their index in the placement list is the
/// identity used by [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the room, rounded toward the top-left
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn left(&self) -> usize {
        self.x
    }

    /// Rightmost column inside the room
    pub fn right(&self) -> usize {
        self.x + self.width.saturating_sub(1)
    }

    pub fn top(&self) -> usize {
        self.y
    }

    /// Bottom row inside the room
    pub fn bottom(&self) -> usize {
        self.y + self.height.saturating_sub(1)
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if point is inside room
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check if the two rectangles share at least one cell
    pub fn intersects(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Connection between two rooms, by index into the room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Room already in the spanning structure
    pub from: usize,
    /// Room joined by this edge
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether this edge touches room `index`
    pub fn touches(&self, index: usize) -> bool {
        self.from == index || self.to == index
    }
}
