//! Room placement by rejection sampling
//!
//! Candidate rectangles are drawn at random and kept when every cell they
//! cover is still empty. Placement stops once the filled cell count reaches
//! the configured coverage target, or after [`MAX_PLACEMENT_ATTEMPTS`]
//! candidates. Running out of attempts is not an error.

use crate::config::MazeConfig;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::rng::MazeRng;

use super::grid::Grid;
use super::room::Room;
use super::tile::Tile;

/// Result of the placement stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Rooms in placement order
    pub rooms: Vec<Room>,
    /// Cells newly marked as room
    pub filled: usize,
    /// Candidates drawn, accepted or not
    pub attempts: usize,
}

/// Fill `grid` with non-overlapping rooms.
///
/// Draws width, height, x and y (in that order) for each attempt. An empty
/// size range rejects the attempt before any further draws.
pub fn place_rooms(config: &MazeConfig, grid: &mut Grid, rng: &mut MazeRng) -> Placement {
    let target = config.target_cells();
    let (min_w, max_w) = config.room_width_bounds();
    let (min_h, max_h) = config.room_height_bounds();
    let (grid_w, grid_h) = (grid.width(), grid.height());

    if target > 0 && (min_w > max_w || min_h > max_h) {
        log::warn!(
            "room size range {min_w}..={max_w} x {min_h}..={max_h} is empty on a {grid_w}x{grid_h} grid; no rooms can be placed"
        );
    }

    let mut placement = Placement::default();

    while placement.filled < target && placement.attempts < MAX_PLACEMENT_ATTEMPTS {
        placement.attempts += 1;

        let Some(w) = rng.range_inclusive(min_w, max_w) else {
            continue;
        };
        let Some(h) = rng.range_inclusive(min_h, max_h) else {
            continue;
        };
        if w == 0 || h == 0 || w > grid_w || h > grid_h {
            continue;
        }

        let (Some(x), Some(y)) = (
            rng.range_inclusive(0, grid_w - w),
            rng.range_inclusive(0, grid_h - h),
        ) else {
            continue;
        };

        if !grid.is_rect_empty(x, y, w, h) {
            continue;
        }

        let room = Room::new(x, y, w, h);
        placement.filled += grid.fill_rect(&room, Tile::Room);
        placement.rooms.push(room);
    }

    log::debug!(
        "placed {} rooms ({} cells of target {}) in {} attempts",
        placement.rooms.len(),
        placement.filled,
        target,
        placement.attempts
    );

    placement
}
