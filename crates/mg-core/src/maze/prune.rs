//! Dead-end pruning
//!
//! A hallway cell with at most one hallway neighbour that does not touch a
//! room leads nowhere. Removing one can expose the next, so the pruner works
//! from a worklist until no such cell remains.

use super::grid::Grid;
use super::room::Room;
use super::tile::Tile;

/// Result of the pruning stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pruning {
    /// Hallway cells turned back into empty
    pub removed: usize,
    /// Room and hallway cells left in the grid
    pub filled: usize,
}

fn hallway_degree(grid: &Grid, x: usize, y: usize) -> usize {
    grid.neighbors4(x, y)
        .filter(|&(nx, ny)| grid.get(nx, ny) == Tile::Hallway)
        .count()
}

/// Cells orthogonally next to a room cell (room cells included)
fn room_adjacency(grid: &Grid, rooms: &[Room]) -> Vec<bool> {
    let width = grid.width();
    let mut mask = vec![false; grid.area()];
    for room in rooms {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                for (nx, ny) in grid.neighbors4(x, y) {
                    mask[ny * width + nx] = true;
                }
            }
        }
    }
    mask
}

/// Remove dead-end hallway cells until none are left.
///
/// Hallways touching a room are never removed, whatever their degree. The
/// fixed point does not depend on worklist order.
pub fn prune_dead_ends(grid: &mut Grid, rooms: &[Room]) -> Pruning {
    let width = grid.width();
    let room_adjacent = room_adjacency(grid, rooms);

    let is_dead_end = |grid: &Grid, x: usize, y: usize| {
        grid.get(x, y) == Tile::Hallway
            && !room_adjacent[y * width + x]
            && hallway_degree(grid, x, y) <= 1
    };

    let mut worklist: Vec<(usize, usize)> = Vec::new();
    for y in 0..grid.height() {
        for x in 0..width {
            if is_dead_end(grid, x, y) {
                worklist.push((x, y));
            }
        }
    }

    let mut removed = 0;
    while let Some((x, y)) = worklist.pop() {
        // state may have changed since the cell was queued
        if !is_dead_end(grid, x, y) {
            continue;
        }
        grid.set(x, y, Tile::Empty);
        removed += 1;

        let view: &Grid = grid;
        let newly_dead: Vec<(usize, usize)> = view
            .neighbors4(x, y)
            .filter(|&(nx, ny)| is_dead_end(view, nx, ny))
            .collect();
        worklist.extend(newly_dead);
    }

    let filled = grid.filled_count();
    log::debug!("pruned {removed} dead-end cells, {filled} cells remain filled");

    Pruning { removed, filled }
}
