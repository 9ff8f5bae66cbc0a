//! Corridor generation
//!
//! Rooms are joined along a greedy spanning structure over their centers:
//! 1. Grow a tree from room 0, always adding the closest (Manhattan) room
//! 2. For each tree edge, pick an exit cell just outside each room
//! 3. Carve an L-shaped corridor between the two exits, horizontal or
//!    vertical leg first on a coin flip
//!
//! Corridors never overwrite room cells and silently clip at the grid edge.

use crate::config::MazeConfig;
use crate::rng::MazeRng;

use super::grid::Grid;
use super::room::{Edge, Room};
use super::tile::Tile;

/// Result of the connection stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corridors {
    /// Spanning edges in connection order
    pub edges: Vec<Edge>,
    /// Empty cells turned into hallway
    pub carved: usize,
}

fn manhattan(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Greedy spanning structure over room centers.
///
/// Starting from room 0, repeatedly joins the unconnected room closest to any
/// connected room. Ties go to the lowest connected index, then the lowest
/// unconnected index, which is what an ascending scan over all
/// (connected, unconnected) pairs with a strict `<` would pick.
///
/// Returns `rooms.len() - 1` edges, or none for fewer than two rooms.
pub fn spanning_edges(rooms: &[Room]) -> Vec<Edge> {
    let n = rooms.len();
    if n < 2 {
        return Vec::new();
    }

    let centers: Vec<(usize, usize)> = rooms.iter().map(Room::center).collect();
    let mut connected = vec![false; n];
    connected[0] = true;

    // Closest connected room for every room still outside, as (distance, from)
    let mut best: Vec<(usize, usize)> = centers
        .iter()
        .map(|&c| (manhattan(centers[0], c), 0))
        .collect();

    let mut edges = Vec::with_capacity(n - 1);
    for _ in 1..n {
        let mut pick: Option<usize> = None;
        for j in 1..n {
            if connected[j] {
                continue;
            }
            match pick {
                Some(p) if best[p] <= best[j] => {}
                _ => pick = Some(j),
            }
        }
        let Some(j) = pick else { break };

        connected[j] = true;
        edges.push(Edge::new(best[j].1, j));

        for k in 1..n {
            if connected[k] {
                continue;
            }
            let candidate = (manhattan(centers[j], centers[k]), j);
            if candidate < best[k] {
                best[k] = candidate;
            }
        }
    }

    edges
}

/// Exit cell for a corridor leaving `room` toward `target`.
///
/// The target is clamped onto the room, then pushed one tile past the side
/// whose line is closest to the target (ties: left, right, top, bottom). The
/// result is clamped into the grid, so for a room on the border it may land
/// on the room itself.
pub fn connection_point(
    room: &Room,
    target: (usize, usize),
    grid_width: usize,
    grid_height: usize,
) -> (usize, usize) {
    let (tx, ty) = (target.0 as i64, target.1 as i64);
    let (x0, y0) = (room.left() as i64, room.top() as i64);
    let (x1, y1) = (room.right() as i64, room.bottom() as i64);

    let mut cx = tx.clamp(x0, x1);
    let mut cy = ty.clamp(y0, y1);

    let sides = [
        (tx - x0).abs(),
        (tx - x1).abs(),
        (ty - y0).abs(),
        (ty - y1).abs(),
    ];
    let mut side = 0;
    for (i, &dist) in sides.iter().enumerate().skip(1) {
        if dist < sides[side] {
            side = i;
        }
    }

    match side {
        0 => cx = x0 - 1,
        1 => cx = x1 + 1,
        2 => cy = y0 - 1,
        _ => cy = y1 + 1,
    }

    let max_x = grid_width.saturating_sub(1) as i64;
    let max_y = grid_height.saturating_sub(1) as i64;
    (cx.clamp(0, max_x) as usize, cy.clamp(0, max_y) as usize)
}

/// Inclusive walk from `a` to `b`, in either direction
fn walk(a: i64, b: i64) -> impl Iterator<Item = i64> {
    let step = if b >= a { 1 } else { -1 };
    (0..=(b - a).abs()).map(move |i| a + i * step)
}

/// Turn one cell into hallway. Returns true if it was empty.
fn carve_cell(grid: &mut Grid, x: i64, y: i64) -> bool {
    let Some(index) = grid.index_of(x, y) else {
        return false;
    };
    let cell = grid.tile_at_mut(index);
    match *cell {
        Tile::Room | Tile::Hallway => false,
        Tile::Empty => {
            *cell = Tile::Hallway;
            true
        }
    }
}

/// Carve a straight corridor `width` tiles wide from `from` to `to`.
///
/// The band across the corridor covers `[c - width/2, c - width/2 + width)`.
/// A diagonal request is carved as horizontal then vertical. Returns the
/// number of cells that were empty before.
pub fn carve_segment(grid: &mut Grid, from: (i64, i64), to: (i64, i64), width: usize) -> usize {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let width = width as i64;
    let mut carved = 0;

    if x0 == x1 {
        let band = x0 - width / 2;
        for y in walk(y0, y1) {
            for x in band..band + width {
                carved += usize::from(carve_cell(grid, x, y));
            }
        }
    } else if y0 == y1 {
        let band = y0 - width / 2;
        for y in band..band + width {
            for x in walk(x0, x1) {
                carved += usize::from(carve_cell(grid, x, y));
            }
        }
    } else {
        carved += carve_segment(grid, (x0, y0), (x1, y0), width as usize);
        carved += carve_segment(grid, (x1, y0), (x1, y1), width as usize);
    }

    carved
}

/// Carve an L-shaped corridor between two exit cells.
///
/// With `horizontal_first` the corner is at `(end.x, start.y)`, otherwise at
/// `(start.x, end.y)`.
pub fn carve_corridor(
    grid: &mut Grid,
    start: (usize, usize),
    end: (usize, usize),
    width: usize,
    horizontal_first: bool,
) -> usize {
    let (sx, sy) = (start.0 as i64, start.1 as i64);
    let (ex, ey) = (end.0 as i64, end.1 as i64);

    if horizontal_first {
        carve_segment(grid, (sx, sy), (ex, sy), width)
            + carve_segment(grid, (ex, sy), (ex, ey), width)
    } else {
        carve_segment(grid, (sx, sy), (sx, ey), width)
            + carve_segment(grid, (sx, ey), (ex, ey), width)
    }
}

/// Connect every room to room 0 with corridors.
///
/// Draws one coin flip per edge, in edge order. No-op below two rooms.
pub fn connect_rooms(
    config: &MazeConfig,
    grid: &mut Grid,
    rooms: &[Room],
    rng: &mut MazeRng,
) -> Corridors {
    if rooms.len() < 2 {
        return Corridors::default();
    }

    let edges = spanning_edges(rooms);
    let (grid_w, grid_h) = (grid.width(), grid.height());
    let mut carved = 0;

    for edge in &edges {
        let a = &rooms[edge.from];
        let b = &rooms[edge.to];
        let start = connection_point(a, b.center(), grid_w, grid_h);
        let end = connection_point(b, a.center(), grid_w, grid_h);
        let horizontal_first = rng.coin_flip();
        carved += carve_corridor(grid, start, end, config.hallway_width, horizontal_first);
    }

    log::debug!(
        "connected {} rooms with {} edges, carved {} hallway cells",
        rooms.len(),
        edges.len(),
        carved
    );

    Corridors { edges, carved }
}
