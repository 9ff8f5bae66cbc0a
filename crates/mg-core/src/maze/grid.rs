//! Tile grid
//!
//! A fixed-size, row-major buffer of tiles. Dimensions never change after
//! creation. Bulk operations take signed coordinates and drop anything that
//! falls outside the grid, so corridor bands hanging over an edge are clipped
//! instead of failing.

use super::room::Room;
use super::tile::Tile;

/// Offsets of the four orthogonal neighbours, in scan order
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid with every tile empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Tile at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinates are outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        self.tiles[y * self.width + x]
    }

    /// Store `tile` at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinates are outside the grid.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        self.tiles[y * self.width + x] = tile;
    }

    /// Buffer index for signed coordinates, `None` when out of range
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Tile at signed coordinates, `None` when out of range
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Tile> {
        self.index_of(x, y).map(|i| self.tiles[i])
    }

    pub(crate) fn tile_at_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// True if every cell of the rectangle is inside the grid and empty
    pub fn is_rect_empty(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        if x + width > self.width || y + height > self.height {
            return false;
        }
        (y..y + height).all(|yy| {
            let row = yy * self.width;
            self.tiles[row + x..row + x + width]
                .iter()
                .all(|t| *t == Tile::Empty)
        })
    }

    /// Paint the room's rectangle with `tile`.
    ///
    /// Returns how many of the painted cells were empty before.
    pub fn fill_rect(&mut self, room: &Room, tile: Tile) -> usize {
        let mut filled = 0;
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                let Some(index) = self.index_of(x as i64, y as i64) else {
                    continue;
                };
                let cell = &mut self.tiles[index];
                if *cell == Tile::Empty {
                    filled += 1;
                }
                *cell = tile;
            }
        }
        filled
    }

    /// In-bounds orthogonal neighbours of `(x, y)`, in the order +x, -x, +y, -y
    pub fn neighbors4(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            self.index_of(nx, ny).map(|_| (nx as usize, ny as usize))
        })
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Number of room and hallway cells
    pub fn filled_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_filled()).count()
    }

    /// Filled fraction of the grid; 0.0 for a zero-area grid
    pub fn coverage(&self) -> f64 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        self.filled_count() as f64 / self.tiles.len() as f64
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks() rejects a zero chunk size
        self.tiles.chunks(self.width.max(1))
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.area(), 21);
        assert_eq!(grid.count(Tile::Empty), 21);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.coverage(), 0.0);
    }

    #[test]
    fn test_get_set_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 1, Tile::Hallway);
        assert_eq!(grid.get(3, 1), Tile::Hallway);
        assert_eq!(grid.tiles()[7], Tile::Hallway);
        assert_eq!(grid.get(1, 1), Tile::Empty);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let grid = Grid::new(4, 3);
        grid.get(4, 0);
    }

    #[test]
    fn test_signed_access() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, -1), None);
        assert_eq!(grid.get_signed(4, 0), None);
        assert_eq!(grid.get_signed(0, 3), None);
        assert_eq!(grid.get_signed(3, 2), Some(Tile::Empty));
    }

    #[test]
    fn test_fill_rect_counts_previously_empty() {
        let mut grid = Grid::new(10, 10);
        grid.set(2, 2, Tile::Hallway);

        let filled = grid.fill_rect(&Room::new(1, 1, 3, 3), Tile::Room);
        assert_eq!(filled, 8);
        assert_eq!(grid.count(Tile::Room), 9);
        assert_eq!(grid.filled_count(), 9);
    }

    #[test]
    fn test_is_rect_empty() {
        let mut grid = Grid::new(10, 10);
        assert!(grid.is_rect_empty(0, 0, 10, 10));
        assert!(!grid.is_rect_empty(5, 5, 6, 1));

        grid.set(4, 4, Tile::Room);
        assert!(!grid.is_rect_empty(3, 3, 2, 2));
        assert!(grid.is_rect_empty(5, 5, 2, 2));
        // touching edges counts as overlap only when the cell itself is taken
        assert!(grid.is_rect_empty(5, 4, 2, 2));
    }

    #[test]
    fn test_neighbors4_order_and_clipping() {
        let grid = Grid::new(3, 3);
        let center: Vec<_> = grid.neighbors4(1, 1).collect();
        assert_eq!(center, vec![(2, 1), (0, 1), (1, 2), (1, 0)]);

        let corner: Vec<_> = grid.neighbors4(0, 0).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_rows() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, Tile::Room);
        let rows: Vec<&[Tile]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[Tile::Empty, Tile::Room]);
    }

    #[test]
    fn test_zero_area_grid() {
        let grid = Grid::new(0, 5);
        assert_eq!(grid.area(), 0);
        assert_eq!(grid.coverage(), 0.0);
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.get_signed(0, 0), None);
    }
}
