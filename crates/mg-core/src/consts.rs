//! Generation constants and configuration defaults

/// Room placement gives up after this many candidate rectangles.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Default grid width in tiles
pub const DEFAULT_WIDTH: usize = 1000;

/// Default grid height in tiles
pub const DEFAULT_HEIGHT: usize = 1000;

/// Default smallest room side
pub const DEFAULT_MIN_ROOM_SIZE: usize = 2;

/// Default largest room side
pub const DEFAULT_MAX_ROOM_SIZE: usize = 200;

/// Default fraction of the grid to fill with rooms
pub const DEFAULT_COVERAGE: f64 = 0.5;

/// Default corridor width in tiles
pub const DEFAULT_HALLWAY_WIDTH: usize = 1;
