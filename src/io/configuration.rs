//! Grid constants for the default map layout

/// Width of a single map tile in pixels
pub const TILE_WIDTH: u32 = 512;
/// Height of a single map tile in pixels
pub const TILE_HEIGHT: u32 = 512;

/// Number of tile columns in the assembled map
pub const TILE_COLUMNS: u32 = 12;
/// Number of tile rows in the assembled map
pub const TILE_ROWS: u32 = 9;

/// Total number of tile files expected in the input directory
pub const EXPECTED_TILE_COUNT: usize = (TILE_COLUMNS * TILE_ROWS) as usize;
