//! Terrain defaults and runtime configuration constants

// Grid defaults
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 16;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 16;
/// Default world-space edge length of one cell
pub const DEFAULT_TILE_SIZE: f32 = 1.0;

// New cells pick a tile index uniformly from [0, DEFAULT_FILL_RANGE)
/// Number of tile indices the default random fill draws from
pub const DEFAULT_FILL_RANGE: usize = 4;

/// Fixed seed for reproducible fills
pub const DEFAULT_SEED: u64 = 42;

// Atlas defaults
/// Default number of region columns when splitting an atlas image
pub const DEFAULT_ATLAS_COLUMNS: u32 = 2;
/// Default number of region rows when splitting an atlas image
pub const DEFAULT_ATLAS_ROWS: u32 = 2;

/// Name prefix for regions created from the inspector
pub const NEW_REGION_PREFIX: &str = "New Tile";
/// Lower bound (inclusive) of the numeric suffix of new region names
pub const NEW_REGION_SUFFIX_MIN: u32 = 100;
/// Upper bound (exclusive) of the numeric suffix of new region names
pub const NEW_REGION_SUFFIX_MAX: u32 = 1000;

/// Name given to generated terrain meshes
pub const MESH_NAME: &str = "Strange Terrain";

// Output settings
/// Edge length in pixels of one cell in the preview render
pub const PREVIEW_CELL_PIXELS: u32 = 16;
/// File name of the preview render
pub const PREVIEW_FILE_NAME: &str = "preview.png";
/// File name prefix of exported palette tiles
pub const PALETTE_FILE_PREFIX: &str = "tile_";
