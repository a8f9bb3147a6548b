//! Mesh generation and point picking over a tile grid

/// Grid to triangle mesh conversion
pub mod mesh;
/// World point to cell index mapping and back
pub mod picking;

pub use mesh::{Mesh, RegionLookup, build_mesh};
pub use picking::{CellPick, cell_center, cell_index_at, tile_center_at};
