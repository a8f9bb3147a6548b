//! Texture atlas tiles
//!
//! A tile atlas is an ordered list of named UV rectangles over one source
//! image. Grid cells refer to regions by their position in that list.

/// Named UV rectangles with offset and tiling views
pub mod region;
/// Selected-region tracking across edits
pub mod selection;
/// Region list, source image and sub-image extraction
pub mod texture_atlas;

pub use region::TileRegion;
pub use selection::RegionSelection;
pub use texture_atlas::TileAtlas;
