//! Named axis-aligned UV rectangles of an atlas texture

use glam::Vec2;

/// A named rectangle of atlas UV space
///
/// Corners are stored directly in normalized texture space with a
/// bottom-left origin, in the same winding as a cell quad:
/// `uv0` bottom-left, `uv1` top-left, `uv2` top-right, `uv3` bottom-right.
///
/// Offset and tiling are derived views over the corners. Their setters keep
/// the corners an axis-aligned rectangle but do not validate that the result
/// stays inside `[0, 1]` or has a non-negative extent; that is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRegion {
    /// Display name, not required to be unique
    pub name: String,
    /// Bottom-left corner
    pub uv0: Vec2,
    /// Top-left corner
    pub uv1: Vec2,
    /// Top-right corner
    pub uv2: Vec2,
    /// Bottom-right corner
    pub uv3: Vec2,
}

impl TileRegion {
    /// Create a region from its four corners
    pub fn new(name: impl Into<String>, uv0: Vec2, uv1: Vec2, uv2: Vec2, uv3: Vec2) -> Self {
        Self {
            name: name.into(),
            uv0,
            uv1,
            uv2,
            uv3,
        }
    }

    /// Create a region from its bottom-left corner and extent
    pub fn from_offset_tiling(name: impl Into<String>, offset: Vec2, tiling: Vec2) -> Self {
        Self::new(
            name,
            offset,
            Vec2::new(offset.x, offset.y + tiling.y),
            offset + tiling,
            Vec2::new(offset.x + tiling.x, offset.y),
        )
    }

    /// Region covering the whole texture
    pub fn full(name: impl Into<String>) -> Self {
        Self::from_offset_tiling(name, Vec2::ZERO, Vec2::ONE)
    }

    /// Bottom-left corner
    pub const fn offset(&self) -> Vec2 {
        self.uv0
    }

    /// Move the rectangle so its bottom-left corner sits at `offset`, keeping its extent
    pub fn set_offset(&mut self, offset: Vec2) {
        let tiling = self.tiling();
        self.uv0 = offset;
        self.uv1 = Vec2::new(offset.x, offset.y + tiling.y);
        self.uv2 = Vec2::new(offset.x + tiling.x, offset.y + tiling.y);
        self.uv3 = Vec2::new(offset.x + tiling.x, offset.y);
    }

    /// Extent of the rectangle in UV space
    pub fn tiling(&self) -> Vec2 {
        Vec2::new(self.uv3.x - self.uv0.x, self.uv1.y - self.uv0.y)
    }

    /// Resize the rectangle around its fixed bottom-left corner
    pub fn set_tiling(&mut self, tiling: Vec2) {
        self.uv1 = Vec2::new(self.uv0.x, self.uv0.y + tiling.y);
        self.uv2 = Vec2::new(self.uv0.x + tiling.x, self.uv0.y + tiling.y);
        self.uv3 = Vec2::new(self.uv0.x + tiling.x, self.uv0.y);
    }

    /// All four corners in winding order
    pub const fn corners(&self) -> [Vec2; 4] {
        [self.uv0, self.uv1, self.uv2, self.uv3]
    }
}
