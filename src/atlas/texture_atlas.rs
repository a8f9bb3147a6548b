//! Ordered tile regions over a single source image
//!
//! Region order is significant: it is both the tile index stored in grid
//! cells and the order regions are offered for selection.

use glam::Vec2;
use image::RgbaImage;
use image::imageops;
use log::debug;

use crate::atlas::region::TileRegion;
use crate::io::error::{Result, TerrainError, index_out_of_range};

/// Named tile regions plus the image they refer to
#[derive(Debug, Clone, Default)]
pub struct TileAtlas {
    regions: Vec<TileRegion>,
    image: Option<RgbaImage>,
}

impl TileAtlas {
    /// Create an empty atlas without an image
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty atlas over `image`
    pub fn with_image(image: RgbaImage) -> Self {
        Self {
            regions: Vec::new(),
            image: Some(image),
        }
    }

    /// Split `image` into `columns x rows` equal regions
    ///
    /// Regions are named `Tile N` and ordered left to right, top row first.
    /// Zero columns or rows produce an atlas without regions.
    pub fn split_grid(image: RgbaImage, columns: u32, rows: u32) -> Self {
        let mut atlas = Self::with_image(image);
        if columns == 0 || rows == 0 {
            return atlas;
        }

        let tiling = Vec2::new(1.0 / columns as f32, 1.0 / rows as f32);
        for row in 0..rows {
            for column in 0..columns {
                // UV space starts at the bottom, image rows at the top
                let offset = Vec2::new(
                    column as f32 / columns as f32,
                    (rows - row - 1) as f32 / rows as f32,
                );
                let name = format!("Tile {}", atlas.regions.len());
                atlas.add_region(name, offset, tiling);
            }
        }
        atlas
    }

    /// Source image, if set
    pub const fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Replace or clear the source image
    pub fn set_image(&mut self, image: Option<RgbaImage>) {
        self.image = image;
    }

    /// Append a region built from offset and tiling, returning its index
    pub fn add_region(&mut self, name: impl Into<String>, offset: Vec2, tiling: Vec2) -> usize {
        self.push_region(TileRegion::from_offset_tiling(name, offset, tiling))
    }

    /// Append an existing region, returning its index
    pub fn push_region(&mut self, region: TileRegion) -> usize {
        debug!("adding atlas region '{}'", region.name);
        self.regions.push(region);
        self.regions.len() - 1
    }

    /// Remove the region at `index`, shifting later regions down
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` on an empty atlas, `IndexOutOfRange` otherwise
    /// when `index` is past the end
    pub fn remove_region(&mut self, index: usize) -> Result<TileRegion> {
        self.check_index(index, "remove region")?;
        let region = self.regions.remove(index);
        debug!("removed atlas region '{}' at {index}", region.name);
        Ok(region)
    }

    fn check_index(&self, index: usize, operation: &'static str) -> Result<()> {
        if self.regions.is_empty() {
            return Err(TerrainError::AtlasEmpty { operation });
        }
        if index >= self.regions.len() {
            return Err(index_out_of_range("atlas region", index, self.regions.len()));
        }
        Ok(())
    }

    /// Region at `index`
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` or `IndexOutOfRange` as for [`Self::remove_region`]
    pub fn region(&self, index: usize) -> Result<&TileRegion> {
        self.check_index(index, "region lookup")?;
        self.regions
            .get(index)
            .ok_or_else(|| index_out_of_range("atlas region", index, self.regions.len()))
    }

    /// Mutable region at `index`
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` or `IndexOutOfRange` as for [`Self::remove_region`]
    pub fn region_mut(&mut self, index: usize) -> Result<&mut TileRegion> {
        self.check_index(index, "region edit")?;
        let len = self.regions.len();
        self.regions
            .get_mut(index)
            .ok_or_else(|| index_out_of_range("atlas region", index, len))
    }

    /// All regions in order
    pub fn regions(&self) -> &[TileRegion] {
        &self.regions
    }

    /// Region names in order
    pub fn names(&self) -> Vec<&str> {
        self.regions.iter().map(|region| region.name.as_str()).collect()
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if the atlas has no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Copy the pixels under region `index` into a new image
    ///
    /// The region's offset and tiling are scaled by the image size and
    /// truncated to whole pixels. UV `y = 0` is the bottom image row.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AtlasEmpty` / `IndexOutOfRange` for a bad region index
    /// - `MissingImage` if no image is set
    /// - `OutOfBounds` if the pixel rectangle leaves the image
    pub fn sub_image(&self, index: usize) -> Result<RgbaImage> {
        let region = self.region(index)?;
        let image = self.image.as_ref().ok_or(TerrainError::MissingImage {
            operation: "sub-image extraction",
        })?;

        let rect = pixel_rect(region, image.dimensions());
        let [x, y, width, height] = rect;
        let (image_width, image_height) = image.dimensions();
        if x < 0
            || y < 0
            || width < 0
            || height < 0
            || x + width > i64::from(image_width)
            || y + height > i64::from(image_height)
        {
            return Err(TerrainError::OutOfBounds {
                rect,
                image: (image_width, image_height),
            });
        }

        let top = i64::from(image_height) - (y + height);
        Ok(imageops::crop_imm(image, x as u32, top as u32, width as u32, height as u32).to_image())
    }
}

// Truncating float-to-int conversion, bottom-left origin
fn pixel_rect(region: &TileRegion, (width, height): (u32, u32)) -> [i64; 4] {
    let offset = region.offset();
    let tiling = region.tiling();
    let width = width as f32;
    let height = height as f32;
    [
        (width * offset.x) as i64,
        (height * offset.y) as i64,
        (width * tiling.x) as i64,
        (height * tiling.y) as i64,
    ]
}
