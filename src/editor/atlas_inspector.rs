//! Editing session over a tile atlas with a tracked selection

use glam::Vec2;
use image::RgbaImage;
use log::info;
use rand::Rng;

use crate::atlas::{RegionSelection, TileAtlas, TileRegion};
use crate::io::configuration::{NEW_REGION_PREFIX, NEW_REGION_SUFFIX_MAX, NEW_REGION_SUFFIX_MIN};
use crate::io::error::{Result, TerrainError};

/// Owns an atlas while it is being edited
///
/// Every edit targets the selected region. The selection is kept valid
/// across removals, so it is `None` exactly when the atlas is empty or
/// nothing has been chosen yet.
#[derive(Debug, Clone)]
pub struct AtlasInspector {
    atlas: TileAtlas,
    selection: RegionSelection,
}

impl AtlasInspector {
    /// Start editing `atlas`, selecting its first region if it has one
    pub fn new(atlas: TileAtlas) -> Self {
        let mut selection = RegionSelection::none();
        if !atlas.is_empty() {
            selection.select(0, atlas.len());
        }
        Self { atlas, selection }
    }

    /// Atlas being edited
    pub const fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    /// Finish editing and hand the atlas back
    pub fn into_atlas(self) -> TileAtlas {
        self.atlas
    }

    /// Selected region index
    pub const fn selected(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Select region `index`, clamped to the last region
    pub fn select(&mut self, index: usize) {
        self.selection.select(index, self.atlas.len());
    }

    /// Replace the atlas image
    pub fn set_image(&mut self, image: Option<RgbaImage>) {
        self.atlas.set_image(image);
    }

    /// Append a full-texture region with a generated name and select it
    pub fn create_region<R: Rng>(&mut self, rng: &mut R) -> usize {
        let suffix = rng.random_range(NEW_REGION_SUFFIX_MIN..NEW_REGION_SUFFIX_MAX);
        let index = self
            .atlas
            .push_region(TileRegion::full(format!("{NEW_REGION_PREFIX} {suffix}")));
        self.selection.select_last(self.atlas.len());
        index
    }

    /// Remove the selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` if there is nothing to remove
    pub fn remove_selected(&mut self) -> Result<TileRegion> {
        let index = self.require_selection("remove region")?;
        let region = self.atlas.remove_region(index)?;
        self.selection.after_removal(index, self.atlas.len());
        info!("removed region '{}'", region.name);
        Ok(region)
    }

    fn require_selection(&self, operation: &'static str) -> Result<usize> {
        self.selection
            .index()
            .ok_or(TerrainError::AtlasEmpty { operation })
    }

    fn selected_mut(&mut self, operation: &'static str) -> Result<&mut TileRegion> {
        let index = self.require_selection(operation)?;
        self.atlas.region_mut(index)
    }

    /// Selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` when nothing is selected
    pub fn selected_region(&self) -> Result<&TileRegion> {
        let index = self.require_selection("region lookup")?;
        self.atlas.region(index)
    }

    /// Rename the selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` when nothing is selected
    pub fn rename_selected(&mut self, name: impl Into<String>) -> Result<()> {
        self.selected_mut("rename region")?.name = name.into();
        Ok(())
    }

    /// Move the selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` when nothing is selected
    pub fn set_selected_offset(&mut self, offset: Vec2) -> Result<()> {
        self.selected_mut("set region offset")?.set_offset(offset);
        Ok(())
    }

    /// Resize the selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` when nothing is selected
    pub fn set_selected_tiling(&mut self, tiling: Vec2) -> Result<()> {
        self.selected_mut("set region tiling")?.set_tiling(tiling);
        Ok(())
    }

    /// Pixels of the selected region
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` when nothing is selected, otherwise any error of
    /// [`TileAtlas::sub_image`]
    pub fn selected_preview(&self) -> Result<RgbaImage> {
        let index = self.require_selection("region preview")?;
        self.atlas.sub_image(index)
    }
}
