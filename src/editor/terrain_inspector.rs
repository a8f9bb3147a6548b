//! Scene editing session for a terrain: tool mode, brush and palette

use glam::Vec3;
use image::RgbaImage;

use crate::atlas::TileAtlas;
use crate::editor::brush::{BrushOutline, TilePainter};
use crate::editor::tool::{HostCommand, ToolEvent, ToolMode, ToolState};
use crate::io::error::{Result, index_out_of_range};
use crate::runtime::Terrain;

/// What the scene view should show after a pointer update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneFeedback {
    /// Brush outlines, present while painting
    pub outline: Option<BrushOutline>,
    /// Cell painted by this update
    pub painted: Option<(usize, usize)>,
}

/// Editor state for painting one terrain
///
/// Palette images are built explicitly with [`Self::refresh_palette`] and
/// stay as they are until the next refresh.
#[derive(Debug, Clone, Default)]
pub struct TerrainInspector {
    tool: ToolState,
    painter: TilePainter,
    palette: Vec<RgbaImage>,
}

impl TerrainInspector {
    /// Inspector in `Move` mode with an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tool mode
    pub const fn mode(&self) -> ToolMode {
        self.tool.mode()
    }

    /// Feed a tool event, returning the host commands to apply
    pub fn handle_tool_event(&mut self, event: ToolEvent) -> &'static [HostCommand] {
        self.tool.handle(event)
    }

    /// Rebuild palette previews from every region of `atlas`
    ///
    /// # Errors
    ///
    /// Returns the first sub-image extraction error; the old palette is kept
    pub fn refresh_palette(&mut self, atlas: &TileAtlas) -> Result<()> {
        let palette = (0..atlas.len())
            .map(|index| atlas.sub_image(index))
            .collect::<Result<Vec<_>>>()?;
        self.palette = palette;
        Ok(())
    }

    /// Palette previews in atlas order
    pub fn palette(&self) -> &[RgbaImage] {
        &self.palette
    }

    /// Palette entry the brush paints with
    pub const fn selected_tile(&self) -> usize {
        self.painter.selected()
    }

    /// Choose the region of `atlas` to paint with
    ///
    /// Checked against the atlas the terrain paints from, not the cached
    /// palette, which may be stale until the next refresh. Replacing the
    /// terrain's atlas afterwards makes painting fail if the selection no
    /// longer exists.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the atlas regions
    pub fn select_tile(&mut self, index: usize, atlas: &TileAtlas) -> Result<()> {
        if index >= atlas.len() {
            return Err(index_out_of_range("palette", index, atlas.len()));
        }
        self.painter.select(index);
        Ok(())
    }

    /// Handle the pointer hitting the scene at `hit`, painting when `pressed`
    ///
    /// Outside `TilePaint` mode the pointer is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if painting fails
    pub fn pointer(
        &self,
        hit: Option<Vec3>,
        pressed: bool,
        terrain: &mut Terrain,
    ) -> Result<SceneFeedback> {
        if self.tool.mode() != ToolMode::TilePaint {
            return Ok(SceneFeedback::default());
        }
        let Some(point) = hit else {
            return Ok(SceneFeedback::default());
        };

        let outline = self.painter.hover(point, &terrain.shape());
        let painted = if pressed {
            terrain.paint_at(point, &self.painter)?
        } else {
            None
        };

        Ok(SceneFeedback {
            outline: Some(outline),
            painted,
        })
    }
}
