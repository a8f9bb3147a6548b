//! Tile terrain component: grid, atlas and the mesh built from them

use glam::Vec3;
use log::{debug, info};

use crate::atlas::TileAtlas;
use crate::editor::brush::TilePainter;
use crate::geometry::mesh::{Mesh, build_mesh};
use crate::io::error::Result;
use crate::runtime::lifecycle::Lifecycle;
use crate::spatial::{CellFill, Grid, GridShape};

/// A grid of atlas tiles with its generated mesh
///
/// The mesh is rebuilt wholesale and replaced; edits that change the cells
/// mark the terrain dirty and the next `tick` rebuilds it.
pub struct Terrain {
    grid: Grid,
    atlas: TileAtlas,
    fill: Box<dyn CellFill>,
    mesh: Option<Mesh>,
    dirty: bool,
}

impl Terrain {
    /// Create a terrain of `shape`, filling cells from `fill`
    ///
    /// The same policy fills cells again whenever the grid is resized.
    pub fn new(shape: GridShape, atlas: TileAtlas, mut fill: Box<dyn CellFill>) -> Self {
        let grid = Grid::new(shape, fill.as_mut());
        Self {
            grid,
            atlas,
            fill,
            mesh: None,
            dirty: false,
        }
    }

    /// Cell grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid dimensions
    pub const fn shape(&self) -> GridShape {
        self.grid.shape()
    }

    /// Tile atlas
    pub const fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    /// Swap in a different atlas; the mesh is rebuilt on the next tick
    pub fn set_atlas(&mut self, atlas: TileAtlas) {
        self.atlas = atlas;
        self.dirty = true;
    }

    /// Current mesh, if one has been built
    pub const fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Whether cell edits are waiting for a rebuild
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the mesh and replace the old one
    ///
    /// # Errors
    ///
    /// Returns an error if a cell refers to a region the atlas does not
    /// have; the previous mesh is kept in that case
    pub fn refresh_mesh(&mut self) -> Result<&Mesh> {
        let mesh = build_mesh(&self.grid, &self.atlas)?;
        self.dirty = false;
        Ok(&*self.mesh.insert(mesh))
    }

    /// Change the cell counts; cells are refilled only if they differ
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for a zero count
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if self.grid.set_dimensions(width, height, self.fill.as_mut())? {
            info!("terrain resized to {width}x{height}");
            self.dirty = true;
        }
        Ok(())
    }

    /// Change the cell edge length
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for a non-positive size
    pub fn set_tile_size(&mut self, tile_size: f32) -> Result<()> {
        self.grid.set_tile_size(tile_size)?;
        self.dirty = true;
        Ok(())
    }

    /// Paint the cell under `point` with the painter's tile
    ///
    /// # Errors
    ///
    /// Returns an error if the painter's tile is not an atlas region
    pub fn paint_at(&mut self, point: Vec3, painter: &TilePainter) -> Result<Option<(usize, usize)>> {
        let painted = painter.paint(point, &mut self.grid, self.atlas.len())?;
        if painted.is_some() {
            self.dirty = true;
        }
        Ok(painted)
    }
}

impl Lifecycle for Terrain {
    fn init(&mut self) -> Result<()> {
        if self.mesh.is_none() {
            self.refresh_mesh()?;
        }
        Ok(())
    }

    fn tick(&mut self, _dt: f32) -> Result<()> {
        if self.dirty {
            debug!("rebuilding dirty terrain mesh");
            self.refresh_mesh()?;
        }
        Ok(())
    }

    fn dispose(&mut self) {
        self.mesh = None;
        self.dirty = false;
    }
}
