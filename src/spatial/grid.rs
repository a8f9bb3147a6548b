//! Grid dimensions, cell storage and per-cell quad layout
//!
//! The grid is centered on the world origin in the X/Z plane. Cell `(i, j)`
//! covers `[i, i + 1) x [j, j + 1)` tiles measured from the bottom-left
//! corner of the grid, which sits at `(-width * tile_size / 2, -height * tile_size / 2)`.

use glam::Vec3;
use log::debug;
use ndarray::Array2;

use crate::io::error::{Result, index_out_of_range, invalid_dimension};
use crate::spatial::fill::CellFill;

/// Corner offsets of a cell quad in winding order:
/// bottom-left, top-left, top-right, bottom-right
pub const QUAD_CORNERS: [(f32, f32); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];

// Every cell's quad has its own four vertices
const VERTICES_PER_CELL: usize = QUAD_CORNERS.len();

/// Validated physical dimensions of a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridShape {
    width: usize,
    height: usize,
    tile_size: f32,
}

impl GridShape {
    /// Create a grid shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if width or height is zero, if the grid's
    /// mesh would need more vertices than `u32` indices can address, or if
    /// the tile size is not a positive finite number
    pub fn new(width: usize, height: usize, tile_size: f32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_dimension("width", &width));
        }
        if height == 0 {
            return Err(invalid_dimension("height", &height));
        }
        let vertices = width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(VERTICES_PER_CELL));
        if vertices.is_none_or(|count| count > u32::MAX as usize) {
            return Err(invalid_dimension("width x height", &format!("{width}x{height}")));
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(invalid_dimension("tile_size", &tile_size));
        }

        Ok(Self {
            width,
            height,
            tile_size,
        })
    }

    /// Number of cells along X
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along Z
    pub const fn height(&self) -> usize {
        self.height
    }

    /// World-space edge length of a cell
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if `(i, j)` addresses a cell of this grid
    pub const fn contains(&self, i: usize, j: usize) -> bool {
        i < self.width && j < self.height
    }

    /// World-space position of the grid's bottom-left corner
    pub fn origin(&self) -> Vec3 {
        Vec3::new(
            -self.tile_size * self.width as f32 * 0.5,
            0.0,
            -self.tile_size * self.height as f32 * 0.5,
        )
    }

    /// Four corners of cell `(i, j)` in winding order, at `y = 0`
    ///
    /// Indices are not bounds-checked so callers may outline cells just
    /// outside the grid.
    pub fn quad_vertices(&self, i: usize, j: usize) -> [Vec3; 4] {
        let origin = self.origin();
        QUAD_CORNERS.map(|(dx, dz)| {
            Vec3::new(
                origin.x + (i as f32 + dx) * self.tile_size,
                0.0,
                origin.z + (j as f32 + dz) * self.tile_size,
            )
        })
    }

    /// Outline of the whole grid, same winding as a cell quad
    pub fn frame(&self) -> [Vec3; 4] {
        let origin = self.origin();
        let extent_x = self.width as f32 * self.tile_size;
        let extent_z = self.height as f32 * self.tile_size;
        QUAD_CORNERS.map(|(dx, dz)| {
            Vec3::new(origin.x + dx * extent_x, 0.0, origin.z + dz * extent_z)
        })
    }
}

/// One grid position holding a single atlas tile selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Index of the atlas region drawn on this cell
    pub texture_tile_index: usize,
}

/// Grid shape plus dense cell storage indexed `[i, j]`
#[derive(Debug, Clone)]
pub struct Grid {
    shape: GridShape,
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid, filling every cell from `fill`
    pub fn new(shape: GridShape, fill: &mut dyn CellFill) -> Self {
        let cells = Self::fresh_cells(shape, fill);
        Self { shape, cells }
    }

    fn fresh_cells(shape: GridShape, fill: &mut dyn CellFill) -> Array2<Cell> {
        Array2::from_shape_fn((shape.width, shape.height), |(i, j)| Cell {
            texture_tile_index: fill.tile_index(i, j),
        })
    }

    /// Current dimensions
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of cells along X
    pub const fn width(&self) -> usize {
        self.shape.width
    }

    /// Number of cells along Z
    pub const fn height(&self) -> usize {
        self.shape.height
    }

    /// World-space edge length of a cell
    pub const fn tile_size(&self) -> f32 {
        self.shape.tile_size
    }

    /// Change the cell counts
    ///
    /// Cells are discarded and refilled from `fill` only when the dimensions
    /// actually change. Returns whether a reset happened.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either count is zero; the grid is left untouched
    pub fn set_dimensions(
        &mut self,
        width: usize,
        height: usize,
        fill: &mut dyn CellFill,
    ) -> Result<bool> {
        let shape = GridShape::new(width, height, self.shape.tile_size)?;
        if shape.width == self.shape.width && shape.height == self.shape.height {
            return Ok(false);
        }

        debug!(
            "resetting grid cells {}x{} -> {width}x{height}",
            self.shape.width, self.shape.height
        );
        self.cells = Self::fresh_cells(shape, fill);
        self.shape = shape;
        Ok(true)
    }

    /// Change the cell edge length, keeping all cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the size is not a positive finite number
    pub fn set_tile_size(&mut self, tile_size: f32) -> Result<()> {
        self.shape = GridShape::new(self.shape.width, self.shape.height, tile_size)?;
        Ok(())
    }

    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.shape.width {
            return Err(index_out_of_range("grid column", i, self.shape.width));
        }
        if j >= self.shape.height {
            return Err(index_out_of_range("grid row", j, self.shape.height));
        }
        Ok(())
    }

    /// Cell at `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the indices fall outside the grid
    pub fn cell(&self, i: usize, j: usize) -> Result<&Cell> {
        self.check_index(i, j)?;
        self.cells
            .get([i, j])
            .ok_or_else(|| index_out_of_range("grid cell", i * self.shape.height + j, self.cells.len()))
    }

    /// Set the atlas tile drawn on cell `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the indices fall outside the grid
    pub fn paint(&mut self, i: usize, j: usize, tile_index: usize) -> Result<()> {
        self.check_index(i, j)?;
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut([i, j])
            .ok_or_else(|| index_out_of_range("grid cell", i * self.shape.height + j, len))?;
        cell.texture_tile_index = tile_index;
        Ok(())
    }

    /// All cells, shaped `(width, height)`
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}
