//! Tile painting brush

use glam::Vec3;
use log::debug;

use crate::geometry::picking::cell_index_at;
use crate::io::error::{Result, TerrainError, index_out_of_range};
use crate::spatial::{Grid, GridShape};

/// Outlines to draw while the brush hovers the terrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushOutline {
    /// Outline of the whole grid
    pub frame: [Vec3; 4],
    /// Outline of the cell under the pointer, if it is inside the grid
    pub hovered: Option<[Vec3; 4]>,
}

/// Paints the selected palette tile into picked cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TilePainter {
    selected: usize,
}

impl TilePainter {
    /// Painter with palette entry `selected` active
    pub const fn new(selected: usize) -> Self {
        Self { selected }
    }

    /// Active palette entry
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Switch the active palette entry
    pub const fn select(&mut self, selected: usize) {
        self.selected = selected;
    }

    /// Outlines for a pointer hit at `point`
    pub fn hover(&self, point: Vec3, shape: &GridShape) -> BrushOutline {
        let hovered = cell_index_at(point, shape)
            .grid_index(shape)
            .map(|(i, j)| shape.quad_vertices(i, j));
        BrushOutline {
            frame: shape.frame(),
            hovered,
        }
    }

    /// Paint the cell under `point` with the active entry of a palette of `palette_len` tiles
    ///
    /// Returns the painted cell, or `None` when the point misses the grid.
    ///
    /// # Errors
    ///
    /// Returns `AtlasEmpty` for an empty palette and `IndexOutOfRange` when the
    /// active entry is past its end
    pub fn paint(
        &self,
        point: Vec3,
        grid: &mut Grid,
        palette_len: usize,
    ) -> Result<Option<(usize, usize)>> {
        if palette_len == 0 {
            return Err(TerrainError::AtlasEmpty {
                operation: "tile painting",
            });
        }
        if self.selected >= palette_len {
            return Err(index_out_of_range("palette", self.selected, palette_len));
        }

        let shape = grid.shape();
        let Some((i, j)) = cell_index_at(point, &shape).grid_index(&shape) else {
            return Ok(None);
        };

        grid.paint(i, j, self.selected)?;
        debug!("painted tile {} at ({i}, {j})", self.selected);
        Ok(Some((i, j)))
    }
}
