//! Mapping between world-space points and grid cells
//!
//! Picked indices are centered: index 0 is the cell at (or beside) the
//! world origin, negative indices lie on the negative side. Only the X and Z
//! components of a point participate.
//!
//! A dimension with an even cell count has a tile boundary at the origin, so
//! the index is a plain truncation and the cell center is recovered by adding
//! half a tile toward the side the point fell on. An odd cell count has a
//! tile middle at the origin, so the half-tile shift is applied to the point
//! before truncating and cell centers sit on whole multiples of the tile size.
//!
//! A coordinate of exactly zero counts as the positive side.

use glam::Vec3;

use crate::spatial::GridShape;

/// Result of picking a cell under a world-space point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPick {
    /// Centered index along X
    pub x: i32,
    /// Centered index along Z
    pub z: i32,
    /// Whether the picked X coordinate was on the positive side of the origin
    pub positive_x: bool,
    /// Whether the picked Z coordinate was on the positive side of the origin
    pub positive_z: bool,
    /// Whether the picked cell lies inside the grid
    pub found: bool,
}

impl CellPick {
    /// Array indices `(i, j)` of the picked cell, or `None` outside the grid
    pub fn grid_index(&self, shape: &GridShape) -> Option<(usize, usize)> {
        let i = array_index(self.x, self.positive_x, shape.width())?;
        let j = array_index(self.z, self.positive_z, shape.height())?;
        Some((i, j))
    }
}

const fn half_tile(positive: bool) -> f32 {
    if positive { 0.5 } else { -0.5 }
}

const fn is_even(count: usize) -> bool {
    count % 2 == 0
}

fn centered_index(coordinate: f32, count: usize, tile_size: f32) -> (i32, bool) {
    let positive = coordinate >= 0.0;
    let shift = if is_even(count) {
        0.0
    } else {
        half_tile(positive)
    };
    (((shift * tile_size + coordinate) / tile_size) as i32, positive)
}

fn center_coordinate(index: i32, positive: bool, count: usize, tile_size: f32) -> f32 {
    let shift = if is_even(count) {
        half_tile(positive)
    } else {
        0.0
    };
    (index as f32 + shift) * tile_size
}

fn array_index(index: i32, positive: bool, count: usize) -> Option<usize> {
    let shift = if is_even(count) {
        f64::from(half_tile(positive))
    } else {
        0.0
    };
    let position = (f64::from(index) + count as f64 * 0.5 + shift).floor();
    (position >= 0.0 && position < count as f64).then_some(position as usize)
}

/// Pick the cell containing `point`
pub fn cell_index_at(point: Vec3, shape: &GridShape) -> CellPick {
    let (x, positive_x) = centered_index(point.x, shape.width(), shape.tile_size());
    let (z, positive_z) = centered_index(point.z, shape.height(), shape.tile_size());

    let mut pick = CellPick {
        x,
        z,
        positive_x,
        positive_z,
        found: false,
    };
    pick.found = pick.grid_index(shape).is_some();
    pick
}

/// World-space center of a picked cell, at `y = 0`
pub fn cell_center(pick: &CellPick, shape: &GridShape) -> Vec3 {
    Vec3::new(
        center_coordinate(pick.x, pick.positive_x, shape.width(), shape.tile_size()),
        0.0,
        center_coordinate(pick.z, pick.positive_z, shape.height(), shape.tile_size()),
    )
}

/// Center of the cell containing `point`
pub fn tile_center_at(point: Vec3, shape: &GridShape) -> Vec3 {
    cell_center(&cell_index_at(point, shape), shape)
}
