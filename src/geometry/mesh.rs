//! Triangle mesh generation for a tile grid
//!
//! Every cell becomes an independent up-facing quad made of two triangles.
//! Quads share no vertices, so each cell can carry its own atlas UVs and
//! shading is flat by construction.

use glam::{Vec2, Vec3};
use log::debug;

use crate::atlas::{TileAtlas, TileRegion};
use crate::io::configuration::MESH_NAME;
use crate::io::error::{Result, TerrainError, index_out_of_range};
use crate::spatial::Grid;

/// Triangle indices of one quad, relative to its first vertex
pub const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Resolves a cell's tile index to the atlas region drawn on it
pub trait RegionLookup {
    /// Region for `tile_index`
    ///
    /// # Errors
    ///
    /// Returns an error if no region exists for the index
    fn lookup(&self, tile_index: usize) -> Result<&TileRegion>;
}

impl RegionLookup for TileAtlas {
    fn lookup(&self, tile_index: usize) -> Result<&TileRegion> {
        self.region(tile_index)
    }
}

impl RegionLookup for [TileRegion] {
    fn lookup(&self, tile_index: usize) -> Result<&TileRegion> {
        if self.is_empty() {
            return Err(TerrainError::AtlasEmpty {
                operation: "region lookup",
            });
        }
        self.get(tile_index)
            .ok_or_else(|| index_out_of_range("atlas region", tile_index, self.len()))
    }
}

/// Renderable mesh data
///
/// Built wholesale on every rebuild; never updated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Object name
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Texture coordinates, one per vertex
    pub uvs: Vec<Vec2>,
    /// Triangle list indices into `vertices`
    pub triangles: Vec<u32>,
    /// Vertex normals, one per vertex
    pub normals: Vec<Vec3>,
}

impl Mesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}

/// Build the mesh for `grid`, taking UVs for each cell from `regions`
///
/// Quads are emitted column by column: cell `(i, j)` owns vertices
/// `4 * (i * height + j) ..` and triangle indices `6 * (i * height + j) ..`.
///
/// # Errors
///
/// Returns the lookup's error (`AtlasEmpty` or `IndexOutOfRange` for the
/// built-in lookups) for the first cell whose tile index has no region
pub fn build_mesh<L>(grid: &Grid, regions: &L) -> Result<Mesh>
where
    L: RegionLookup + ?Sized,
{
    let shape = grid.shape();
    let quads = shape.cell_count();

    let mut vertices = Vec::with_capacity(4 * quads);
    let mut uvs = Vec::with_capacity(4 * quads);
    let mut triangles = Vec::with_capacity(6 * quads);

    for ((i, j), cell) in grid.cells().indexed_iter() {
        let region = regions.lookup(cell.texture_tile_index)?;
        let first_vertex = u32::try_from(vertices.len()).map_err(|_overflow| {
            index_out_of_range("mesh vertex", vertices.len(), u32::MAX as usize)
        })?;

        vertices.extend(shape.quad_vertices(i, j));
        uvs.extend(region.corners());
        triangles.extend(QUAD_TRIANGLES.map(|corner| first_vertex + corner));
    }

    let normals = vec![Vec3::Y; vertices.len()];

    debug!(
        "built mesh for {}x{} grid: {} vertices, {} triangles",
        shape.width(),
        shape.height(),
        vertices.len(),
        triangles.len() / 3
    );

    Ok(Mesh {
        name: MESH_NAME.to_string(),
        vertices,
        uvs,
        triangles,
        normals,
    })
}
