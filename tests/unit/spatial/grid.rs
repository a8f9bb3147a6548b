//! Tests for grid shape validation, quad layout, painting and resizing

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use strange_terrain::TerrainError;
    use strange_terrain::spatial::{Grid, GridShape, RandomFill, UniformFill};

    // Tests zero and non-positive dimensions are rejected
    // Verified by removing the height check
    #[test]
    fn test_shape_rejects_invalid_dimensions() {
        assert!(matches!(
            GridShape::new(0, 3, 1.0),
            Err(TerrainError::InvalidDimension {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            GridShape::new(3, 0, 1.0),
            Err(TerrainError::InvalidDimension {
                parameter: "height",
                ..
            })
        ));
        for tile_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GridShape::new(3, 3, tile_size),
                Err(TerrainError::InvalidDimension {
                    parameter: "tile_size",
                    ..
                })
            ));
        }
    }

    // Tests grids whose mesh cannot be indexed with u32 are rejected before allocation
    // Verified by validating only the individual dimensions
    #[test]
    fn test_shape_rejects_oversized_grid() {
        for (width, height) in [(1 << 40, 1 << 40), (usize::MAX, 2), (1 << 16, 1 << 14)] {
            assert!(matches!(
                GridShape::new(width, height, 1.0),
                Err(TerrainError::InvalidDimension {
                    parameter: "width x height",
                    ..
                })
            ));
        }

        // 2^30 cells take exactly 2^32 vertices, one past the largest u32 index
        assert!(GridShape::new(1 << 15, 1 << 15, 1.0).is_err());
        let largest = GridShape::new((1 << 15) - 1, 1 << 15, 1.0).unwrap();
        assert_eq!(largest.cell_count() * 4, ((1 << 15) - 1) << 17);
    }

    // Tests resizing to an oversized grid fails and keeps the cells
    // Verified by allocating the new cell array before validation
    #[test]
    fn test_set_dimensions_rejects_oversized() {
        let mut grid = Grid::new(GridShape::new(2, 2, 1.0).unwrap(), &mut UniformFill(1));

        assert!(matches!(
            grid.set_dimensions(1 << 40, 1 << 40, &mut UniformFill(0)),
            Err(TerrainError::InvalidDimension { .. })
        ));
        assert_eq!(grid.cells().dim(), (2, 2));
    }

    // Tests cell quads follow the bottom-left, top-left, top-right, bottom-right winding
    // Verified by swapping the second and fourth corner offsets
    #[test]
    fn test_quad_vertices_winding() {
        let shape = GridShape::new(2, 2, 1.0).unwrap();
        let quad = shape.quad_vertices(0, 0);

        assert_eq!(quad[0], Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(quad[1], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(quad[2], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(quad[3], Vec3::new(0.0, 0.0, -1.0));
    }

    // Tests quads scale with tile size and the grid is centered on the origin
    // Verified by dropping the half-extent origin shift
    #[test]
    fn test_quad_vertices_scaled_and_centered() {
        let shape = GridShape::new(4, 2, 2.0).unwrap();

        assert_eq!(shape.origin(), Vec3::new(-4.0, 0.0, -2.0));
        let last = shape.quad_vertices(3, 1);
        assert_eq!(last[2], Vec3::new(4.0, 0.0, 2.0));
        assert_eq!(shape.frame()[0], Vec3::new(-4.0, 0.0, -2.0));
        assert_eq!(shape.frame()[2], Vec3::new(4.0, 0.0, 2.0));
    }

    // Tests cell storage always matches the grid dimensions
    // Verified by creating the array with swapped axes
    #[test]
    fn test_cells_extent_matches_dimensions() {
        let grid = Grid::new(GridShape::new(5, 3, 1.0).unwrap(), &mut UniformFill(0));

        assert_eq!(grid.cells().dim(), (5, 3));
        assert_eq!(grid.cells().len(), grid.shape().cell_count());
    }

    // Tests painting changes only the targeted cell
    // Verified by writing the tile index to every cell
    #[test]
    fn test_paint_targets_single_cell() {
        let mut grid = Grid::new(GridShape::new(3, 3, 1.0).unwrap(), &mut UniformFill(0));

        grid.paint(2, 1, 3).unwrap();

        assert_eq!(grid.cell(2, 1).unwrap().texture_tile_index, 3);
        let painted = grid
            .cells()
            .iter()
            .filter(|cell| cell.texture_tile_index != 0)
            .count();
        assert_eq!(painted, 1);
    }

    // Tests out-of-range cell access is reported instead of panicking
    // Verified by removing the row bounds check
    #[test]
    fn test_cell_access_out_of_range() {
        let mut grid = Grid::new(GridShape::new(3, 2, 1.0).unwrap(), &mut UniformFill(0));

        assert!(matches!(
            grid.cell(3, 0),
            Err(TerrainError::IndexOutOfRange {
                index: 3,
                len: 3,
                ..
            })
        ));
        assert!(matches!(
            grid.paint(0, 2, 1),
            Err(TerrainError::IndexOutOfRange {
                index: 2,
                len: 2,
                ..
            })
        ));
    }

    // Tests cells are refilled only when the dimensions actually change
    // Verified by always resetting in set_dimensions
    #[test]
    fn test_set_dimensions_resets_only_on_change() {
        let mut grid = Grid::new(GridShape::new(2, 2, 1.0).unwrap(), &mut UniformFill(0));
        grid.paint(1, 1, 3).unwrap();

        let reset = grid.set_dimensions(2, 2, &mut UniformFill(1)).unwrap();
        assert!(!reset);
        assert_eq!(grid.cell(1, 1).unwrap().texture_tile_index, 3);

        let reset = grid.set_dimensions(3, 2, &mut UniformFill(1)).unwrap();
        assert!(reset);
        assert_eq!(grid.cells().dim(), (3, 2));
        assert!(grid.cells().iter().all(|cell| cell.texture_tile_index == 1));
    }

    // Tests invalid resize leaves the grid untouched
    // Verified by assigning the shape before validation
    #[test]
    fn test_set_dimensions_invalid_keeps_grid() {
        let mut grid = Grid::new(GridShape::new(2, 2, 1.0).unwrap(), &mut UniformFill(2));

        assert!(grid.set_dimensions(0, 2, &mut UniformFill(0)).is_err());
        assert_eq!(grid.width(), 2);
        assert!(grid.cells().iter().all(|cell| cell.texture_tile_index == 2));
    }

    // Tests tile size changes keep cells and validate the size
    // Verified by resetting cells in set_tile_size
    #[test]
    fn test_set_tile_size() {
        let mut grid = Grid::new(GridShape::new(2, 2, 1.0).unwrap(), &mut RandomFill::seeded(9));
        let before = grid.cells().clone();

        grid.set_tile_size(0.5).unwrap();
        assert!((grid.tile_size() - 0.5).abs() < f32::EPSILON);
        assert_eq!(grid.cells(), &before);
        assert!(grid.set_tile_size(-2.0).is_err());
        assert!((grid.tile_size() - 0.5).abs() < f32::EPSILON);
    }
}
