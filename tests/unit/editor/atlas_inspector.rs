//! Tests for atlas editing through the inspector

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strange_terrain::TerrainError;
    use strange_terrain::atlas::TileAtlas;
    use strange_terrain::editor::AtlasInspector;

    fn atlas_of(names: &[&str]) -> TileAtlas {
        let mut atlas = TileAtlas::new();
        for name in names {
            atlas.add_region(*name, Vec2::ZERO, Vec2::ONE);
        }
        atlas
    }

    // Tests a non-empty atlas starts with its first region selected
    // Verified by starting with no selection
    #[test]
    fn test_initial_selection() {
        assert_eq!(AtlasInspector::new(atlas_of(&["a", "b"])).selected(), Some(0));
        assert_eq!(AtlasInspector::new(TileAtlas::new()).selected(), None);
    }

    // Tests created regions cover the whole texture, get a numbered name and become selected
    // Verified by selecting the first region after creation
    #[test]
    fn test_create_region() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a"]));
        let mut rng = StdRng::seed_from_u64(5);

        let index = inspector.create_region(&mut rng);

        assert_eq!(index, 1);
        assert_eq!(inspector.selected(), Some(1));
        let region = inspector.selected_region().unwrap();
        assert_eq!(region.offset(), Vec2::ZERO);
        assert_eq!(region.tiling(), Vec2::ONE);

        let suffix: u32 = region.name.strip_prefix("New Tile ").unwrap().parse().unwrap();
        assert!((100..1000).contains(&suffix));
    }

    // Tests removing the last selected region of three moves the selection to the new last
    // Verified by leaving the selection on the removed slot
    #[test]
    fn test_remove_last_selected() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a", "b", "c"]));
        inspector.select(2);

        let removed = inspector.remove_selected().unwrap();

        assert_eq!(removed.name, "c");
        assert_eq!(inspector.selected(), Some(1));
        assert_eq!(inspector.atlas().names(), vec!["a", "b"]);
    }

    // Tests removing a middle region keeps the selection on the same slot
    // Verified by resetting the selection to zero after removal
    #[test]
    fn test_remove_middle_selected() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a", "b", "c"]));
        inspector.select(1);

        inspector.remove_selected().unwrap();
        assert_eq!(inspector.selected(), Some(1));
        assert_eq!(inspector.selected_region().unwrap().name, "c");
    }

    // Tests removing every region clears the selection and further removal fails
    // Verified by keeping a dangling selection on an empty atlas
    #[test]
    fn test_remove_until_empty() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a", "b"]));
        inspector.remove_selected().unwrap();
        inspector.remove_selected().unwrap();

        assert_eq!(inspector.selected(), None);
        assert!(inspector.atlas().is_empty());
        assert!(matches!(
            inspector.remove_selected(),
            Err(TerrainError::AtlasEmpty { .. })
        ));
        assert!(matches!(
            inspector.rename_selected("x"),
            Err(TerrainError::AtlasEmpty { .. })
        ));
    }

    // Tests selecting past the end clamps to the last region
    // Verified by storing the raw index
    #[test]
    fn test_select_clamps() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a", "b", "c"]));
        inspector.select(10);
        assert_eq!(inspector.selected(), Some(2));
    }

    // Tests edits go to the selected region only
    // Verified by editing region zero regardless of selection
    #[test]
    fn test_edit_selected_region() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a", "b"]));
        inspector.select(1);

        inspector.rename_selected("grass").unwrap();
        inspector.set_selected_offset(Vec2::new(0.5, 0.25)).unwrap();
        inspector.set_selected_tiling(Vec2::new(0.5, 0.5)).unwrap();

        let atlas = inspector.into_atlas();
        let edited = atlas.region(1).unwrap();
        assert_eq!(edited.name, "grass");
        assert_eq!(edited.offset(), Vec2::new(0.5, 0.25));
        assert_eq!(edited.tiling(), Vec2::new(0.5, 0.5));
        assert_eq!(atlas.region(0).unwrap().name, "a");
        assert_eq!(atlas.region(0).unwrap().tiling(), Vec2::ONE);
    }

    // Tests the preview of the selected region needs an image
    // Verified by returning an empty preview without an image
    #[test]
    fn test_selected_preview() {
        let mut inspector = AtlasInspector::new(atlas_of(&["a"]));
        assert!(matches!(
            inspector.selected_preview(),
            Err(TerrainError::MissingImage { .. })
        ));

        inspector.set_image(Some(RgbaImage::from_pixel(4, 2, Rgba([9, 9, 9, 255]))));
        assert_eq!(inspector.selected_preview().unwrap().dimensions(), (4, 2));
    }
}
