//! Tests for configuration constant consistency

#[cfg(test)]
mod tests {
    use regionfill::RegionPartitioner;
    use regionfill::io::configuration::{
        BORDER_THICKNESS, DEFAULT_CANVAS_SIZE, DEFAULT_COUNT, DEFAULT_GRID_SIZE,
        DEFAULT_NUM_REGIONS, GIF_CELL_SIZE, GIF_FRAME_DELAY_MS, LINE_WIDTH, MAX_GRID_SIZE,
        MAX_VISUALIZE_GRID_SIZE, REGION_PALETTE, VIEWER_MIN_FRAME_DELAY_MS,
    };
    use std::collections::HashSet;

    // Tests the default parameters describe a satisfiable partition
    // Verified by setting the default region count above the cell count
    #[test]
    fn test_defaults_are_satisfiable() {
        assert!(RegionPartitioner::new(DEFAULT_NUM_REGIONS, DEFAULT_GRID_SIZE).is_ok());
        assert!(DEFAULT_COUNT >= 1);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }

    // Tests palette entries are distinct and opaque
    #[test]
    fn test_palette_distinct_and_opaque() {
        let distinct: HashSet<[u8; 4]> = REGION_PALETTE.iter().copied().collect();
        assert_eq!(distinct.len(), REGION_PALETTE.len());
        assert!(REGION_PALETTE.iter().all(|color| color[3] == 255));
    }

    // Tests rendering constants leave room for cells
    #[test]
    fn test_rendering_constants() {
        assert!(BORDER_THICKNESS >= LINE_WIDTH);
        assert!(DEFAULT_CANVAS_SIZE as usize >= DEFAULT_GRID_SIZE);
        assert!(GIF_FRAME_DELAY_MS > 0);
        assert!(VIEWER_MIN_FRAME_DELAY_MS >= GIF_FRAME_DELAY_MS);
    }

    // Tests the largest animated grid fits a GIF frame
    // Verified by raising MAX_VISUALIZE_GRID_SIZE to MAX_GRID_SIZE
    #[test]
    fn test_visualize_cap_fits_gif_frame() {
        assert!(MAX_VISUALIZE_GRID_SIZE <= MAX_GRID_SIZE);
        let width = MAX_VISUALIZE_GRID_SIZE as u64 * u64::from(GIF_CELL_SIZE);
        assert!(width <= u64::from(u16::MAX));
    }
}
