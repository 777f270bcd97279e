//! Tests for neighborhood resolution and color histogram collection

#[cfg(test)]
mod tests {
    use glowtile::spatial::{
        neighborhood::{
            ColorHistogram, NEIGHBOR_OFFSETS, ORTHOGONAL_OFFSETS, color_histogram,
            existing_neighbors, lit_orthogonal_count,
        },
        plane::TilePlane,
        tiles::Coordinate,
    };

    // Tests the neighborhood covers all eight distinct surrounding cells
    // Verified by duplicating an offset entry
    #[test]
    fn test_neighbor_offsets_are_distinct() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
        assert_eq!(ORTHOGONAL_OFFSETS.len(), 4);

        for (index, offset) in NEIGHBOR_OFFSETS.iter().enumerate() {
            assert_ne!(*offset, [0, 0]);
            assert!(!NEIGHBOR_OFFSETS[index + 1..].contains(offset));
        }
        for offset in ORTHOGONAL_OFFSETS {
            assert!(NEIGHBOR_OFFSETS.contains(&offset));
        }
    }

    // Tests off tiles stay part of the neighborhood while distant tiles never join
    // Verified by filtering for lit tiles during resolution
    #[test]
    fn test_existing_neighbors_includes_off_tiles() {
        let mut plane = TilePlane::new();
        let center = Coordinate::new(0, 0);
        plane.set_tile(Coordinate::new(1, 0), "red", 4);
        plane.set_tile(Coordinate::new(0, 1), "blue", 6);
        plane.turn_off(Coordinate::new(0, 1));
        plane.set_tile(Coordinate::new(2, 0), "red", 1);

        let neighbors = existing_neighbors(&plane, center);
        assert_eq!(neighbors.len(), 2);
    }

    // Tests histogram counts rest on existence rather than intensity
    // Verified by skipping zero-intensity tiles during counting
    #[test]
    fn test_histogram_counts_off_and_lit_alike() {
        let mut plane = TilePlane::new();
        let center = Coordinate::new(0, 0);
        plane.set_tile(Coordinate::new(-1, 0), "red", 2);
        plane.set_tile(Coordinate::new(1, 1), "red", 8);
        plane.turn_off(Coordinate::new(1, 1));
        plane.set_tile(Coordinate::new(0, -1), "blue", 1);

        let histogram = color_histogram(&plane, center);
        assert_eq!(histogram.count("red"), 2);
        assert_eq!(histogram.count("blue"), 1);
        assert_eq!(histogram.count("green"), 0);
        assert_eq!(histogram.distinct_colors(), 2);
    }

    // Tests an isolated coordinate produces an empty histogram
    // Verified by recording the center tile itself
    #[test]
    fn test_histogram_of_isolated_coordinate_is_empty() {
        let plane = TilePlane::new();
        let histogram = color_histogram(&plane, Coordinate::new(10, 10));

        assert!(histogram.is_empty());
    }

    // Tests histogram recording accumulates repeated colors
    // Verified by overwriting instead of incrementing counts
    #[test]
    fn test_histogram_record_accumulates() {
        let mut histogram = ColorHistogram::new();
        histogram.record("red");
        histogram.record("red");
        histogram.record("blue");

        assert_eq!(histogram.count("red"), 2);
        assert_eq!(histogram.count("blue"), 1);
        assert_eq!(histogram.distinct_colors(), 2);
        assert!(!histogram.is_empty());
    }

    // Tests the orthogonal count excludes diagonal and off tiles
    // Verified by counting over the full eight-cell neighborhood
    #[test]
    fn test_lit_orthogonal_count_ignores_diagonals_and_off_tiles() {
        let mut plane = TilePlane::new();
        let center = Coordinate::new(0, 0);
        plane.set_tile(center, "red", 1);
        plane.set_tile(Coordinate::new(1, 0), "red", 1);
        plane.set_tile(Coordinate::new(1, 1), "red", 1);
        plane.set_tile(Coordinate::new(-1, 0), "red", 1);
        plane.turn_off(Coordinate::new(-1, 0));

        assert_eq!(lit_orthogonal_count(&plane, center), 1);
    }
}
