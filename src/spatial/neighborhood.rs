//! Neighborhood resolution over the sparse plane
//!
//! The resolver enumerates the existing tiles among a coordinate's eight
//! surrounding positions. Existence, not lit-state, determines membership:
//! off tiles are full members of a neighborhood. Rule matching, flood fill,
//! and path search all build on this primitive, so that choice propagates
//! into all three subsystems.

use std::collections::HashMap;

use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::{Coordinate, Tile};

/// Offsets of the eight surrounding positions (orthogonal and diagonal)
pub const NEIGHBOR_OFFSETS: [[i64; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [1, -1],
    [-1, 1],
    [1, 1],
];

/// Offsets of the four edge-sharing positions
///
/// Perimeter accounting charges a tile only for sides not shared with a lit
/// orthogonal neighbor; diagonal neighbors share no side.
pub const ORTHOGONAL_OFFSETS: [[i64; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Multiset of color labels observed in a neighborhood
///
/// Counts own their labels so the histogram stays valid while the plane is
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: HashMap<String, usize>,
}

impl ColorHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a color
    pub fn record(&mut self, color: &str) {
        *self.counts.entry(color.to_owned()).or_default() += 1;
    }

    /// Occurrences recorded for a color, zero when absent
    pub fn count(&self, color: &str) -> usize {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Number of distinct colors observed
    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The existing tiles among the eight neighbors of a coordinate
///
/// Absent coordinates are simply missing from the result; off tiles are
/// included. Enumeration order follows `NEIGHBOR_OFFSETS` and is
/// deterministic.
pub fn existing_neighbors(plane: &TilePlane, coord: Coordinate) -> Vec<(Coordinate, &Tile)> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&[dx, dy]| {
            let neighbor = coord.offset(dx, dy);
            plane.get(neighbor).map(|tile| (neighbor, tile))
        })
        .collect()
}

/// Histogram of the colors among all existing neighbors of a coordinate
///
/// Off tiles contribute their stored color exactly like lit ones.
pub fn color_histogram(plane: &TilePlane, coord: Coordinate) -> ColorHistogram {
    let mut histogram = ColorHistogram::new();
    for (_, tile) in existing_neighbors(plane, coord) {
        histogram.record(&tile.color);
    }
    histogram
}

/// Count of orthogonally adjacent tiles that exist and are lit
pub fn lit_orthogonal_count(plane: &TilePlane, coord: Coordinate) -> usize {
    ORTHOGONAL_OFFSETS
        .iter()
        .filter(|&&[dx, dy]| plane.is_lit(coord.offset(dx, dy)))
        .count()
}
