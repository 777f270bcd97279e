//! Sparse tile storage keyed by coordinate
//!
//! The plane is the substrate every other subsystem reads and writes. Storage
//! is a hash map from coordinate to tile record, so the plane is unbounded and
//! pays only for coordinates that were ever colored. Records are never removed:
//! turning a tile off retains it with intensity zero, and that distinction
//! (present-but-off versus absent) is load-bearing for neighborhood
//! resolution, rule matching, and path search.

use std::collections::HashMap;

use crate::spatial::tiles::{Coordinate, Tile};

/// Sparse mapping from coordinate to tile record
#[derive(Debug, Clone, Default)]
pub struct TilePlane {
    tiles: HashMap<Coordinate, Tile>,
}

impl TilePlane {
    /// Create an empty plane
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the tile at a coordinate
    ///
    /// Existing records are replaced unconditionally. The intensity sign is
    /// not validated here; callers that feed the path engine are expected to
    /// keep intensities non-negative (the command dispatcher rejects negative
    /// values before they reach the plane).
    pub fn set_tile(&mut self, coord: Coordinate, color: impl Into<String>, intensity: i64) {
        self.tiles.insert(coord, Tile::new(color, intensity));
    }

    /// Turn off the tile at a coordinate
    ///
    /// Zeroes the intensity of an existing lit tile and keeps its record.
    /// Absent or already-off coordinates are left untouched.
    pub fn turn_off(&mut self, coord: Coordinate) {
        if let Some(tile) = self.tiles.get_mut(&coord).filter(|tile| tile.is_lit()) {
            tile.intensity = 0;
        }
    }

    /// Recolor an existing tile in place, preserving its intensity
    ///
    /// Returns `false` when no record exists at the coordinate.
    pub fn recolor(&mut self, coord: Coordinate, color: &str) -> bool {
        self.tiles.get_mut(&coord).is_some_and(|tile| {
            color.clone_into(&mut tile.color);
            true
        })
    }

    /// The color and intensity of a lit tile
    ///
    /// Absent and off tiles both yield `None`; querying never mutates state.
    pub fn query(&self, coord: Coordinate) -> Option<(&str, i64)> {
        self.tiles
            .get(&coord)
            .filter(|tile| tile.is_lit())
            .map(|tile| (tile.color.as_str(), tile.intensity))
    }

    /// The tile record at a coordinate, lit or off
    pub fn get(&self, coord: Coordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Whether any record exists at a coordinate
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Whether the coordinate holds a lit tile
    pub fn is_lit(&self, coord: Coordinate) -> bool {
        self.tiles.get(&coord).is_some_and(Tile::is_lit)
    }

    /// Number of coordinates that were ever colored
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the plane holds no records at all
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over every stored record, lit or off, in arbitrary order
    pub fn tiles(&self) -> impl Iterator<Item = (&Coordinate, &Tile)> {
        self.tiles.iter()
    }
}
