//! Tile and coordinate value types for the sparse plane

use std::fmt;

/// Integer grid position identifying a tile on the unbounded plane
///
/// Coordinates are arbitrary signed integers; the plane is sparse, so a
/// coordinate carries no storage until a tile is colored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinate displaced by the given deltas
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A colored cell record stored on the plane
///
/// Records are created by the coloring operation (or by propagation onto an
/// empty coordinate) and never deleted; turning a tile off zeroes its
/// intensity but keeps the record and its last color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Arbitrary color label
    pub color: String,
    /// Brightness level; the tile is lit while this is positive
    pub intensity: i64,
}

impl Tile {
    /// Create a tile with the given color and intensity
    pub fn new(color: impl Into<String>, intensity: i64) -> Self {
        Self {
            color: color.into(),
            intensity,
        }
    }

    /// Whether the tile currently participates in blocks and queries
    pub const fn is_lit(&self) -> bool {
        self.intensity > 0
    }
}
