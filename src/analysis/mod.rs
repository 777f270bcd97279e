//! Structural analysis of lit blocks and routes across the plane

/// Flood discovery of lit blocks and their intensity sums
pub mod blocks;
/// Minimum-intensity path search between lit tiles
pub mod pathfinding;
/// Boundary measurement of lit blocks
pub mod perimeter;

pub use blocks::BlockMode;
