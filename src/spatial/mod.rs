//! Spatial data structures for the sparse tile plane
//!
//! This module contains plane-related functionality including:
//! - Sparse tile storage keyed by coordinate
//! - Tile and coordinate value types
//! - Neighborhood resolution and color histograms

/// Neighborhood offsets, existing-neighbor enumeration, and color histograms
pub mod neighborhood;
/// Sparse coordinate-to-tile storage
pub mod plane;
/// Tile and coordinate value types
pub mod tiles;

pub use plane::TilePlane;
