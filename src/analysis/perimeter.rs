//! Boundary measurement of lit blocks

use crate::analysis::blocks::{BlockMode, collect_block};
use crate::spatial::neighborhood::lit_orthogonal_count;
use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::Coordinate;

/// Perimeter of the block containing the seed coordinate
///
/// Each member of the block starts with four exposed sides and loses one per
/// lit orthogonal neighbor. Diagonal contact joins tiles into one block
/// without sharing a side, so a purely diagonal chain still exposes all four
/// sides of every tile. An absent or off seed has no block and a perimeter
/// of zero.
pub fn block_perimeter(plane: &TilePlane, seed: Coordinate) -> i64 {
    collect_block(plane, seed, BlockMode::General)
        .iter()
        .map(|&coord| 4 - lit_orthogonal_count(plane, coord))
        .sum::<usize>() as i64
}
