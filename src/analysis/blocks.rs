//! Flood discovery of lit blocks and their intensity sums

use std::collections::HashSet;

use crate::spatial::neighborhood::NEIGHBOR_OFFSETS;
use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::Coordinate;

/// Which lit tiles a block traversal may claim beyond the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// Any lit tile joins the block, colors mixed freely
    General,
    /// Only lit tiles sharing the seed's color join the block
    Homogeneous,
}

/// Collect the block of lit tiles reachable from a seed coordinate
///
/// Traversal spreads over the full eight-tile neighborhood, so diagonal
/// contact alone keeps a block connected. An absent or off seed yields an
/// empty block. Member order follows the traversal and carries no meaning.
pub fn collect_block(plane: &TilePlane, seed: Coordinate, mode: BlockMode) -> Vec<Coordinate> {
    let Some(seed_tile) = plane.get(seed).filter(|tile| tile.is_lit()) else {
        return Vec::new();
    };
    let seed_color = seed_tile.color.as_str();

    let mut visited = HashSet::from([seed]);
    let mut stack = vec![seed];
    let mut block = Vec::new();
    while let Some(coord) = stack.pop() {
        block.push(coord);
        for &[dx, dy] in &NEIGHBOR_OFFSETS {
            let next = coord.offset(dx, dy);
            let admitted = plane.get(next).is_some_and(|tile| {
                tile.is_lit()
                    && match mode {
                        BlockMode::General => true,
                        BlockMode::Homogeneous => tile.color == seed_color,
                    }
            });
            if admitted && visited.insert(next) {
                stack.push(next);
            }
        }
    }
    block
}

/// Sum of intensities over the seed's block
///
/// Zero when the seed is absent or off, the total over the whole component
/// otherwise.
pub fn block_intensity_sum(plane: &TilePlane, seed: Coordinate, mode: BlockMode) -> i64 {
    collect_block(plane, seed, mode)
        .iter()
        .filter_map(|&coord| plane.get(coord))
        .map(|tile| tile.intensity)
        .sum()
}
