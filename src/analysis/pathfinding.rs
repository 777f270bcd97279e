//! Cheapest routes across the plane
//!
//! Path cost is the sum of intensities of every tile stepped on, endpoints
//! included. Off tiles still exist and cost nothing to cross, which makes
//! them free bridges between distant lit regions.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::spatial::neighborhood::NEIGHBOR_OFFSETS;
use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::Coordinate;

/// Frontier entry ordered for a min-heap on path cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathEntry {
    cost: i64,
    coord: Coordinate,
}

impl Ord for PathEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for PathEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum total intensity of a path between two lit tiles
///
/// Paths move through the eight-tile neighborhood and may only step on tiles
/// that exist, lit or not. Returns `None` when either endpoint is absent or
/// off, or when no chain of existing tiles connects the two. Relaxation
/// pushes duplicate frontier entries instead of reprioritizing in place;
/// entries worse than the recorded best are discarded as they surface.
pub fn min_intensity_path(plane: &TilePlane, start: Coordinate, end: Coordinate) -> Option<i64> {
    let start_tile = plane.get(start).filter(|tile| tile.is_lit())?;
    if !plane.is_lit(end) {
        return None;
    }

    let mut best = HashMap::from([(start, start_tile.intensity)]);
    let mut frontier = BinaryHeap::from([PathEntry {
        cost: start_tile.intensity,
        coord: start,
    }]);

    while let Some(PathEntry { cost, coord }) = frontier.pop() {
        if best.get(&coord).is_some_and(|&known| cost > known) {
            continue;
        }
        if coord == end {
            return Some(cost);
        }
        for &[dx, dy] in &NEIGHBOR_OFFSETS {
            let next = coord.offset(dx, dy);
            let Some(tile) = plane.get(next) else {
                continue;
            };
            let next_cost = cost + tile.intensity;
            if best.get(&next).is_none_or(|&known| next_cost < known) {
                best.insert(next, next_cost);
                frontier.push(PathEntry {
                    cost: next_cost,
                    coord: next,
                });
            }
        }
    }
    None
}
