use crate::analysis::blocks::{BlockMode, block_intensity_sum};
use crate::analysis::pathfinding::min_intensity_path;
use crate::analysis::perimeter::block_perimeter;
use crate::rules::propagation::{propagate, propagate_block};
use crate::rules::registry::{RuleRegistry, Term};
use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::Coordinate;

/// A plane and its rule registry evolving together under commands
///
/// Every scripted operation maps to one method here, so the command layer
/// stays a thin parsing shell and library callers get the same behavior
/// scripts do.
#[derive(Debug, Clone, Default)]
pub struct Session {
    plane: TilePlane,
    rules: RuleRegistry,
}

impl Session {
    /// Create a session with an empty plane and no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// The current plane
    pub const fn plane(&self) -> &TilePlane {
        &self.plane
    }

    /// The current rule registry
    pub const fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Create or overwrite the tile at a coordinate
    pub fn set_tile(&mut self, coord: Coordinate, color: impl Into<String>, intensity: i64) {
        self.plane.set_tile(coord, color, intensity);
    }

    /// Turn off the tile at a coordinate, leaving absent tiles absent
    pub fn turn_off(&mut self, coord: Coordinate) {
        self.plane.turn_off(coord);
    }

    /// Color and intensity of the tile at a coordinate, if lit
    pub fn query(&self, coord: Coordinate) -> Option<(&str, i64)> {
        self.plane.query(coord)
    }

    /// Append a production rule to the end of the registry
    pub fn add_rule(&mut self, result: impl Into<String>, terms: Vec<Term>) {
        self.rules.add_rule(result, terms);
    }

    /// Apply the best matching rule to a single tile
    pub fn propagate(&mut self, coord: Coordinate) {
        propagate(&mut self.plane, &mut self.rules, coord);
    }

    /// Apply rule propagation to a whole block at once
    pub fn propagate_block(&mut self, coord: Coordinate) {
        propagate_block(&mut self.plane, &mut self.rules, coord);
    }

    /// Stably reorder the rules by ascending usage
    pub fn reorder_rules(&mut self) {
        self.rules.reorder_by_usage();
    }

    /// Intensity sum of the block containing a coordinate
    pub fn block_intensity(&self, coord: Coordinate, mode: BlockMode) -> i64 {
        block_intensity_sum(&self.plane, coord, mode)
    }

    /// Perimeter of the block containing a coordinate
    pub fn block_perimeter(&self, coord: Coordinate) -> i64 {
        block_perimeter(&self.plane, coord)
    }

    /// Minimum total intensity over paths between two lit tiles
    pub fn min_intensity_path(&self, start: Coordinate, end: Coordinate) -> Option<i64> {
        min_intensity_path(&self.plane, start, end)
    }
}
