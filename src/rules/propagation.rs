use std::collections::HashMap;

use crate::analysis::blocks::{BlockMode, collect_block};
use crate::io::configuration;
use crate::rules::registry::RuleRegistry;
use crate::spatial::neighborhood::color_histogram;
use crate::spatial::plane::TilePlane;
use crate::spatial::tiles::Coordinate;

/// Apply the best matching rule to a single tile
///
/// Builds the color histogram of the tile's existing neighbors, selects the
/// first matching rule, and recolors the tile with the rule's result. An
/// existing tile keeps its intensity, lit or not; a tile that does not exist
/// yet is created lit with the spawn intensity. Without a matching rule the
/// plane is left untouched.
pub fn propagate(plane: &mut TilePlane, rules: &mut RuleRegistry, coord: Coordinate) {
    let histogram = color_histogram(plane, coord);
    let Some(rule) = rules.select(&histogram) else {
        return;
    };
    let result = rule.result().to_owned();
    if !plane.recolor(coord, &result) {
        plane.set_tile(coord, result, configuration::SPAWN_INTENSITY);
    }
}

/// Apply rule propagation to every tile of a block at once
///
/// The block is the maximal lit component reachable from `coord`, colors
/// mixed freely. Matching runs first for every member against the plane as
/// it stood before the call; the recolorings are then committed together, so
/// no member observes another member's new color. A coordinate without a
/// tile yields no block at all, and an off tile an empty one; either way the
/// call is a no-op.
pub fn propagate_block(plane: &mut TilePlane, rules: &mut RuleRegistry, coord: Coordinate) {
    if !plane.contains(coord) {
        return;
    }
    let block = collect_block(plane, coord, BlockMode::General);
    let mut pending: HashMap<Coordinate, String> = HashMap::new();
    for member in &block {
        let histogram = color_histogram(plane, *member);
        if let Some(rule) = rules.select(&histogram) {
            pending.insert(*member, rule.result().to_owned());
        }
    }
    for (member, result) in pending {
        plane.recolor(member, &result);
    }
}
