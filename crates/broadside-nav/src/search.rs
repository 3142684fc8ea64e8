//! Greedy-directed grid search.
//!
//! Breadth-first expansion over 4-connected sailable tiles, restricted by a
//! greedy admission rule: a neighbor is only entered if its Chebyshev
//! distance to the destination tile does not exceed the current tile's.
//! This converges monotonically and terminates without a visited-set bound,
//! but it is NOT a shortest-path search: layouts that force the route to
//! move farther from the destination (pockets opening away from it) are
//! reported unreachable even though a connecting path exists. That trade is
//! intentional; replacing it with Dijkstra/A* would change routing behavior
//! and must not be done silently.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;
use thiserror::Error;

use broadside_chart::CostGrid;
use broadside_core::types::Route;

/// Expected, recoverable navigation failures. Callers treat both as
/// "stay put" by using the empty route from [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    /// The destination tile itself is impassable or off the chart.
    #[error("destination tile is not sailable")]
    InvalidDestination,
    /// The frontier was exhausted without reaching the destination.
    #[error("no admissible route to the destination")]
    Unreachable,
}

/// Expansion order: up, left, down, right.
const NEIGHBORS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Resolve the route needed to reach a destination point.
///
/// Recoverable failures collapse to an empty route, which callers must
/// treat as "no movement requested", never as a fatal error.
pub fn resolve(start: Vec2, dest: Vec2, grid: &CostGrid) -> Route {
    try_resolve(start, dest, grid).unwrap_or_default()
}

/// Like [`resolve`], but surfaces why no route was produced.
///
/// The returned route steps exactly one tile at a time, starts at the
/// center of the start tile, and ends at the center of the destination
/// tile.
pub fn try_resolve(start: Vec2, dest: Vec2, grid: &CostGrid) -> Result<Route, NavError> {
    let start_tile = grid.tile_of(start);
    let dest_tile = grid.tile_of(dest);

    if !grid.sailable(dest_tile.0, dest_tile.1) {
        return Err(NavError::InvalidDestination);
    }

    if start_tile == dest_tile {
        return Ok(Route::new(vec![grid.world_of(dest_tile.0, dest_tile.1)]));
    }

    // Predecessor map doubling as the visited set; first discovery wins.
    let mut came_from: HashMap<(i32, i32), (i32, i32)> = HashMap::new();
    came_from.insert(start_tile, start_tile);

    let mut frontier: VecDeque<(i32, i32)> = VecDeque::new();
    frontier.push_back(start_tile);

    let mut found = false;
    'search: while let Some(current) = frontier.pop_front() {
        let reach = chebyshev(current, dest_tile);
        for (dx, dy) in NEIGHBORS {
            let next = (current.0 + dx, current.1 + dy);
            if came_from.contains_key(&next) {
                continue;
            }
            if !grid.sailable(next.0, next.1) {
                continue;
            }
            // Greedy admission: never step farther from the destination.
            if chebyshev(next, dest_tile) > reach {
                continue;
            }
            came_from.insert(next, current);
            if next == dest_tile {
                found = true;
                break 'search;
            }
            frontier.push_back(next);
        }
    }

    if !found {
        return Err(NavError::Unreachable);
    }

    // Walk predecessors back to the start, then reverse.
    let mut tiles = vec![dest_tile];
    let mut current = dest_tile;
    while current != start_tile {
        current = came_from[&current];
        tiles.push(current);
    }
    tiles.reverse();

    Ok(Route::new(
        tiles
            .into_iter()
            .map(|(col, row)| grid.world_of(col, row))
            .collect(),
    ))
}

fn chebyshev(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}
