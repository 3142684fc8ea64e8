//! Route resolution over the chart's cost grid.
//!
//! Converts a world-space click into an ordered route of tile-center
//! waypoints via a greedy-directed grid search. Deliberately not a
//! shortest-path solver; see the `search` module notes.

mod search;

pub use search::{resolve, try_resolve, NavError};
