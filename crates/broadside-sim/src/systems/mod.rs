//! Simulation systems, run in a fixed order each tick.

pub mod cleanup;
pub mod combat;
pub mod condition;
pub mod movement;
pub mod snapshot;
