//! Simulation engine for Broadside.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces `EncounterSnapshot`s for the frontend layers.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
