//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset the world and start a fresh encounter.
    StartEncounter,
    /// Request a route from the player's position to a world-space point
    /// (already translated from screen space by the external camera).
    SetSail { dest: Vec2 },
    /// Fire a cannonball from `spawn` toward the tile containing `target`.
    Fire { spawn: Vec2, target: Vec2 },
    /// Freeze the simulation.
    Pause,
    /// Resume a paused encounter.
    Resume,
}
