//! Events emitted by the simulation for the audio, scoring, and rendering
//! layers. The simulation only emits; playing cues, tallying score, and
//! swapping sprites are the consumers' jobs.

use serde::{Deserialize, Serialize};

use crate::enums::ShipCondition;

/// Combat outcomes for the external audio/scoring layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A cannonball struck a vessel.
    Hit { cannonball: u32, vessel: u32 },
    /// A cannonball reached open water without striking anything.
    Miss { cannonball: u32 },
    /// A hit reduced the vessel to exactly zero hit points.
    Sunk { vessel: u32 },
}

/// Condition edge for the rendering layer. Fires exactly once per
/// transition and is the sole signal to swap the displayed sprite frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionChange {
    pub vessel: u32,
    pub from: ShipCondition,
    pub to: ShipCondition,
}
