//! Encounter snapshot: the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EncounterPhase, ShipClass, ShipCondition};
use crate::events::{CombatEvent, ConditionChange};
use crate::types::SimTime;

/// Complete encounter state handed to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub vessels: Vec<VesselView>,
    pub cannonballs: Vec<CannonballView>,
    /// Combat outcomes raised this tick (audio/scoring layer).
    pub combat_events: Vec<CombatEvent>,
    /// Condition edges raised this tick (rendering layer).
    pub condition_changes: Vec<ConditionChange>,
}

/// A vessel as visible to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselView {
    pub id: u32,
    pub class: ShipClass,
    pub position: Vec2,
    /// Unit facing vector (zero before the vessel first sails).
    pub heading: Vec2,
    pub hp: u32,
    pub condition: ShipCondition,
}

/// A cannonball in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannonballView {
    pub id: u32,
    pub position: Vec2,
    pub destination: Vec2,
}
