//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hull condition ladder, in strictly increasing severity.
///
/// The derived `Ord` follows declaration order, so `a.max(b)` yields the
/// more severe of two conditions. Severity never decreases during an
/// encounter because hit points never increase.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ShipCondition {
    #[default]
    Healthy,
    Damaged,
    VeryDamaged,
    Sunk,
}

/// Vessel classes with distinct hull profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    /// The player's vessel.
    #[default]
    Sloop,
    /// Enemy raider.
    Corsair,
}

/// Encounter lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// No encounter started yet.
    #[default]
    Pending,
    /// Simulation advancing each tick.
    Active,
    /// Frozen; commands still queue.
    Paused,
    /// Every enemy vessel is at zero hit points.
    Victory,
    /// The player's vessel sank.
    Defeat,
}
