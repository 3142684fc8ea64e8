//! Snapshot builder: flattens the ECS world into the serializable view
//! handed to the frontend after each tick.

use hecs::World;

use broadside_core::components::{
    CannonballId, Condition, Heading, Hull, Position, ShotState, VesselId,
};
use broadside_core::enums::{EncounterPhase, ShipClass};
use broadside_core::events::{CombatEvent, ConditionChange};
use broadside_core::state::{CannonballView, EncounterSnapshot, VesselView};
use broadside_core::types::SimTime;

/// Build the snapshot for the current tick. Views are sorted by id;
/// ECS iteration order is not part of the contract.
pub fn build(
    world: &World,
    time: SimTime,
    phase: EncounterPhase,
    combat_events: Vec<CombatEvent>,
    condition_changes: Vec<ConditionChange>,
) -> EncounterSnapshot {
    let mut vessels: Vec<VesselView> = world
        .query::<(&VesselId, &ShipClass, &Position, &Heading, &Hull, &Condition)>()
        .iter()
        .map(|(_entity, (id, class, pos, heading, hull, condition))| VesselView {
            id: id.0,
            class: *class,
            position: pos.0,
            heading: heading.0,
            hp: hull.hp,
            condition: condition.current,
        })
        .collect();
    vessels.sort_by_key(|v| v.id);

    let mut cannonballs: Vec<CannonballView> = world
        .query::<(&CannonballId, &Position, &ShotState)>()
        .iter()
        .map(|(_entity, (id, pos, shot))| CannonballView {
            id: id.0,
            position: pos.0,
            destination: shot.destination,
        })
        .collect();
    cannonballs.sort_by_key(|c| c.id);

    EncounterSnapshot {
        time,
        phase,
        vessels,
        cannonballs,
        combat_events,
        condition_changes,
    }
}
