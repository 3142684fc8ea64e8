//! Combat resolution: cannonball-vessel collisions and splash detection.
//!
//! Runs once per tick. For each unresolved cannonball, every vessel check
//! happens before the destination check, so a shot can never both hit and
//! miss within one tick, and each shot strikes at most one vessel.
//! Independent shot/vessel pairs have no ordering dependency.

use glam::Vec2;
use hecs::{Entity, World};

use broadside_chart::CostGrid;
use broadside_core::components::{CannonballId, Footprint, Hull, Position, ShotState, VesselId};
use broadside_core::constants::HIT_DAMAGE;
use broadside_core::events::CombatEvent;
use broadside_core::types::Aabb;

struct ActiveShot {
    entity: Entity,
    id: u32,
    shooter: u32,
    aabb: Aabb,
    position: Vec2,
    destination: Vec2,
}

/// Resolve all active shots against live vessels and terrain.
pub fn run(world: &mut World, chart: &CostGrid, events: &mut Vec<CombatEvent>) {
    // Collect active shots first; applying damage needs the world mutably.
    let shots: Vec<ActiveShot> = world
        .query_mut::<(&CannonballId, &Position, &Footprint, &ShotState)>()
        .into_iter()
        .filter(|(_, (_, _, _, shot))| !shot.resolved)
        .map(|(entity, (id, pos, footprint, shot))| ActiveShot {
            entity,
            id: id.0,
            shooter: shot.shooter,
            aabb: footprint.aabb(pos.0),
            position: pos.0,
            destination: shot.destination,
        })
        .collect();

    for shot in shots {
        let mut resolved = false;

        // Vessel checks come first. Sunk hulls (hp 0) are skipped, so a
        // wreck never takes damage or re-fires events.
        for (_entity, (vessel_id, pos, footprint, hull)) in
            world.query_mut::<(&VesselId, &Position, &Footprint, &mut Hull)>()
        {
            if hull.hp == 0 || vessel_id.0 == shot.shooter {
                continue;
            }
            if shot.aabb.overlaps(&footprint.aabb(pos.0)) {
                hull.hp = hull.hp.saturating_sub(HIT_DAMAGE);
                events.push(CombatEvent::Hit {
                    cannonball: shot.id,
                    vessel: vessel_id.0,
                });
                if hull.hp == 0 {
                    events.push(CombatEvent::Sunk { vessel: vessel_id.0 });
                }
                // At most one vessel per shot per tick.
                resolved = true;
                break;
            }
        }

        // Destination check only for shots that struck nothing. A splash
        // into open water is a miss; landing on scenery resolves silently.
        if !resolved && shot.position == shot.destination {
            let (col, row) = chart.tile_of(shot.position);
            if !chart.has_scenery(col, row) {
                events.push(CombatEvent::Miss { cannonball: shot.id });
            }
            resolved = true;
        }

        if resolved {
            if let Ok(mut state) = world.get::<&mut ShotState>(shot.entity) {
                state.resolved = true;
            }
        }
    }
}
