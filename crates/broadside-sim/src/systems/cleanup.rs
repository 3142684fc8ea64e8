//! Cleanup system: removes resolved cannonballs from the world.

use hecs::{Entity, World};

use broadside_core::components::{Cannonball, ShotState};

/// Despawn every resolved shot. Runs after combat within the same tick, so
/// a shot resolved in tick N is never evaluated in tick N+1.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (shot, _ball)) in world.query_mut::<(&ShotState, &Cannonball)>() {
        if shot.resolved {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
