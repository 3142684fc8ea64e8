//! Kinematics: vessels following their routes and cannonballs in flight.

use glam::Vec2;
use hecs::World;

use broadside_core::components::{Heading, Hull, NavRoute, Position, ShotState};
use broadside_core::constants::{
    ARRIVAL_RADIUS_FACTOR, CANNONBALL_APPROACH_RATE, CANNONBALL_SNAP_EPSILON, DT,
};
use broadside_core::enums::ShipClass;
use broadside_damage::profiles::get_profile;

/// Advance every vessel along its route at its class speed.
///
/// Waypoint 0 is the current target. Within the arrival radius the vessel
/// snaps onto the waypoint and pops it, immediately facing the next one.
/// Sunk hulls hold position.
pub fn run(world: &mut World) {
    for (_entity, (pos, heading, route, class, hull)) in
        world.query_mut::<(&mut Position, &mut Heading, &mut NavRoute, &ShipClass, &Hull)>()
    {
        if hull.hp == 0 {
            continue;
        }
        let Some(target) = route.0.current_target() else {
            continue;
        };

        let to_target = target - pos.0;
        if to_target != Vec2::ZERO {
            heading.0 = to_target.normalize_or_zero();
        }

        let profile = get_profile(*class);
        let arrival_radius = profile.sail_speed * ARRIVAL_RADIUS_FACTOR;
        if to_target.length() < arrival_radius {
            pos.0 = target;
            route.0.advance();
            if let Some(next) = route.0.current_target() {
                heading.0 = (next - pos.0).normalize_or_zero();
            }
            continue;
        }

        pos.0 += heading.0 * profile.sail_speed * DT;
    }
}

/// Advance every unresolved cannonball by exponential approach toward its
/// destination, with a per-axis snap clamp so shots land exactly on the
/// destination point.
pub fn advance_cannonballs(world: &mut World) {
    for (_entity, (pos, shot)) in world.query_mut::<(&mut Position, &mut ShotState)>() {
        if shot.resolved {
            continue;
        }

        pos.0 += (shot.destination - pos.0) * CANNONBALL_APPROACH_RATE * DT;

        if (shot.destination.x - pos.0.x).abs() < CANNONBALL_SNAP_EPSILON {
            pos.0.x = shot.destination.x;
        }
        if (shot.destination.y - pos.0.y).abs() < CANNONBALL_SNAP_EPSILON {
            pos.0.y = shot.destination.y;
        }
    }
}
