//! Entity spawn factories for setting up the encounter world.
//!
//! Creates the player vessel, enemy vessels on chart spawn points, and
//! cannonballs with appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use broadside_chart::CostGrid;
use broadside_core::components::*;
use broadside_core::constants::CANNONBALL_EXTENT;
use broadside_core::enums::ShipClass;
use broadside_damage::profiles::get_profile;

use crate::engine::SimConfig;

/// Set up the initial encounter world: the player vessel plus enemy
/// vessels sampled from the chart's spawn points.
pub fn setup_encounter(
    world: &mut World,
    chart: &CostGrid,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_vessel_id: &mut u32,
) {
    spawn_player(world, next_vessel_id, config.player_start);
    spawn_pirates(world, chart, rng, next_vessel_id, config.pirate_count);
}

/// Spawn the player's vessel.
pub fn spawn_player(world: &mut World, next_vessel_id: &mut u32, start: Vec2) -> hecs::Entity {
    let profile = get_profile(ShipClass::Sloop);
    let id = *next_vessel_id;
    *next_vessel_id += 1;
    world.spawn((
        OwnShip,
        VesselId(id),
        ShipClass::Sloop,
        Position(start),
        Heading::default(),
        NavRoute::default(),
        Hull {
            hp: profile.initial_hp,
        },
        Condition::default(),
        Footprint {
            width: profile.footprint_w,
            height: profile.footprint_h,
        },
    ))
}

/// Spawn one enemy vessel.
pub fn spawn_pirate(world: &mut World, next_vessel_id: &mut u32, position: Vec2) -> hecs::Entity {
    let profile = get_profile(ShipClass::Corsair);
    let id = *next_vessel_id;
    *next_vessel_id += 1;
    world.spawn((
        Pirate,
        VesselId(id),
        ShipClass::Corsair,
        Position(position),
        Heading::default(),
        NavRoute::default(),
        Hull {
            hp: profile.initial_hp,
        },
        Condition::default(),
        Footprint {
            width: profile.footprint_w,
            height: profile.footprint_h,
        },
    ))
}

/// Spawn enemy vessels on distinct spawn points sampled with the seeded
/// RNG. Spawns fewer than `count` when the chart offers fewer points.
pub fn spawn_pirates(
    world: &mut World,
    chart: &CostGrid,
    rng: &mut ChaCha8Rng,
    next_vessel_id: &mut u32,
    count: usize,
) {
    let chosen: Vec<Vec2> = chart
        .spawns()
        .choose_multiple(rng, count)
        .copied()
        .collect();
    for position in chosen {
        spawn_pirate(world, next_vessel_id, position);
    }
}

/// Spawn a cannonball in flight from `spawn` toward a tile-centered
/// destination.
pub fn spawn_cannonball(
    world: &mut World,
    next_cannonball_id: &mut u32,
    spawn: Vec2,
    destination: Vec2,
    shooter: u32,
) -> hecs::Entity {
    let id = *next_cannonball_id;
    *next_cannonball_id += 1;
    world.spawn((
        Cannonball,
        CannonballId(id),
        Position(spawn),
        Footprint {
            width: CANNONBALL_EXTENT,
            height: CANNONBALL_EXTENT,
        },
        ShotState {
            destination,
            shooter,
            resolved: false,
        },
    ))
}
