//! The simulation engine: fixed-tick loop over the ECS world.
//!
//! Each call to [`SimulationEngine::tick`] drains queued player commands,
//! runs the systems in a fixed order, advances simulation time, checks the
//! encounter outcome, and returns a snapshot of the resulting state.

use std::collections::VecDeque;
use std::mem;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use broadside_chart::CostGrid;
use broadside_core::commands::PlayerCommand;
use broadside_core::components::{
    Condition, Heading, Hull, NavRoute, OwnShip, Pirate, Position, VesselId,
};
use broadside_core::constants::{PIRATE_COUNT, PLAYER_START_X, PLAYER_START_Y};
use broadside_core::enums::{EncounterPhase, ShipCondition};
use broadside_core::events::{CombatEvent, ConditionChange};
use broadside_core::state::EncounterSnapshot;
use broadside_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Encounter parameters. The seed fully determines spawn sampling, so two
/// engines with equal configs and equal command streams stay in lockstep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
    pub player_start: Vec2,
    pub pirate_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            pirate_count: PIRATE_COUNT,
        }
    }
}

/// Owns the world, the chart, and all per-encounter bookkeeping.
pub struct SimulationEngine {
    world: World,
    chart: CostGrid,
    config: SimConfig,
    time: SimTime,
    phase: EncounterPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    combat_events: Vec<CombatEvent>,
    condition_changes: Vec<ConditionChange>,
    next_vessel_id: u32,
    next_cannonball_id: u32,
}

impl SimulationEngine {
    pub fn new(chart: CostGrid, config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            world: World::new(),
            chart,
            config,
            time: SimTime::default(),
            phase: EncounterPhase::Pending,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            combat_events: Vec::new(),
            condition_changes: Vec::new(),
            next_vessel_id: 0,
            next_cannonball_id: 0,
        }
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed step and snapshot the result.
    ///
    /// Commands are applied first, so a command queued before tick N is
    /// visible in tick N's snapshot. Paused and pending encounters still
    /// produce snapshots but the world and clock do not advance.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            self.run_systems();
            self.time.advance();
            self.check_outcome();
        }

        let combat_events = mem::take(&mut self.combat_events);
        let condition_changes = mem::take(&mut self.condition_changes);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            combat_events,
            condition_changes,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartEncounter => {
                self.world = World::new();
                self.time = SimTime::default();
                self.next_vessel_id = 0;
                self.next_cannonball_id = 0;
                self.combat_events.clear();
                self.condition_changes.clear();
                world_setup::setup_encounter(
                    &mut self.world,
                    &self.chart,
                    &mut self.rng,
                    &self.config,
                    &mut self.next_vessel_id,
                );
                self.phase = EncounterPhase::Active;
            }
            PlayerCommand::SetSail { dest } => {
                if self.phase != EncounterPhase::Active {
                    return;
                }
                self.handle_set_sail(dest);
            }
            PlayerCommand::Fire { spawn, target } => {
                if self.phase != EncounterPhase::Active {
                    return;
                }
                self.handle_fire(spawn, target);
            }
            PlayerCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
        }
    }

    /// Resolve a route for the player vessel. An unreachable or invalid
    /// destination yields an empty route, which clears any current one.
    fn handle_set_sail(&mut self, dest: Vec2) {
        let player = self
            .world
            .query_mut::<(&Position, &OwnShip)>()
            .into_iter()
            .next()
            .map(|(entity, (pos, _))| (entity, pos.0));
        let Some((entity, position)) = player else {
            return;
        };

        let route = broadside_nav::resolve(position, dest, &self.chart);
        let first = route.current_target();

        if let Ok(mut nav) = self.world.get::<&mut NavRoute>(entity) {
            nav.0 = route;
        }
        if let Some(target) = first {
            if let Ok(mut heading) = self.world.get::<&mut Heading>(entity) {
                let to_target = target - position;
                if to_target != Vec2::ZERO {
                    heading.0 = to_target.normalize_or_zero();
                }
            }
        }
    }

    /// Spawn a cannonball from the player toward the center of the tile
    /// under `target`.
    fn handle_fire(&mut self, spawn: Vec2, target: Vec2) {
        let shooter = self
            .world
            .query_mut::<(&VesselId, &OwnShip)>()
            .into_iter()
            .next()
            .map(|(_, (id, _))| id.0);
        let Some(shooter) = shooter else {
            return;
        };

        let (col, row) = self.chart.tile_of(target);
        let destination = self.chart.world_of(col, row);
        world_setup::spawn_cannonball(
            &mut self.world,
            &mut self.next_cannonball_id,
            spawn,
            destination,
            shooter,
        );
    }

    /// Fixed system order. Combat runs after flight so a shot that reaches
    /// a vessel and a shot that reaches its splash point resolve in the
    /// tick they arrive; cleanup runs last so resolved shots never survive
    /// into the next tick.
    fn run_systems(&mut self) {
        // 1. Vessel kinematics.
        systems::movement::run(&mut self.world);
        // 2. Cannonball flight.
        systems::movement::advance_cannonballs(&mut self.world);
        // 3. Collision and splash resolution.
        systems::combat::run(&mut self.world, &self.chart, &mut self.combat_events);
        // 4. Damage FSM and transition edges.
        systems::condition::run(&mut self.world, &mut self.condition_changes);
        // 5. Despawn resolved shots.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Victory once every pirate is sunk, defeat once the player is.
    /// Defeat wins ties. An encounter with no pirates never resolves to
    /// victory.
    fn check_outcome(&mut self) {
        let mut pirates = 0usize;
        let mut afloat = 0usize;
        for (_entity, (hull, _)) in self.world.query_mut::<(&Hull, &Pirate)>() {
            pirates += 1;
            if hull.hp > 0 {
                afloat += 1;
            }
        }

        let player_sunk = self
            .world
            .query_mut::<(&Condition, &OwnShip)>()
            .into_iter()
            .next()
            .map(|(_, (condition, _))| condition.current == ShipCondition::Sunk)
            .unwrap_or(false);

        if player_sunk {
            self.phase = EncounterPhase::Defeat;
        } else if pirates > 0 && afloat == 0 {
            self.phase = EncounterPhase::Victory;
        }
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn chart(&self) -> &CostGrid {
        &self.chart
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
