#[cfg(test)]
mod tests {
    use glam::Vec2;

    use broadside_chart::{CostGrid, TileLayer};
    use broadside_core::commands::PlayerCommand;
    use broadside_core::components::{Hull, OwnShip};
    use broadside_core::constants::DEFAULT_TILE_SIZE;
    use broadside_core::enums::{EncounterPhase, ShipClass, ShipCondition};
    use broadside_core::events::CombatEvent;
    use broadside_core::state::{EncounterSnapshot, VesselView};

    use crate::{SimConfig, SimulationEngine};

    fn open_chart(spawns: Vec<Vec2>) -> CostGrid {
        CostGrid::from_layers(10, 10, DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE, &[], spawns)
    }

    fn engine(chart: CostGrid, player_start: Vec2, pirate_count: usize) -> SimulationEngine {
        SimulationEngine::new(
            chart,
            SimConfig {
                seed: 7,
                player_start,
                pirate_count,
            },
        )
    }

    /// Queue the start command and run the first tick.
    fn start(engine: &mut SimulationEngine) -> EncounterSnapshot {
        engine.queue_command(PlayerCommand::StartEncounter);
        engine.tick()
    }

    fn run_ticks(engine: &mut SimulationEngine, n: usize) -> Vec<EncounterSnapshot> {
        (0..n).map(|_| engine.tick()).collect()
    }

    fn player<'a>(snapshot: &'a EncounterSnapshot) -> &'a VesselView {
        snapshot
            .vessels
            .iter()
            .find(|v| v.class == ShipClass::Sloop)
            .expect("player vessel missing from snapshot")
    }

    fn count_hits(snapshots: &[EncounterSnapshot]) -> usize {
        snapshots
            .iter()
            .flat_map(|s| &s.combat_events)
            .filter(|e| matches!(e, CombatEvent::Hit { .. }))
            .count()
    }

    fn count_misses(snapshots: &[EncounterSnapshot]) -> usize {
        snapshots
            .iter()
            .flat_map(|s| &s.combat_events)
            .filter(|e| matches!(e, CombatEvent::Miss { .. }))
            .count()
    }

    fn count_sunk(snapshots: &[EncounterSnapshot]) -> usize {
        snapshots
            .iter()
            .flat_map(|s| &s.combat_events)
            .filter(|e| matches!(e, CombatEvent::Sunk { .. }))
            .count()
    }

    /// Two engines with the same seed, chart, and command stream must
    /// produce identical snapshots tick for tick.
    #[test]
    fn test_determinism_same_seed() {
        let spawns: Vec<Vec2> = (0..8)
            .map(|i| Vec2::new(64.0 + 128.0 * i as f32, 1216.0))
            .collect();

        let run = || {
            let mut eng = engine(open_chart(spawns.clone()), Vec2::new(64.0, 64.0), 5);
            let mut snapshots = vec![start(&mut eng)];
            eng.queue_command(PlayerCommand::SetSail {
                dest: Vec2::new(448.0, 64.0),
            });
            eng.queue_command(PlayerCommand::Fire {
                spawn: Vec2::new(64.0, 64.0),
                target: Vec2::new(448.0, 448.0),
            });
            snapshots.extend(run_ticks(&mut eng, 90));
            snapshots
        };

        let a = run();
        let b = run();
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(&b) {
            let ja = serde_json::to_string(sa).unwrap();
            let jb = serde_json::to_string(sb).unwrap();
            assert_eq!(ja, jb);
        }
    }

    /// Different seeds sample different spawn assignments.
    #[test]
    fn test_different_seeds_diverge() {
        let spawns: Vec<Vec2> = (0..12)
            .map(|i| Vec2::new(64.0 + 128.0 * (i % 10) as f32, 1216.0 - 128.0 * (i / 10) as f32))
            .collect();

        let first_snapshot = |seed: u64| {
            let mut eng = SimulationEngine::new(
                open_chart(spawns.clone()),
                SimConfig {
                    seed,
                    player_start: Vec2::new(64.0, 64.0),
                    pirate_count: 5,
                },
            );
            serde_json::to_string(&start(&mut eng)).unwrap()
        };

        assert_ne!(first_snapshot(1), first_snapshot(2));
    }

    #[test]
    fn test_pirates_spawn_on_chart_spawn_points() {
        let spawns: Vec<Vec2> = (0..8)
            .map(|i| Vec2::new(64.0 + 128.0 * i as f32, 1216.0))
            .collect();
        let mut eng = engine(open_chart(spawns.clone()), Vec2::new(64.0, 64.0), 5);
        let snapshot = start(&mut eng);

        let pirates: Vec<&VesselView> = snapshot
            .vessels
            .iter()
            .filter(|v| v.class == ShipClass::Corsair)
            .collect();
        assert_eq!(pirates.len(), 5);
        for pirate in &pirates {
            assert!(
                spawns.contains(&pirate.position),
                "pirate at {:?} is not on a spawn point",
                pirate.position
            );
        }
        // Distinct spawn points, so no two pirates share a position.
        for (i, a) in pirates.iter().enumerate() {
            for b in &pirates[i + 1..] {
                assert_ne!(a.position, b.position);
            }
        }
    }

    #[test]
    fn test_pirate_count_limited_by_spawn_points() {
        let spawns = vec![
            Vec2::new(64.0, 1216.0),
            Vec2::new(192.0, 1216.0),
            Vec2::new(320.0, 1216.0),
        ];
        let mut eng = engine(open_chart(spawns), Vec2::new(64.0, 64.0), 5);
        let snapshot = start(&mut eng);
        let pirates = snapshot
            .vessels
            .iter()
            .filter(|v| v.class == ShipClass::Corsair)
            .count();
        assert_eq!(pirates, 3);
    }

    #[test]
    fn test_snapshot_vessels_sorted_by_id() {
        let spawns: Vec<Vec2> = (0..8)
            .map(|i| Vec2::new(64.0 + 128.0 * i as f32, 1216.0))
            .collect();
        let mut eng = engine(open_chart(spawns), Vec2::new(64.0, 64.0), 5);
        let snapshot = start(&mut eng);
        let ids: Vec<u32> = snapshot.vessels.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    /// The final approach snaps exactly onto the destination tile center.
    #[test]
    fn test_sail_arrives_exactly_on_tile_center() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(64.0, 64.0), 0);
        start(&mut eng);
        // Anywhere inside tile (3,0) routes to its center.
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(470.0, 70.0),
        });
        let snapshots = run_ticks(&mut eng, 60);
        let last = snapshots.last().unwrap();
        assert_eq!(player(last).position, Vec2::new(448.0, 64.0));
    }

    #[test]
    fn test_sail_to_impassable_destination_holds_position() {
        let layers = vec![TileLayer {
            cost: 2,
            scenery: false,
            cells: vec![(5, 5)],
        }];
        let chart = CostGrid::from_layers(
            10,
            10,
            DEFAULT_TILE_SIZE,
            DEFAULT_TILE_SIZE,
            &layers,
            Vec::new(),
        );
        let mut eng = engine(chart, Vec2::new(64.0, 64.0), 0);
        start(&mut eng);
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(704.0, 704.0),
        });
        let snapshots = run_ticks(&mut eng, 10);
        let last = snapshots.last().unwrap();
        assert_eq!(player(last).position, Vec2::new(64.0, 64.0));
    }

    /// A new sail order replaces the current route entirely.
    #[test]
    fn test_new_sail_order_supersedes_route() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(64.0, 64.0), 0);
        start(&mut eng);
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(704.0, 64.0),
        });
        run_ticks(&mut eng, 3);
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(64.0, 448.0),
        });
        let snapshots = run_ticks(&mut eng, 80);
        let last = snapshots.last().unwrap();
        assert_eq!(player(last).position, Vec2::new(64.0, 448.0));
    }

    /// A shot resolved in tick N is gone from tick N's snapshot and never
    /// evaluated again.
    #[test]
    fn test_hit_despawns_cannonball_in_same_tick() {
        let mut eng = engine(open_chart(vec![Vec2::new(448.0, 448.0)]), Vec2::new(64.0, 64.0), 1);
        start(&mut eng);
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::new(64.0, 64.0),
            target: Vec2::new(448.0, 448.0),
        });
        let snapshots = run_ticks(&mut eng, 120);

        let hit_tick = snapshots
            .iter()
            .find(|s| s.combat_events.iter().any(|e| matches!(e, CombatEvent::Hit { .. })))
            .expect("cannonball never struck the pirate");
        assert!(hit_tick.cannonballs.is_empty());

        let pirate = hit_tick
            .vessels
            .iter()
            .find(|v| v.class == ShipClass::Corsair)
            .unwrap();
        assert_eq!(pirate.hp, 9);
        assert_eq!(pirate.condition, ShipCondition::Healthy);

        // One shot, one outcome.
        assert_eq!(count_hits(&snapshots), 1);
        assert_eq!(count_misses(&snapshots), 0);
    }

    /// Ten simultaneous hits sink the vessel: ten Hit events, exactly one
    /// Sunk event, and a single Healthy -> Sunk condition edge. Shots fired
    /// at the wreck afterwards pass through and splash.
    #[test]
    fn test_sinking_emits_single_sunk_event_and_wrecks_are_ignored() {
        let spawns = vec![Vec2::new(448.0, 448.0), Vec2::new(1216.0, 1216.0)];
        let mut eng = engine(open_chart(spawns), Vec2::new(64.0, 64.0), 2);
        start(&mut eng);
        for _ in 0..10 {
            eng.queue_command(PlayerCommand::Fire {
                spawn: Vec2::new(64.0, 64.0),
                target: Vec2::new(448.0, 448.0),
            });
        }
        let snapshots = run_ticks(&mut eng, 120);

        assert_eq!(count_hits(&snapshots), 10);
        assert_eq!(count_sunk(&snapshots), 1);

        let edges: Vec<_> = snapshots
            .iter()
            .flat_map(|s| &s.condition_changes)
            .collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, ShipCondition::Healthy);
        assert_eq!(edges[0].to, ShipCondition::Sunk);

        // The other pirate is still afloat, so the encounter continues and
        // the wreck stays visible.
        let last = snapshots.last().unwrap();
        assert_eq!(last.phase, EncounterPhase::Active);
        let wreck = last
            .vessels
            .iter()
            .find(|v| v.position == Vec2::new(448.0, 448.0))
            .unwrap();
        assert_eq!(wreck.hp, 0);
        assert_eq!(wreck.condition, ShipCondition::Sunk);

        // A shot at the wreck strikes nothing and splashes on its tile.
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::new(64.0, 64.0),
            target: Vec2::new(448.0, 448.0),
        });
        let after = run_ticks(&mut eng, 120);
        assert_eq!(count_hits(&after), 0);
        assert_eq!(count_sunk(&after), 0);
        assert_eq!(count_misses(&after), 1);
    }

    /// Repeated evaluation at the same condition raises no further edges.
    #[test]
    fn test_condition_edge_fires_once() {
        let mut eng = engine(open_chart(vec![Vec2::new(448.0, 448.0)]), Vec2::new(64.0, 64.0), 1);
        start(&mut eng);
        for _ in 0..4 {
            eng.queue_command(PlayerCommand::Fire {
                spawn: Vec2::new(64.0, 64.0),
                target: Vec2::new(448.0, 448.0),
            });
        }
        let snapshots = run_ticks(&mut eng, 120);

        assert_eq!(count_hits(&snapshots), 4);
        let edges: Vec<_> = snapshots
            .iter()
            .flat_map(|s| &s.condition_changes)
            .collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, ShipCondition::Healthy);
        assert_eq!(edges[0].to, ShipCondition::Damaged);

        let last = snapshots.last().unwrap();
        let pirate = last
            .vessels
            .iter()
            .find(|v| v.class == ShipClass::Corsair)
            .unwrap();
        assert_eq!(pirate.hp, 6);
        assert_eq!(pirate.condition, ShipCondition::Damaged);
    }

    /// A shot that reaches open water without striking anything misses
    /// exactly once and is removed.
    #[test]
    fn test_miss_on_open_water() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(1216.0, 1216.0), 0);
        start(&mut eng);
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::ZERO,
            target: Vec2::new(500.0, 500.0),
        });
        let snapshots = run_ticks(&mut eng, 120);

        assert_eq!(count_misses(&snapshots), 1);
        assert_eq!(count_hits(&snapshots), 0);
        let last = snapshots.last().unwrap();
        assert!(last.cannonballs.is_empty());
        assert_eq!(last.phase, EncounterPhase::Active);
    }

    /// Landing on scenery resolves the shot with no event at all.
    #[test]
    fn test_shot_landing_on_scenery_resolves_silently() {
        let layers = vec![TileLayer {
            cost: 2,
            scenery: true,
            cells: vec![(4, 4)],
        }];
        let chart = CostGrid::from_layers(
            10,
            10,
            DEFAULT_TILE_SIZE,
            DEFAULT_TILE_SIZE,
            &layers,
            Vec::new(),
        );
        let mut eng = engine(chart, Vec2::new(1216.0, 1216.0), 0);
        start(&mut eng);
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::new(64.0, 64.0),
            target: Vec2::new(576.0, 576.0),
        });
        let snapshots = run_ticks(&mut eng, 120);

        assert_eq!(count_misses(&snapshots), 0);
        assert_eq!(count_hits(&snapshots), 0);
        assert!(snapshots.last().unwrap().cannonballs.is_empty());
    }

    /// A shot overlapping a vessel on the tick it also reaches its
    /// destination hits; it never both hits and misses.
    #[test]
    fn test_hit_wins_over_miss_at_destination() {
        let mut eng = engine(open_chart(vec![Vec2::new(448.0, 448.0)]), Vec2::new(64.0, 1216.0), 1);
        start(&mut eng);
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::new(448.0, 448.0),
            target: Vec2::new(448.0, 448.0),
        });
        let snapshot = eng.tick();

        assert_eq!(
            snapshot
                .combat_events
                .iter()
                .filter(|e| matches!(e, CombatEvent::Hit { .. }))
                .count(),
            1
        );
        assert!(!snapshot
            .combat_events
            .iter()
            .any(|e| matches!(e, CombatEvent::Miss { .. })));
    }

    #[test]
    fn test_victory_when_all_pirates_sunk() {
        let mut eng = engine(open_chart(vec![Vec2::new(448.0, 448.0)]), Vec2::new(64.0, 64.0), 1);
        start(&mut eng);
        for _ in 0..10 {
            eng.queue_command(PlayerCommand::Fire {
                spawn: Vec2::new(64.0, 64.0),
                target: Vec2::new(448.0, 448.0),
            });
        }
        let snapshots = run_ticks(&mut eng, 120);

        let victory_tick = snapshots
            .iter()
            .find(|s| s.phase == EncounterPhase::Victory)
            .expect("encounter never reached victory");
        // Victory is declared on the tick the last pirate sinks.
        assert!(victory_tick
            .combat_events
            .iter()
            .any(|e| matches!(e, CombatEvent::Sunk { .. })));

        // A resolved encounter stops advancing and ignores sail orders.
        let frozen = eng.time().tick;
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(704.0, 64.0),
        });
        let after = run_ticks(&mut eng, 5);
        assert_eq!(eng.time().tick, frozen);
        assert_eq!(after.last().unwrap().phase, EncounterPhase::Victory);
    }

    /// An encounter with no pirates never resolves to victory.
    #[test]
    fn test_no_victory_without_pirates() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(64.0, 64.0), 0);
        start(&mut eng);
        let snapshots = run_ticks(&mut eng, 10);
        assert_eq!(snapshots.last().unwrap().phase, EncounterPhase::Active);
    }

    #[test]
    fn test_defeat_when_player_sunk() {
        let mut eng = engine(open_chart(vec![Vec2::new(448.0, 448.0)]), Vec2::new(64.0, 64.0), 1);
        start(&mut eng);

        for (_entity, (hull, _own)) in eng.world_mut().query_mut::<(&mut Hull, &OwnShip)>() {
            hull.hp = 0;
        }
        let snapshot = eng.tick();

        assert_eq!(snapshot.phase, EncounterPhase::Defeat);
        assert!(snapshot
            .condition_changes
            .iter()
            .any(|c| c.from == ShipCondition::Healthy && c.to == ShipCondition::Sunk));
    }

    /// Pausing freezes the clock and the world; resuming picks both up.
    #[test]
    fn test_pause_gates_the_clock() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(64.0, 64.0), 0);
        start(&mut eng);
        eng.tick();
        assert_eq!(eng.time().tick, 2);

        eng.queue_command(PlayerCommand::Pause);
        let paused = eng.tick();
        assert_eq!(paused.phase, EncounterPhase::Paused);
        assert_eq!(eng.time().tick, 2);
        eng.tick();
        assert_eq!(eng.time().tick, 2);

        eng.queue_command(PlayerCommand::Resume);
        let resumed = eng.tick();
        assert_eq!(resumed.phase, EncounterPhase::Active);
        assert_eq!(eng.time().tick, 3);
    }

    /// Before the encounter starts, gameplay commands are dropped.
    #[test]
    fn test_commands_ignored_before_start() {
        let mut eng = engine(open_chart(Vec::new()), Vec2::new(64.0, 64.0), 0);
        eng.queue_command(PlayerCommand::Fire {
            spawn: Vec2::new(64.0, 64.0),
            target: Vec2::new(448.0, 448.0),
        });
        eng.queue_command(PlayerCommand::SetSail {
            dest: Vec2::new(448.0, 64.0),
        });
        let snapshot = eng.tick();

        assert_eq!(snapshot.phase, EncounterPhase::Pending);
        assert!(snapshot.vessels.is_empty());
        assert!(snapshot.cannonballs.is_empty());
        assert_eq!(snapshot.time.tick, 0);
    }
}
