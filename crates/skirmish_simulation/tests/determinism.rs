//! Determinism tests
//!
//! The simulation is pure bookkeeping on a fixed tick: identical setups
//! stepped identically must produce byte-identical snapshots.

use bevy::prelude::*;

use skirmish_simulation::*;

const TICK: f32 = 1.0 / 60.0;

#[test]
fn test_identical_runs_produce_identical_snapshots() {
    const TICKS: usize = 500;

    let snapshot1 = run_skirmish(TICKS);
    let snapshot2 = run_skirmish(TICKS);
    let snapshot3 = run_skirmish(TICKS);

    assert_eq!(snapshot1, snapshot2, "run 1 != run 2");
    assert_eq!(snapshot2, snapshot3, "run 2 != run 3");
}

#[test]
fn test_snapshot_captures_combat_state() {
    // Sanity: the snapshot actually changes when the fight plays out
    let before = run_skirmish(0);
    let after = run_skirmish(200);
    assert_ne!(before, after);
}

/// Run a fixed two-fighter scenario and snapshot Health + Attacker state.
fn run_skirmish(ticks: usize) -> Vec<u8> {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    let npc1 = app
        .world_mut()
        .spawn((
            Actor::named("npc-1"),
            Health::new(100.0),
            Transform::from_translation(Vec3::ZERO),
            Attacker::new(20.0, 2.0, 1.5),
        ))
        .id();
    let npc2 = app
        .world_mut()
        .spawn((
            Actor::named("npc-2"),
            Health::new(80.0),
            Transform::from_translation(Vec3::new(1.5, 0.0, 0.0)),
            Attacker::new(25.0, 2.5, 2.0),
        ))
        .id();

    for _ in 0..ticks {
        app.world_mut().send_event(AttackRequested { attacker: npc1 });
        app.world_mut().send_event(AttackRequested { attacker: npc2 });
        run_fixed_step(&mut app, TICK);
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Health>(world);
    snapshot.extend(world_snapshot::<Attacker>(world));
    snapshot
}
