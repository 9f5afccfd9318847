//! Headless skirmish demo
//!
//! Loads unit specs from data/, spawns a small fight and drives fixed
//! ticks while the "host" side of the seam issues attack requests.

use bevy::prelude::*;

use skirmish_simulation::data::{load_unit_spec, spawn_unit};
use skirmish_simulation::{
    create_headless_app, run_fixed_step, Actor, AttackRequested, Attacker, CombatConfig,
    HealRequested, Health, SimulationPlugin,
};

const TICK: f32 = 1.0 / 60.0;
const TICKS: u32 = 600; // 10 seconds of simulation

fn main() -> anyhow::Result<()> {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    app.insert_resource(CombatConfig {
        corpse_lifetime: Some(5.0),
    });

    let watchman = load_unit_spec("units/watchman.json")?;
    let raider = load_unit_spec("units/raider.json")?;
    let drifter = load_unit_spec("units/drifter.json")?;

    let world = app.world_mut();
    let mut commands = world.commands();
    let watchman_id = spawn_unit(&mut commands, &watchman, Vec3::new(0.0, 0.0, 0.0));
    spawn_unit(&mut commands, &raider, Vec3::new(1.5, 0.0, 0.0));
    // Out of everyone's reach; just watches the fight
    spawn_unit(&mut commands, &drifter, Vec3::new(30.0, 0.0, 0.0));
    world.flush();

    println!("Starting skirmish ({} ticks at 60Hz)", TICKS);

    for tick in 0..TICKS {
        // Demo host: every actor swings as soon as its cooldown allows
        let mut attackers = app
            .world_mut()
            .query_filtered::<Entity, With<Attacker>>();
        let entities: Vec<Entity> = attackers.iter(app.world()).collect();
        for entity in entities {
            app.world_mut().send_event(AttackRequested { attacker: entity });
        }

        // A medkit arrives halfway through
        if tick == 300 {
            app.world_mut().send_event(HealRequested {
                target: watchman_id,
                amount: 30.0,
            });
        }

        run_fixed_step(&mut app, TICK);
    }

    println!("Skirmish over, survivors:");
    let mut roster = app.world_mut().query::<(&Actor, &Health)>();
    for (actor, health) in roster.iter(app.world()) {
        println!(
            "  {}: {:.1}/{:.1} HP ({})",
            actor.display_name,
            health.current,
            health.max,
            if health.is_alive() { "alive" } else { "dead" }
        );
    }

    Ok(())
}
