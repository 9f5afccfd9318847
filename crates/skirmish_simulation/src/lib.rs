//! Skirmish Simulation Core
//!
//! Headless combat bookkeeping on Bevy ECS: health/death state for actors
//! and cooldown-gated area attacks. The host application drives the fixed
//! tick, decides *when* actors swing or get healed, and consumes the
//! resulting events and log lines. Rendering, physics and input devices
//! never enter this crate.

use bevy::prelude::*;

pub mod combat;
pub mod components;
pub mod data;
pub mod logger;

pub use combat::{
    apply_healing, resolve_attacks, tick_attack_cooldowns, AttackRequested, Attacker,
    CombatConfig, CombatPlugin, DamageDealt, Dead, DespawnAfter, EntityDied, HealRequested,
};
pub use components::*;
pub use logger::{init_logger, set_log_level, set_logger, LogLevel, LogPrinter};

/// Main simulation plugin
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz for the simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(CombatPlugin);
    }
}

/// Create a minimal Bevy App for headless simulation
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Advance the simulation by one fixed step of `dt` seconds
///
/// Drives `Time<Fixed>` directly instead of waiting for wall-clock
/// accumulation, so scenario runs and tests step deterministically.
pub fn run_fixed_step(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(std::time::Duration::from_secs_f32(dt));
    app.world_mut().run_schedule(FixedUpdate);
}

/// Byte snapshot of one component type across the world, for determinism
/// comparisons. Entities are sorted by index so iteration order cannot
/// leak into the result.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug formatting is stable for plain data components
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
