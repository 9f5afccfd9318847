//! Combat systems module
//!
//! Simulation responsibility:
//! - Game state: Health, Attacker cooldowns
//! - Combat rules: radius scan, damage application, death transition
//! - Events: DamageDealt, EntityDied
//!
//! Host responsibility (out of scope here):
//! - Deciding when to attack/heal (input, AI) → AttackRequested, HealRequested
//! - Rendering, animation, physics

use bevy::prelude::*;

pub mod attack;
pub mod attacker;
pub mod damage;
pub mod healing;

pub use attack::{resolve_attacks, AttackRequested};
pub use attacker::{tick_attack_cooldowns, Attacker};
pub use damage::{despawn_after_timeout, mark_dead, DamageDealt, Dead, DespawnAfter, EntityDied};
pub use healing::{apply_healing, HealRequested};

/// Combat tuning owned by the host
#[derive(Resource, Debug, Clone, Default)]
pub struct CombatConfig {
    /// Seconds a corpse lingers before despawn. `None` (default) keeps
    /// corpses around forever.
    pub corpse_lifetime: Option<f32>,
}

/// Combat Plugin
///
/// Registers combat systems in FixedUpdate, chained so each tick runs:
/// 1. tick_attack_cooldowns: drain cooldown timers
/// 2. resolve_attacks: AttackRequested -> radius scan -> damage
/// 3. apply_healing: HealRequested -> clamp-heal
/// 4. mark_dead: EntityDied -> Dead marker, drop Attacker
/// 5. despawn_after_timeout: corpse cleanup (when configured)
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackRequested>()
            .add_event::<HealRequested>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.init_resource::<CombatConfig>();

        app.add_systems(
            FixedUpdate,
            (
                tick_attack_cooldowns,
                resolve_attacks,
                apply_healing,
                mark_dead,
                despawn_after_timeout,
            )
                .chain(), // deterministic order within the tick
        );
    }
}
