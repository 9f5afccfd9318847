//! Damage events and death bookkeeping

use bevy::prelude::*;

use crate::combat::{Attacker, CombatConfig};
use crate::components::{display_label, Actor};
use crate::logger;

/// Event: damage was applied
///
/// Emitted after damage lands on a Health. Consumed by hosts for UI,
/// sounds, effects.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    /// Amount actually applied (overkill is clamped away)
    pub damage: f32,
    pub target_died: bool,
}

/// Event: an entity died (health reached 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Marker component: entity is dead (health reached 0)
///
/// Despawn is not automatic; corpses stay where they fell unless
/// `CombatConfig::corpse_lifetime` is set.
#[derive(Component, Debug)]
pub struct Dead;

/// Marker component: despawn the entity once the given time is reached
///
/// `despawn_time` is in seconds of fixed simulation time since start.
#[derive(Component, Debug)]
pub struct DespawnAfter {
    pub despawn_time: f32,
}

/// System: settle deaths reported this tick
///
/// For every `EntityDied`:
/// - inserts the `Dead` marker
/// - removes `Attacker` so the corpse stops swinging
/// - schedules corpse cleanup when `CombatConfig::corpse_lifetime` is set
pub fn mark_dead(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    actors: Query<&Actor>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    for event in death_events.read() {
        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.insert(Dead);
            entity_commands.remove::<Attacker>();

            if let Some(lifetime) = config.corpse_lifetime {
                entity_commands.insert(DespawnAfter {
                    despawn_time: time.elapsed_secs() + lifetime,
                });
            }
        }

        let victim = display_label(actors.get(event.entity).ok(), event.entity);
        match event.killer {
            Some(killer) => logger::log_info(&format!(
                "{} died (killed by {})",
                victim,
                display_label(actors.get(killer).ok(), killer)
            )),
            None => logger::log_info(&format!("{} died", victim)),
        }
    }
}

/// System: despawn entities whose DespawnAfter timeout expired
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for (entity, despawn) in query.iter() {
        if now >= despawn.despawn_time {
            commands.entity(entity).despawn();
            logger::log(&format!("Despawned {:?} (corpse timeout)", entity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_dealt_event() {
        let event = DamageDealt {
            attacker: Entity::PLACEHOLDER,
            target: Entity::PLACEHOLDER,
            damage: 15.0,
            target_died: false,
        };

        assert_eq!(event.damage, 15.0);
        assert!(!event.target_died);
    }

    #[test]
    fn test_entity_died_event() {
        let event = EntityDied {
            entity: Entity::PLACEHOLDER,
            killer: Some(Entity::PLACEHOLDER),
        };

        assert!(event.killer.is_some());
    }
}
