//! Attack resolution: cooldown gate + radius scan + damage application
//!
//! The host signals "this actor wants to swing" with an `AttackRequested`
//! event (player input, AI decision, scripted scenario). Resolution happens
//! here, on the fixed tick:
//!
//! ```text
//! AttackRequested
//!   ↓ cooldown gate (on cooldown → benign no-op, logged)
//!   ↓ radius scan over Transform + Health, self excluded
//!   ↓ Health::take_damage per target in reach
//!   → DamageDealt per hit, EntityDied on lethal hits
//! ```

use bevy::prelude::*;

use crate::combat::{Attacker, DamageDealt, EntityDied};
use crate::components::{display_label, Actor, Health};
use crate::logger;

/// Event: the host requests a swing from this actor
#[derive(Event, Debug, Clone)]
pub struct AttackRequested {
    pub attacker: Entity,
}

/// System: resolve attack requests issued this tick
///
/// Per request:
/// - no `Attacker` component (e.g. the actor died earlier): warn and skip
/// - on cooldown: logged and dropped, cooldown untouched
/// - otherwise every living entity with `Transform` + `Health` within
///   `range` of the attacker takes `damage_per_hit`, excluding the attacker
///   itself. The cooldown restarts whether or not anything was in reach.
pub fn resolve_attacks(
    mut requests: EventReader<AttackRequested>,
    mut attackers: Query<(&Transform, &mut Attacker, Option<&Actor>)>,
    mut targets: Query<(Entity, &Transform, &mut Health, Option<&Actor>)>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
) {
    for request in requests.read() {
        let Ok((transform, mut attacker, actor)) = attackers.get_mut(request.attacker) else {
            logger::log_warning(&format!(
                "Attack request from {:?} ignored: no Attacker component",
                request.attacker
            ));
            continue;
        };

        let attacker_label = display_label(actor, request.attacker);

        if !attacker.can_attack() {
            logger::log(&format!(
                "{} still on cooldown ({:.2}s remaining)",
                attacker_label, attacker.cooldown_timer
            ));
            continue;
        }

        // A swing costs the cooldown whether or not it connects
        attacker.start_cooldown();

        let origin = transform.translation;
        let range = attacker.range;
        let damage_per_hit = attacker.damage_per_hit;

        let mut hits = 0u32;
        for (target, target_transform, mut health, target_actor) in targets.iter_mut() {
            if target == request.attacker {
                continue;
            }
            // Corpses are not valid targets
            if !health.is_alive() {
                continue;
            }
            if origin.distance(target_transform.translation) > range {
                continue;
            }

            let applied = health.take_damage(damage_per_hit);
            let target_died = !health.is_alive();
            hits += 1;

            logger::log(&format!(
                "{} hit {} for {:.1} damage (HP: {:.1}/{:.1})",
                attacker_label,
                display_label(target_actor, target),
                applied,
                health.current,
                health.max
            ));

            damage_events.write(DamageDealt {
                attacker: request.attacker,
                target,
                damage: applied,
                target_died,
            });

            if target_died {
                death_events.write(EntityDied {
                    entity: target,
                    killer: Some(request.attacker),
                });
            }
        }

        if hits > 0 {
            logger::log_info(&format!(
                "{} swung and hit {} target(s)",
                attacker_label, hits
            ));
        } else {
            logger::log(&format!("{} swung and hit nothing", attacker_label));
        }
    }
}
