//! Healing requests
//!
//! Mirrors the attack path: the host emits `HealRequested` (pickup,
//! scripted trigger, support ability), the fixed tick applies it.

use bevy::prelude::*;

use crate::components::{display_label, Actor, Health};
use crate::logger;

/// Event: the host requests healing on this actor
#[derive(Event, Debug, Clone)]
pub struct HealRequested {
    pub target: Entity,
    pub amount: f32,
}

/// System: apply heal requests issued this tick
///
/// Dead or missing targets and non-positive amounts are benign no-ops,
/// logged and dropped.
pub fn apply_healing(
    mut requests: EventReader<HealRequested>,
    mut targets: Query<(&mut Health, Option<&Actor>)>,
) {
    for request in requests.read() {
        let Ok((mut health, actor)) = targets.get_mut(request.target) else {
            logger::log_warning(&format!(
                "Heal request for {:?} ignored: no Health component",
                request.target
            ));
            continue;
        };

        let label = display_label(actor, request.target);

        if request.amount <= 0.0 {
            logger::log_warning(&format!(
                "Heal request for {} ignored: non-positive amount {:.1}",
                label, request.amount
            ));
            continue;
        }

        if !health.is_alive() {
            logger::log(&format!("{} is dead, healing has no effect", label));
            continue;
        }

        let applied = health.heal(request.amount);
        logger::log_info(&format!(
            "{} healed for {:.1} (HP: {:.1}/{:.1})",
            label, applied, health.current, health.max
        ));
    }
}
