//! Attacker component: offensive stats of an actor
//!
//! The simulation owns cooldown state; the host only supplies the fixed
//! tick and the discrete attack-request signal.

use bevy::prelude::*;

/// Component for actors that can swing at nearby targets
///
/// An attack is only issued when `cooldown_timer` has drained to zero;
/// issuing one resets the timer to `cooldown`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    /// Damage applied to every target caught in a swing
    pub damage_per_hit: f32,

    /// Reach of a swing (meters, Euclidean)
    pub range: f32,

    /// Cooldown between swings (seconds)
    pub cooldown: f32,

    /// Current cooldown timer (drains to 0)
    pub cooldown_timer: f32,
}

impl Default for Attacker {
    fn default() -> Self {
        Self::new(20.0, 2.0, 1.5)
    }
}

impl Attacker {
    /// `damage_per_hit` and `range` must be positive, `cooldown` non-negative.
    pub fn new(damage_per_hit: f32, range: f32, cooldown: f32) -> Self {
        assert!(damage_per_hit > 0.0, "Attacker::new: damage_per_hit must be positive");
        assert!(range > 0.0, "Attacker::new: range must be positive");
        assert!(cooldown >= 0.0, "Attacker::new: cooldown must be non-negative");
        Self {
            damage_per_hit,
            range,
            cooldown,
            cooldown_timer: 0.0,
        }
    }

    /// Ready to swing (cooldown drained)
    pub fn can_attack(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Start a swing (reset the cooldown)
    pub fn start_cooldown(&mut self) {
        self.cooldown_timer = self.cooldown;
    }
}

/// System: drain attack cooldown timers by the fixed delta
pub fn tick_attack_cooldowns(mut query: Query<&mut Attacker>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut attacker in query.iter_mut() {
        if attacker.cooldown_timer > 0.0 {
            attacker.cooldown_timer -= delta;
            attacker.cooldown_timer = attacker.cooldown_timer.max(0.0);
        }
    }
}
