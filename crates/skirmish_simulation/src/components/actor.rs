//! Base actor components: Actor, Health

use bevy::prelude::*;

/// An actor in the skirmish (guard, raider, training dummy)
///
/// Automatically adds Health through Required Components.
/// `display_name` is informational only; it shows up in log lines.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health)]
pub struct Actor {
    pub display_name: String,
}

impl Actor {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Hit points of an actor
///
/// Invariant: 0 ≤ current ≤ max, max fixed at creation.
/// Reaching 0 is terminal: a dead actor ignores further damage and healing,
/// so `is_alive` can only ever flip from true to false.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Health {
    /// `max` must be positive.
    pub fn new(max: f32) -> Self {
        assert!(max > 0.0, "Health::new: max must be positive, got {}", max);
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }

    /// Subtract `amount`, floored at zero. Returns the amount actually applied.
    ///
    /// Negative and zero amounts are ignored, as is damage to the already dead.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || !self.is_alive() {
            return 0.0;
        }
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    /// Add `amount`, clamped at max. Returns the amount actually applied.
    ///
    /// Negative and zero amounts are ignored. Healing the dead is a no-op:
    /// death is one-way in this model.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || !self.is_alive() {
            return 0.0;
        }
        let applied = amount.min(self.max - self.current);
        self.current += applied;
        applied
    }
}

/// Log label for an entity: display name when it has one, entity id otherwise.
pub(crate) fn display_label(actor: Option<&Actor>, entity: Entity) -> String {
    match actor {
        Some(actor) if !actor.display_name.is_empty() => {
            format!("{} ({:?})", actor.display_name, entity)
        }
        _ => format!("{:?}", entity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100.0);
        assert_eq!(health.current, 100.0);

        let applied = health.take_damage(30.0);
        assert_eq!(applied, 30.0);
        assert_eq!(health.current, 70.0);
        assert!(health.is_alive());
    }

    #[test]
    fn test_health_overkill_clamps_at_zero() {
        // spec scenario: 150 damage into 100 HP
        let mut health = Health::new(100.0);
        let applied = health.take_damage(150.0);

        assert_eq!(applied, 100.0);
        assert_eq!(health.current, 0.0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_dead_ignores_damage_and_heal() {
        let mut health = Health::new(50.0);
        health.take_damage(50.0);
        assert!(!health.is_alive());

        assert_eq!(health.take_damage(10.0), 0.0);
        assert_eq!(health.heal(10.0), 0.0);
        assert_eq!(health.current, 0.0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_heal_clamps_at_max() {
        let mut health = Health::new(100.0);
        health.take_damage(10.0);
        assert_eq!(health.current, 90.0);

        let applied = health.heal(30.0);
        assert_eq!(applied, 10.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn test_health_rejects_negative_amounts() {
        let mut health = Health::new(100.0);

        assert_eq!(health.take_damage(-5.0), 0.0);
        assert_eq!(health.heal(-5.0), 0.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn test_health_percent() {
        let mut health = Health::new(200.0);
        health.take_damage(50.0);
        assert_eq!(health.percent(), 0.75);
    }
}
