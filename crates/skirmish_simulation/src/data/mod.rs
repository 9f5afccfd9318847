//! Unit definition data files
//!
//! Spawnable unit archetypes live as JSON under the crate's `data/`
//! directory. The headless binary and scenario tests assemble entities
//! from these specs instead of hardcoding stats.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::Attacker;
use crate::components::{Actor, Health};

fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Read a raw JSON file under `data/` and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

/// A spawnable unit archetype (from data/units/*.json).
#[derive(Debug, Clone, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    pub max_health: f32,
    /// Units without an attack block can only soak damage (dummies, civilians)
    #[serde(default)]
    pub attack: Option<AttackSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttackSpec {
    pub damage_per_hit: f32,
    pub range: f32,
    pub cooldown_s: f32,
}

impl UnitSpec {
    /// Reject specs that would break component invariants at spawn time.
    pub fn validate(&self) -> Result<()> {
        if self.max_health <= 0.0 {
            bail!("unit {:?}: max_health must be positive", self.name);
        }
        if let Some(attack) = &self.attack {
            if attack.damage_per_hit <= 0.0 {
                bail!("unit {:?}: damage_per_hit must be positive", self.name);
            }
            if attack.range <= 0.0 {
                bail!("unit {:?}: range must be positive", self.name);
            }
            if attack.cooldown_s < 0.0 {
                bail!("unit {:?}: cooldown_s must be non-negative", self.name);
            }
        }
        Ok(())
    }
}

/// Load, parse and validate a unit JSON (from data/units/*).
pub fn load_unit_spec(rel: impl AsRef<Path>) -> Result<UnitSpec> {
    let txt = read_json(rel)?;
    let spec: UnitSpec = serde_json::from_str(&txt).context("parse unit json")?;
    spec.validate()?;
    Ok(spec)
}

/// Assemble an entity from a unit spec at the given position.
pub fn spawn_unit(commands: &mut Commands, spec: &UnitSpec, position: Vec3) -> Entity {
    let mut entity = commands.spawn((
        Actor::named(spec.name.clone()),
        Health::new(spec.max_health),
        Transform::from_translation(position),
    ));

    if let Some(attack) = &spec.attack {
        entity.insert(Attacker::new(
            attack.damage_per_hit,
            attack.range,
            attack.cooldown_s,
        ));
    }

    entity.id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_spec() {
        let json = r#"{
            "name": "Watchman",
            "max_health": 100.0,
            "attack": { "damage_per_hit": 20.0, "range": 2.0, "cooldown_s": 1.5 }
        }"#;

        let spec: UnitSpec = serde_json::from_str(json).unwrap();
        spec.validate().unwrap();

        assert_eq!(spec.name, "Watchman");
        assert_eq!(spec.max_health, 100.0);
        let attack = spec.attack.unwrap();
        assert_eq!(attack.damage_per_hit, 20.0);
        assert_eq!(attack.cooldown_s, 1.5);
    }

    #[test]
    fn test_parse_unit_spec_without_attack() {
        let json = r#"{ "name": "Drifter", "max_health": 60.0 }"#;

        let spec: UnitSpec = serde_json::from_str(json).unwrap();
        spec.validate().unwrap();

        assert!(spec.attack.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_stats() {
        let spec = UnitSpec {
            name: "Broken".into(),
            max_health: 0.0,
            attack: None,
        };
        assert!(spec.validate().is_err());

        let spec = UnitSpec {
            name: "Broken".into(),
            max_health: 10.0,
            attack: Some(AttackSpec {
                damage_per_hit: -1.0,
                range: 2.0,
                cooldown_s: 1.0,
            }),
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_load_shipped_specs() {
        for rel in ["units/watchman.json", "units/raider.json", "units/drifter.json"] {
            let spec = load_unit_spec(rel).unwrap();
            assert!(spec.max_health > 0.0, "{}", rel);
        }
    }
}
