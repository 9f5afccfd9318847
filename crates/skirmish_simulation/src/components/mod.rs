//! ECS components for simulation entities
//!
//! Organized by domain:
//! - actor: base actor state (display name, health)
//!
//! Combat-specific components (Attacker, Dead, DespawnAfter) live in the
//! `combat` module next to the systems that drive them.

pub mod actor;

pub use actor::*;
