//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::PrefabKind;

/// Marks an entity as a valid turret target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Hit points. The entity is removed once `current` reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Circular collision footprint used by beam rays and projectile contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Facing of a spawned entity in degrees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f64,
}

/// What an entity was spawned as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prefab {
    pub kind: PrefabKind,
}

/// Auto-expiry. The entity is despawned once `remaining_secs` runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_secs: f64,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Damage delivered on contact, fixed at spawn time.
    pub damage: f64,
    /// Turret that fired it.
    pub owner: u32,
}

/// A persistent area-denial hazard pinned to its turret's firing port.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub damage: f64,
    pub owner: u32,
}
