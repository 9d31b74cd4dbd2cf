//! Entity spawn factories for hostiles.
//!
//! Projectiles and hazards are spawned by weapons through the
//! `EntitySpawner` collaborator; only hostiles are placed from here.

use hecs::{Entity, World};

use bulwark_core::components::{Collider, Health, Hostile};
use bulwark_core::config::HostileConfig;
use bulwark_core::constants::HOSTILE_RADIUS;
use bulwark_core::types::{Position, Velocity};

/// Spawn a stationary hostile with the default collider.
pub fn spawn_hostile(world: &mut World, position: Position, health: f64) -> Entity {
    world.spawn((
        Hostile,
        position,
        Velocity::default(),
        Health {
            current: health,
            max: health,
        },
        Collider {
            radius: HOSTILE_RADIUS,
        },
    ))
}

/// Spawn a hostile described by scenario config.
pub fn spawn_from_config(world: &mut World, config: &HostileConfig) -> Entity {
    world.spawn((
        Hostile,
        config.position,
        config.velocity,
        Health {
            current: config.health,
            max: config.health,
        },
        Collider {
            radius: config.radius,
        },
    ))
}
