//! Projectile contact: a bullet inside a live hostile's collider deals its
//! damage and is consumed.

use glam::DVec2;
use hecs::{Entity, World};

use bulwark_core::components::{Collider, Health, Hostile, Projectile};
use bulwark_core::constants::PROJECTILE_RADIUS;
use bulwark_core::types::Position;

use crate::context::DamageSink;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let hostiles: Vec<(Entity, DVec2, f64)> = world
        .query::<(&Position, &Collider, &Hostile)>()
        .iter()
        .map(|(entity, (pos, collider, _))| (entity, pos.as_vec(), collider.radius))
        .collect();
    if hostiles.is_empty() {
        return;
    }

    let projectiles: Vec<(Entity, DVec2, f64)> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(entity, (pos, projectile))| (entity, pos.as_vec(), projectile.damage))
        .collect();

    for (projectile, at, damage) in projectiles {
        for &(hostile, center, radius) in &hostiles {
            if at.distance(center) > radius + PROJECTILE_RADIUS {
                continue;
            }
            let Ok(mut health) = world.get::<&mut Health>(hostile) else {
                continue;
            };
            // Overkill passes through to the next hostile in contact.
            if health.current <= 0.0 {
                continue;
            }
            health.apply_damage(damage);
            tracing::trace!(?hostile, damage, remaining = health.current, "projectile hit");
            despawn_buffer.push(projectile);
            break;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
