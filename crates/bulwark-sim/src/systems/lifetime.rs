//! Auto-expiry for spawned projectiles and hazards.

use hecs::{Entity, World};

use bulwark_core::components::Lifetime;

/// Count down every `Lifetime` and despawn the entities whose time is up.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.remaining_secs -= dt;
        if lifetime.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    if !despawn_buffer.is_empty() {
        tracing::trace!(count = despawn_buffer.len(), "lifetimes expired");
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn despawns_once_lifetime_runs_out() {
        let mut world = World::new();
        let short = world.spawn((Lifetime {
            remaining_secs: 0.05,
        },));
        let long = world.spawn((Lifetime {
            remaining_secs: 10.0,
        },));
        let mut buffer = Vec::new();

        run(&mut world, 0.02, &mut buffer);
        run(&mut world, 0.02, &mut buffer);
        assert!(world.contains(short));
        run(&mut world, 0.02, &mut buffer);
        assert!(!world.contains(short));
        assert!(world.contains(long));
        assert!(buffer.is_empty());
    }
}
