//! Cleanup system: removes destroyed hostiles.

use hecs::{Entity, World};

use bulwark_core::components::{Health, Hostile};
use bulwark_core::events::CombatEvent;

/// Despawn every hostile whose health has reached zero.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<CombatEvent>) {
    despawn_buffer.clear();

    for (entity, (health, _hostile)) in world.query_mut::<(&Health, &Hostile)>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        tracing::debug!(?entity, "hostile destroyed");
        events.push(CombatEvent::HostileDestroyed {
            entity: entity.to_bits().get(),
        });
        let _ = world.despawn(entity);
    }
}
