//! Kinematic integration: position += velocity * dt.

use hecs::World;

use bulwark_core::types::{Position, Velocity};

/// Move every entity that has both a position and a velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}
