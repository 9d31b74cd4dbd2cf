//! hecs-backed implementation of the collaborator traits.

use glam::DVec2;
use hecs::{Entity, EntityBuilder, World};

use bulwark_core::components::*;
use bulwark_core::types::{Position, Velocity};

use crate::context::*;

impl DamageSink for Health {
    fn apply_damage(&mut self, amount: f64) {
        self.current = (self.current - amount).max(0.0);
    }
}

/// View of the ECS world handed to turrets during their tick.
pub struct WorldBattlefield<'w> {
    world: &'w mut World,
}

impl<'w> WorldBattlefield<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

/// A hostile is targetable while it exists and still has health.
fn is_targetable(health: Option<&Health>) -> bool {
    health.is_none_or(|h| h.current > 0.0)
}

impl SpatialQuery for WorldBattlefield<'_> {
    fn locate(&self, entity: Entity) -> Option<DVec2> {
        if self.world.get::<&Hostile>(entity).is_err() {
            return None;
        }
        if let Ok(health) = self.world.get::<&Health>(entity) {
            if health.current <= 0.0 {
                return None;
            }
        }
        self.world.get::<&Position>(entity).ok().map(|p| p.as_vec())
    }

    fn overlap_circle(&self, center: DVec2, radius: f64) -> Vec<Candidate> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let radius_sq = radius * radius;
        let mut query = self
            .world
            .query::<(&Position, &Hostile, Option<&Health>)>();
        let found: Vec<Candidate> = query
            .iter()
            .filter(|(_, (_, _, health))| is_targetable(*health))
            .map(|(entity, (pos, _, _))| Candidate {
                entity,
                position: pos.as_vec(),
            })
            .filter(|c| c.position.distance_squared(center) <= radius_sq)
            .collect();
        found
    }

    fn raycast(&self, origin: DVec2, direction: DVec2, length: f64) -> Vec<Entity> {
        let mut hits: Vec<(f64, Entity)> = Vec::new();
        let mut query = self
            .world
            .query::<(&Position, &Hostile, Option<&Collider>, Option<&Health>)>();
        for (entity, (pos, _, collider, health)) in query.iter() {
            if !is_targetable(health) {
                continue;
            }
            let radius = collider.map_or(0.0, |c| c.radius);
            let to_center = pos.as_vec() - origin;
            let along = to_center.dot(direction).clamp(0.0, length);
            let closest = origin + direction * along;
            if closest.distance(pos.as_vec()) <= radius {
                hits.push((along, entity));
            }
        }
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, e)| e).collect()
    }
}

impl DamageRouter for WorldBattlefield<'_> {
    fn apply_damage(&mut self, target: Entity, amount: f64) -> bool {
        match self.world.get::<&mut Health>(target) {
            Ok(mut health) => {
                DamageSink::apply_damage(&mut *health, amount);
                true
            }
            Err(_) => false,
        }
    }
}

impl EntitySpawner for WorldBattlefield<'_> {
    fn spawn(&mut self, request: SpawnRequest) -> Entity {
        let mut builder = EntityBuilder::new();
        builder
            .add(request.position)
            .add(Rotation {
                degrees: request.rotation,
            })
            .add(Prefab {
                kind: request.prefab,
            })
            .add(Lifetime {
                remaining_secs: request.lifetime,
            });
        if let Some(velocity) = request.velocity {
            builder.add::<Velocity>(velocity);
        }
        match request.payload {
            SpawnPayload::Projectile { damage, owner } => {
                builder.add(Projectile { damage, owner });
            }
            SpawnPayload::Hazard { damage, owner } => {
                builder.add(Hazard { damage, owner });
            }
        }
        self.world.spawn(builder.build())
    }

    fn is_alive(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    fn place(&mut self, entity: Entity, position: Position, rotation: f64) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            *pos = position;
        }
        if let Ok(mut rot) = self.world.get::<&mut Rotation>(entity) {
            rot.degrees = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::enums::PrefabKind;

    fn spawn_hostile(world: &mut World, x: f64, y: f64) -> Entity {
        world.spawn((
            Hostile,
            Position::new(x, y),
            Health {
                current: 10.0,
                max: 10.0,
            },
            Collider { radius: 0.5 },
        ))
    }

    #[test]
    fn locate_rejects_stale_handles() {
        let mut world = World::new();
        let e = spawn_hostile(&mut world, 1.0, 2.0);
        {
            let field = WorldBattlefield::new(&mut world);
            assert_eq!(field.locate(e), Some(DVec2::new(1.0, 2.0)));
        }
        world.despawn(e).unwrap();
        let reused = spawn_hostile(&mut world, 5.0, 5.0);
        let field = WorldBattlefield::new(&mut world);
        assert_eq!(field.locate(e), None, "old generation must not alias the new slot");
        assert!(field.locate(reused).is_some());
    }

    #[test]
    fn locate_ignores_dead_and_non_hostile() {
        let mut world = World::new();
        let dead = world.spawn((
            Hostile,
            Position::new(0.0, 1.0),
            Health {
                current: 0.0,
                max: 10.0,
            },
        ));
        let friendly = world.spawn((Position::new(0.0, 1.0),));
        let field = WorldBattlefield::new(&mut world);
        assert_eq!(field.locate(dead), None);
        assert_eq!(field.locate(friendly), None);
    }

    #[test]
    fn overlap_circle_filters_by_radius() {
        let mut world = World::new();
        let near = spawn_hostile(&mut world, 0.0, 3.0);
        let _far = spawn_hostile(&mut world, 0.0, 8.0);
        let field = WorldBattlefield::new(&mut world);
        let found = field.overlap_circle(DVec2::ZERO, 5.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].entity, near);
        assert!(field.overlap_circle(DVec2::ZERO, -5.0).is_empty());
    }

    #[test]
    fn raycast_hits_colliders_along_segment_in_order() {
        let mut world = World::new();
        let second = spawn_hostile(&mut world, 0.3, 6.0);
        let first = spawn_hostile(&mut world, -0.2, 2.0);
        let _beside = spawn_hostile(&mut world, 3.0, 4.0);
        let _beyond = spawn_hostile(&mut world, 0.0, 12.0);
        let _behind = spawn_hostile(&mut world, 0.0, -3.0);
        let field = WorldBattlefield::new(&mut world);
        let hits = field.raycast(DVec2::ZERO, DVec2::Y, 10.0);
        assert_eq!(hits, vec![first, second]);
    }

    #[test]
    fn damage_routes_to_health() {
        let mut world = World::new();
        let e = spawn_hostile(&mut world, 0.0, 0.0);
        {
            let mut field = WorldBattlefield::new(&mut world);
            assert!(DamageRouter::apply_damage(&mut field, e, 4.0));
            assert!(DamageRouter::apply_damage(&mut field, e, 40.0));
        }
        let health = world.get::<&Health>(e).unwrap();
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn damage_to_stale_handle_is_ignored() {
        let mut world = World::new();
        let e = spawn_hostile(&mut world, 0.0, 0.0);
        world.despawn(e).unwrap();
        let mut field = WorldBattlefield::new(&mut world);
        assert!(!DamageRouter::apply_damage(&mut field, e, 4.0));
    }

    #[test]
    fn spawn_and_place() {
        let mut world = World::new();
        let e = {
            let mut field = WorldBattlefield::new(&mut world);
            let e = field.spawn(SpawnRequest {
                prefab: PrefabKind::Flame,
                position: Position::new(1.0, 1.0),
                rotation: 10.0,
                velocity: None,
                lifetime: 2.0,
                payload: SpawnPayload::Hazard {
                    damage: 5.0,
                    owner: 0,
                },
            });
            assert!(field.is_alive(e));
            field.place(e, Position::new(2.0, 3.0), 45.0);
            e
        };
        assert_eq!(*world.get::<&Position>(e).unwrap(), Position::new(2.0, 3.0));
        assert_eq!(world.get::<&Rotation>(e).unwrap().degrees, 45.0);
        assert_eq!(world.get::<&Prefab>(e).unwrap().kind, PrefabKind::Flame);
        assert!(world.get::<&Hazard>(e).is_ok());
        assert!(world.get::<&Velocity>(e).is_err());
    }
}
