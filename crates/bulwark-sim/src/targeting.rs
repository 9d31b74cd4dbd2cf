//! Target acquisition: finds and holds a lock within range and field of view.
//!
//! A valid lock is never swapped for a "better" target. When the lock
//! breaks, the first qualifying candidate from the spatial query wins;
//! candidate order comes from the query and carries no tie-breaking promise.

use glam::DVec2;
use hecs::Entity;

use bulwark_core::types::angle_off_facing;

use crate::context::SpatialQuery;

/// Whether a point lies inside the circle-sector envelope.
pub fn in_envelope(
    origin: DVec2,
    facing: f64,
    range: f64,
    fov_half_angle: f64,
    point: DVec2,
) -> bool {
    let to_point = point - origin;
    to_point.length() <= range && angle_off_facing(facing, to_point) <= fov_half_angle
}

/// Keep `current` if it is still alive and inside the envelope; otherwise
/// pick the first candidate that is.
pub fn acquire_or_validate<Q: SpatialQuery + ?Sized>(
    current: Option<Entity>,
    origin: DVec2,
    facing: f64,
    range: f64,
    fov_half_angle: f64,
    query: &Q,
) -> Option<Entity> {
    if let Some(entity) = current {
        if let Some(position) = query.locate(entity) {
            if in_envelope(origin, facing, range, fov_half_angle, position) {
                return Some(entity);
            }
        }
    }

    query
        .overlap_circle(origin, range)
        .into_iter()
        .find(|c| in_envelope(origin, facing, range, fov_half_angle, c.position))
        .map(|c| c.entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Candidate;
    use bulwark_core::types::heading_vector;
    use hecs::World;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Spatial query over a fixed candidate list, returned in list order.
    struct Field {
        candidates: Vec<Candidate>,
    }

    impl SpatialQuery for Field {
        fn locate(&self, entity: Entity) -> Option<DVec2> {
            self.candidates
                .iter()
                .find(|c| c.entity == entity)
                .map(|c| c.position)
        }

        fn overlap_circle(&self, center: DVec2, radius: f64) -> Vec<Candidate> {
            self.candidates
                .iter()
                .copied()
                .filter(|c| c.position.distance(center) <= radius)
                .collect()
        }

        fn raycast(&self, _origin: DVec2, _direction: DVec2, _length: f64) -> Vec<Entity> {
            Vec::new()
        }
    }

    fn handles(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn(())).collect()
    }

    #[test]
    fn acquires_first_candidate_inside_cone() {
        let mut world = World::new();
        let e = handles(&mut world, 3);
        let field = Field {
            candidates: vec![
                // Behind the turret.
                Candidate { entity: e[0], position: DVec2::new(0.0, -2.0) },
                Candidate { entity: e[1], position: DVec2::new(0.5, 3.0) },
                Candidate { entity: e[2], position: DVec2::new(0.0, 1.0) },
            ],
        };
        let lock = acquire_or_validate(None, DVec2::ZERO, 0.0, 5.0, 45.0, &field);
        assert_eq!(lock, Some(e[1]));
    }

    #[test]
    fn lock_persists_while_valid() {
        let mut world = World::new();
        let e = handles(&mut world, 2);
        let field = Field {
            candidates: vec![
                Candidate { entity: e[0], position: DVec2::new(0.0, 1.0) },
                Candidate { entity: e[1], position: DVec2::new(1.0, 4.0) },
            ],
        };
        let lock = acquire_or_validate(Some(e[1]), DVec2::ZERO, 0.0, 5.0, 45.0, &field);
        assert_eq!(lock, Some(e[1]), "must not switch to the closer target");
    }

    #[test]
    fn lock_breaks_when_target_leaves_range() {
        let mut world = World::new();
        let e = handles(&mut world, 2);
        let field = Field {
            candidates: vec![
                Candidate { entity: e[0], position: DVec2::new(0.0, 6.0) },
                Candidate { entity: e[1], position: DVec2::new(0.0, 2.0) },
            ],
        };
        let lock = acquire_or_validate(Some(e[0]), DVec2::ZERO, 0.0, 5.0, 45.0, &field);
        assert_eq!(lock, Some(e[1]));
    }

    #[test]
    fn stale_handle_falls_back_to_reacquisition() {
        let mut world = World::new();
        let gone = world.spawn(());
        world.despawn(gone).unwrap();
        let field = Field { candidates: Vec::new() };
        let lock = acquire_or_validate(Some(gone), DVec2::ZERO, 0.0, 5.0, 45.0, &field);
        assert_eq!(lock, None);
    }

    /// Spatial query that ignores the radius, like one squaring a negative range.
    struct Everything(Vec<Candidate>);

    impl SpatialQuery for Everything {
        fn locate(&self, entity: Entity) -> Option<DVec2> {
            self.0.iter().find(|c| c.entity == entity).map(|c| c.position)
        }

        fn overlap_circle(&self, _center: DVec2, _radius: f64) -> Vec<Candidate> {
            self.0.clone()
        }

        fn raycast(&self, _origin: DVec2, _direction: DVec2, _length: f64) -> Vec<Entity> {
            Vec::new()
        }
    }

    #[test]
    fn reacquisition_checks_distance_not_just_cone() {
        let mut world = World::new();
        let e = handles(&mut world, 1);
        let field = Everything(vec![Candidate { entity: e[0], position: DVec2::new(0.0, 3.0) }]);
        assert_eq!(acquire_or_validate(None, DVec2::ZERO, 0.0, 2.0, 45.0, &field), None);
        assert_eq!(acquire_or_validate(Some(e[0]), DVec2::ZERO, 0.0, -5.0, 45.0, &field), None);
        assert_eq!(
            acquire_or_validate(None, DVec2::ZERO, 0.0, 5.0, 45.0, &field),
            Some(e[0])
        );
    }

    #[test]
    fn lock_breaks_when_target_leaves_cone() {
        let mut world = World::new();
        let e = handles(&mut world, 1);
        let field = Field {
            candidates: vec![Candidate { entity: e[0], position: DVec2::new(-3.0, 0.1) }],
        };
        let lock = acquire_or_validate(Some(e[0]), DVec2::ZERO, 0.0, 5.0, 45.0, &field);
        assert_eq!(lock, None);
    }

    #[test]
    fn candidates_outside_fov_are_never_selected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut world = World::new();
        let e = handles(&mut world, 1);

        for facing_step in 0..360 {
            let facing = f64::from(facing_step);
            for _ in 0..8 {
                let half = rng.gen_range(1.0..179.0);
                let extra = rng.gen_range(0.01..(180.0 - half));
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                let offset = facing + sign * (half + extra);
                let distance = rng.gen_range(0.1..5.0);
                let field = Field {
                    candidates: vec![Candidate {
                        entity: e[0],
                        position: heading_vector(offset) * distance,
                    }],
                };
                let lock = acquire_or_validate(None, DVec2::ZERO, facing, 5.0, half, &field);
                assert_eq!(
                    lock, None,
                    "facing {facing}, half {half}, offset {offset} must be rejected"
                );
            }
        }
    }

    #[test]
    fn candidates_inside_fov_are_selected() {
        let mut world = World::new();
        let e = handles(&mut world, 1);
        for facing_step in (0..360).step_by(15) {
            let facing = f64::from(facing_step);
            let field = Field {
                candidates: vec![Candidate {
                    entity: e[0],
                    position: heading_vector(facing + 44.0) * 3.0,
                }],
            };
            let lock = acquire_or_validate(None, DVec2::ZERO, facing, 5.0, 45.0, &field);
            assert_eq!(lock, Some(e[0]));
        }
    }
}
