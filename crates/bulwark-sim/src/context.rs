//! Collaborator interfaces the combat core calls out to.
//!
//! Turrets never reach for global state. Everything they touch outside
//! their own fields comes through these traits, passed in per tick.

use glam::DVec2;
use hecs::Entity;

use bulwark_core::enums::PrefabKind;
use bulwark_core::events::AudioEvent;
use bulwark_core::types::{Position, Velocity};

/// A hostile found by a spatial query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub entity: Entity,
    pub position: DVec2,
}

/// Read-only spatial lookups over targetable entities.
pub trait SpatialQuery {
    /// Current position of `entity`, or `None` if the handle is stale or the
    /// entity is not targetable.
    fn locate(&self, entity: Entity) -> Option<DVec2>;

    /// Targetable entities whose centers lie within `radius` of `center`.
    /// Ordering is implementation-defined.
    fn overlap_circle(&self, center: DVec2, radius: f64) -> Vec<Candidate>;

    /// Targetable entities whose colliders intersect the segment starting at
    /// `origin` running `length` units along the unit vector `direction`.
    fn raycast(&self, origin: DVec2, direction: DVec2, length: f64) -> Vec<Entity>;
}

/// Anything that can take damage.
pub trait DamageSink {
    fn apply_damage(&mut self, amount: f64);
}

/// Routes damage to the sink behind a handle.
pub trait DamageRouter {
    /// Returns false if the handle no longer refers to a damageable entity.
    fn apply_damage(&mut self, target: Entity, amount: f64) -> bool;
}

/// What to spawn and where.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest {
    pub prefab: PrefabKind,
    pub position: Position,
    /// Degrees.
    pub rotation: f64,
    pub velocity: Option<Velocity>,
    /// Seconds until the spawner despawns it.
    pub lifetime: f64,
    pub payload: SpawnPayload,
}

/// Gameplay data carried by a spawned entity.
#[derive(Debug, Clone, Copy)]
pub enum SpawnPayload {
    Projectile { damage: f64, owner: u32 },
    Hazard { damage: f64, owner: u32 },
}

/// Creates entities and manages their externally owned lifetime.
pub trait EntitySpawner {
    fn spawn(&mut self, request: SpawnRequest) -> Entity;

    /// Whether `entity` still exists.
    fn is_alive(&self, entity: Entity) -> bool;

    /// Move and reorient an existing entity. No-op for stale handles.
    fn place(&mut self, entity: Entity, position: Position, rotation: f64);
}

/// Everything a weapon needs from the world around it.
pub trait Battlefield: SpatialQuery + DamageRouter + EntitySpawner {}

impl<T: SpatialQuery + DamageRouter + EntitySpawner> Battlefield for T {}

/// Receives sound cues.
pub trait AudioSink {
    fn play(&mut self, event: AudioEvent);
}

impl AudioSink for Vec<AudioEvent> {
    fn play(&mut self, event: AudioEvent) {
        self.push(event);
    }
}
