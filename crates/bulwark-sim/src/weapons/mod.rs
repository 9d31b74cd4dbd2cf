//! Weapon state machines, one per weapon kind.
//!
//! Each turret holds exactly one `WeaponBehavior` and dispatches into it once
//! per tick. Every variant reads its operative numbers from the
//! `EffectiveStats` handed in for that tick, so a buff added or expired this
//! tick is already reflected in the fire decision.

pub mod area_denial;
pub mod beam;
pub mod single_shot;
pub mod spread;

use bulwark_core::enums::{WeaponKind, WeaponPhase};
use bulwark_core::events::CombatEvent;
use bulwark_core::stats::{BaseStats, EffectiveStats};
use bulwark_core::types::Position;

use crate::context::{AudioSink, Battlefield};

pub use area_denial::AreaDenial;
pub use beam::Beam;
pub use single_shot::SingleShot;
pub use spread::{spread_angles, Spread};

/// Per-tick context for a weapon: where it fires from and who it talks to.
pub struct FireContext<'a> {
    pub turret: u32,
    /// Firing port position.
    pub muzzle: Position,
    /// Firing axis in degrees (the turret's current facing).
    pub facing: f64,
    pub dt: f64,
    pub battlefield: &'a mut dyn Battlefield,
    pub audio: &'a mut dyn AudioSink,
    pub events: &'a mut Vec<CombatEvent>,
}

/// The weapon fitted to a turret, with its in-flight state.
#[derive(Debug, Clone)]
pub enum WeaponBehavior {
    Beam(Beam),
    SingleShot(SingleShot),
    Spread(Spread),
    AreaDenial(AreaDenial),
}

impl WeaponBehavior {
    pub fn new(kind: WeaponKind) -> Self {
        match kind {
            WeaponKind::Beam => Self::Beam(Beam::default()),
            WeaponKind::SingleShot => Self::SingleShot(SingleShot::default()),
            WeaponKind::Spread => Self::Spread(Spread::default()),
            WeaponKind::AreaDenial => Self::AreaDenial(AreaDenial::default()),
        }
    }

    pub fn kind(&self) -> WeaponKind {
        match self {
            Self::Beam(_) => WeaponKind::Beam,
            Self::SingleShot(_) => WeaponKind::SingleShot,
            Self::Spread(_) => WeaponKind::Spread,
            Self::AreaDenial(_) => WeaponKind::AreaDenial,
        }
    }

    pub fn phase(&self) -> WeaponPhase {
        match self {
            Self::Beam(w) => WeaponPhase::Beam(w.phase()),
            Self::SingleShot(_) => WeaponPhase::SingleShot,
            Self::Spread(w) => WeaponPhase::Spread(w.phase()),
            Self::AreaDenial(w) => WeaponPhase::AreaDenial(w.phase()),
        }
    }

    /// Advance the weapon by one tick. Without a lock the weapon drops back
    /// to its initial phase and discards any charge or wind-up in progress.
    pub fn update(
        &mut self,
        locked: bool,
        stats: &EffectiveStats,
        base: &BaseStats,
        ctx: &mut FireContext<'_>,
    ) {
        match self {
            Self::Beam(w) => w.update(locked, stats, base, ctx),
            Self::SingleShot(w) => w.update(locked, stats, base, ctx),
            Self::Spread(w) => w.update(locked, stats, base, ctx),
            Self::AreaDenial(w) => w.update(locked, stats, ctx),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory battlefield for weapon tests.

    use glam::DVec2;
    use hecs::{Entity, World};

    use bulwark_core::constants::DT;
    use bulwark_core::events::{AudioEvent, CombatEvent};
    use bulwark_core::types::Position;

    use super::FireContext;
    use crate::context::*;

    /// Context for turret 0 firing from the origin along `facing`.
    pub fn fire_context<'a>(
        recorder: &'a mut Recorder,
        audio: &'a mut Vec<AudioEvent>,
        events: &'a mut Vec<CombatEvent>,
        facing: f64,
    ) -> FireContext<'a> {
        FireContext {
            turret: 0,
            muzzle: Position::new(0.0, 0.0),
            facing,
            dt: DT,
            battlefield: recorder,
            audio,
            events,
        }
    }

    #[derive(Default)]
    pub struct Recorder {
        pub handles: World,
        pub ray_targets: Vec<Entity>,
        pub damage: Vec<(Entity, f64)>,
        pub spawned: Vec<(Entity, SpawnRequest)>,
        pub placed: Vec<(Entity, Position, f64)>,
    }

    impl Recorder {
        pub fn with_ray_targets(n: usize) -> Self {
            let mut recorder = Self::default();
            recorder.ray_targets = (0..n).map(|_| recorder.handles.spawn(())).collect();
            recorder
        }

        pub fn kill(&mut self, entity: Entity) {
            let _ = self.handles.despawn(entity);
        }
    }

    impl SpatialQuery for Recorder {
        fn locate(&self, _entity: Entity) -> Option<DVec2> {
            None
        }

        fn overlap_circle(&self, _center: DVec2, _radius: f64) -> Vec<Candidate> {
            Vec::new()
        }

        fn raycast(&self, _origin: DVec2, _direction: DVec2, _length: f64) -> Vec<Entity> {
            self.ray_targets.clone()
        }
    }

    impl DamageRouter for Recorder {
        fn apply_damage(&mut self, target: Entity, amount: f64) -> bool {
            self.damage.push((target, amount));
            true
        }
    }

    impl EntitySpawner for Recorder {
        fn spawn(&mut self, request: SpawnRequest) -> Entity {
            let entity = self.handles.spawn(());
            self.spawned.push((entity, request));
            entity
        }

        fn is_alive(&self, entity: Entity) -> bool {
            self.handles.contains(entity)
        }

        fn place(&mut self, entity: Entity, position: Position, rotation: f64) {
            self.placed.push((entity, position, rotation));
        }
    }
}
