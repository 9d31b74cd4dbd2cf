//! The turret aggregate: one weapon, its buff ledger, lock, and traverse.
//!
//! A turret is not an ECS entity. The engine owns every turret and hands
//! each one a `Battlefield` view of the world for the duration of its tick.

use hecs::Entity;

use bulwark_core::config::TurretConfig;
use bulwark_core::enums::{PrefabKind, WeaponKind};
use bulwark_core::events::CombatEvent;
use bulwark_core::state::{BuffView, TurretView};
use bulwark_core::stats::{BaseStats, EffectiveStats};
use bulwark_core::types::{bearing_of, Position};

use crate::buff::{Buff, BuffLedger};
use crate::context::{AudioSink, Battlefield, SpatialQuery};
use crate::rotation::RotationController;
use crate::targeting;
use crate::weapons::{FireContext, WeaponBehavior};

#[derive(Debug, Clone)]
pub struct Turret {
    id: u32,
    position: Position,
    /// Current facing in degrees.
    facing: f64,
    /// Mount orientation. The acquisition cone is centered here.
    rest_facing: f64,
    base: BaseStats,
    ledger: BuffLedger,
    rotation: RotationController,
    target: Option<Entity>,
    weapon: WeaponBehavior,
}

impl Turret {
    pub fn new(
        id: u32,
        kind: WeaponKind,
        position: Position,
        rest_facing: f64,
        base: BaseStats,
    ) -> Self {
        Self {
            id,
            position,
            facing: rest_facing,
            rest_facing,
            rotation: RotationController::from_stats(&base),
            base,
            ledger: BuffLedger::new(kind),
            target: None,
            weapon: WeaponBehavior::new(kind),
        }
    }

    pub fn from_config(id: u32, config: &TurretConfig) -> Self {
        Self::new(
            id,
            config.kind,
            config.position,
            config.rest_facing,
            config.base_stats(),
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> WeaponKind {
        self.weapon.kind()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> f64 {
        self.facing
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn weapon(&self) -> &WeaponBehavior {
        &self.weapon
    }

    pub fn ledger(&self) -> &BuffLedger {
        &self.ledger
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base
    }

    /// Effective stats for the ledger as it stands right now.
    pub fn effective_stats(&mut self) -> EffectiveStats {
        self.ledger.effective_stats(&self.base)
    }

    /// Add a buff stamped with `now`. A range boost on an AreaDenial turret
    /// also upgrades its hazard for as long as the buff lives.
    pub fn apply_buff(&mut self, buff: Buff, now: f64, events: &mut Vec<CombatEvent>) -> bool {
        let buff = if self.kind() == WeaponKind::AreaDenial && buff.range_multiplier() > 1.0 {
            buff.with_payload(PrefabKind::UpgradedFlame)
        } else {
            buff
        };

        if !self.ledger.add(buff, now) {
            return false;
        }
        let expires_at = now + buff.duration();
        tracing::debug!(
            turret = self.id,
            damage = buff.damage_multiplier(),
            range = buff.range_multiplier(),
            fire_rate = buff.fire_rate_multiplier(),
            expires_at,
            "buff applied"
        );
        events.push(CombatEvent::BuffApplied {
            turret: self.id,
            expires_at,
        });
        true
    }

    /// Run one tick: buff expiry, target lock, traverse, then the weapon.
    pub fn tick(
        &mut self,
        now: f64,
        dt: f64,
        battlefield: &mut dyn Battlefield,
        audio: &mut dyn AudioSink,
        events: &mut Vec<CombatEvent>,
    ) {
        let expired = self.ledger.tick(now);
        if expired > 0 {
            tracing::debug!(turret = self.id, count = expired, "buffs expired");
            events.push(CombatEvent::BuffsExpired {
                turret: self.id,
                count: expired,
            });
        }

        let stats = self.ledger.effective_stats(&self.base);
        self.update_target(&stats, &*battlefield, events);

        let origin = self.position.as_vec();
        let bearing = self
            .target
            .and_then(|target| battlefield.locate(target))
            .map(|pos| bearing_of(pos - origin));
        self.facing = self.rotation.update(self.facing, self.rest_facing, bearing, dt);

        let mut ctx = FireContext {
            turret: self.id,
            muzzle: self.position.offset_along(self.facing, self.base.muzzle_offset),
            facing: self.facing,
            dt,
            battlefield,
            audio,
            events,
        };
        let locked = self.target.is_some();
        self.weapon.update(locked, &stats, &self.base, &mut ctx);
    }

    fn update_target(
        &mut self,
        stats: &EffectiveStats,
        battlefield: &dyn Battlefield,
        events: &mut Vec<CombatEvent>,
    ) {
        let previous = self.target;
        self.target = targeting::acquire_or_validate(
            previous,
            self.position.as_vec(),
            self.rest_facing,
            stats.range,
            self.base.fov_half_angle(),
            battlefield,
        );

        if previous == self.target {
            return;
        }
        match self.target {
            Some(target) => {
                tracing::debug!(turret = self.id, ?target, "target acquired");
                events.push(CombatEvent::TargetAcquired {
                    turret: self.id,
                    target: target.to_bits().get(),
                });
            }
            None => {
                tracing::debug!(turret = self.id, "target lost");
                events.push(CombatEvent::TargetLost { turret: self.id });
            }
        }
    }

    pub fn view(&self) -> TurretView {
        let kind = self.kind();
        TurretView {
            id: self.id,
            kind,
            position: self.position,
            facing: self.facing,
            rest_facing: self.rest_facing,
            target: self.target.map(|t| t.to_bits().get()),
            phase: self.weapon.phase(),
            stats: EffectiveStats::fold(
                &self.base,
                kind,
                self.ledger.multipliers(),
                self.ledger.hazard_payload(),
            ),
            buffs: self
                .ledger
                .iter()
                .map(|active| BuffView {
                    damage_multiplier: active.buff.damage_multiplier(),
                    range_multiplier: active.buff.range_multiplier(),
                    fire_rate_multiplier: active.buff.fire_rate_multiplier(),
                    expires_at: active.expires_at,
                })
                .collect(),
        }
    }
}
