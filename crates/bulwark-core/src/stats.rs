//! Turret stat blocks and the per-weapon buff rule table.
//!
//! `EffectiveStats` is always derived from `BaseStats` plus the combined
//! multipliers of every live buff. Nothing here keeps a running total.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{PrefabKind, WeaponKind};

/// Tuning values a turret is created with. Never modified by buffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    /// Acquisition radius.
    pub range: f64,
    /// Degrees per second toward a locked target.
    pub rotation_speed: f64,
    /// Degrees per second back to rest facing.
    pub return_rotation_speed: f64,
    /// Full cone width in degrees.
    pub fov_angle: f64,
    pub damage: f64,
    pub charge_time: f64,
    pub ray_duration: f64,
    pub ray_length: f64,
    /// Shots per second (SingleShot) or bursts per second (Spread).
    pub fire_rate: f64,
    pub projectile_speed: f64,
    pub projectile_lifetime: f64,
    pub wind_up_time: f64,
    pub bullets_per_shot: u32,
    /// Total fan width in degrees.
    pub spread_angle: f64,
    pub spawn_duration: f64,
    pub spawn_cooldown: f64,
    pub muzzle_offset: f64,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            range: TARGETING_RANGE,
            rotation_speed: ROTATION_SPEED,
            return_rotation_speed: RETURN_ROTATION_SPEED,
            fov_angle: FIELD_OF_VIEW,
            damage: BASE_DAMAGE,
            charge_time: BEAM_CHARGE_TIME,
            ray_duration: BEAM_RAY_DURATION,
            ray_length: BEAM_RAY_LENGTH,
            fire_rate: SINGLE_SHOT_FIRE_RATE,
            projectile_speed: SINGLE_SHOT_BULLET_SPEED,
            projectile_lifetime: SINGLE_SHOT_BULLET_LIFETIME,
            wind_up_time: SPREAD_WIND_UP_TIME,
            bullets_per_shot: SPREAD_BULLETS_PER_SHOT,
            spread_angle: SPREAD_ANGLE,
            spawn_duration: HAZARD_SPAWN_DURATION,
            spawn_cooldown: HAZARD_SPAWN_COOLDOWN,
            muzzle_offset: MUZZLE_OFFSET,
        }
    }
}

impl BaseStats {
    /// Defaults with the per-weapon fire rate and projectile tuning applied.
    pub fn for_kind(kind: WeaponKind) -> Self {
        match kind {
            WeaponKind::Spread => Self {
                fire_rate: SPREAD_FIRE_RATE,
                projectile_speed: SPREAD_BULLET_SPEED,
                projectile_lifetime: SPREAD_BULLET_LIFETIME,
                ..Self::default()
            },
            WeaponKind::Beam | WeaponKind::SingleShot | WeaponKind::AreaDenial => Self::default(),
        }
    }

    /// Acquisition half-angle in degrees.
    pub fn fov_half_angle(&self) -> f64 {
        self.fov_angle / 2.0
    }
}

/// Combined product of the live buffs' multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub damage: f64,
    pub range: f64,
    pub fire_rate: f64,
}

impl Multipliers {
    /// The empty product.
    pub const IDENTITY: Multipliers = Multipliers {
        damage: 1.0,
        range: 1.0,
        fire_rate: 1.0,
    };

    pub fn combine(self, other: Multipliers) -> Multipliers {
        Multipliers {
            damage: self.damage * other.damage,
            range: self.range * other.range,
            fire_rate: self.fire_rate * other.fire_rate,
        }
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Operative parameters after buffs. Recomputed whenever the ledger changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub multipliers: Multipliers,
    pub range: f64,
    pub damage: f64,
    pub charge_time: f64,
    pub fire_rate: f64,
    pub bullets_per_shot: u32,
    pub spread_angle: f64,
    pub spawn_duration: f64,
    pub spawn_cooldown: f64,
    pub hazard_prefab: PrefabKind,
}

impl EffectiveStats {
    /// Fold base stats with combined multipliers using the rule table for `kind`.
    ///
    /// | field            | Beam  | SingleShot | Spread          | AreaDenial |
    /// |------------------|-------|------------|-----------------|------------|
    /// | damage           | ×dmg  | ×dmg       | ×dmg            | ×dmg       |
    /// | range            |       |            | ×range          | ×range     |
    /// | charge_time      | ÷rate |            |                 |            |
    /// | fire_rate        |       | ×rate      | ×rate           |            |
    /// | bullets_per_shot |       |            | round(n × dmg)  |            |
    /// | spread_angle     |       |            | ÷range          |            |
    /// | spawn_duration   |       |            |                 | ×rate      |
    /// | spawn_cooldown   |       |            |                 | ÷rate      |
    ///
    /// Bullet count scales with the damage multiplier; there is no dedicated
    /// count multiplier. It is capped at `MAX_BULLETS_PER_SHOT`, and a range
    /// buff below −100 % leaves a zero range rather than a negative one.
    pub fn fold(
        base: &BaseStats,
        kind: WeaponKind,
        multipliers: Multipliers,
        hazard_payload: Option<PrefabKind>,
    ) -> Self {
        let m = multipliers;
        let rate_divisor = m.fire_rate.max(MIN_DIVISOR_MULTIPLIER);
        let range_divisor = m.range.max(MIN_DIVISOR_MULTIPLIER);

        let mut stats = Self {
            multipliers: m,
            range: base.range,
            damage: base.damage * m.damage,
            charge_time: base.charge_time,
            fire_rate: base.fire_rate,
            bullets_per_shot: base.bullets_per_shot,
            spread_angle: base.spread_angle,
            spawn_duration: base.spawn_duration,
            spawn_cooldown: base.spawn_cooldown,
            hazard_prefab: PrefabKind::Flame,
        };

        match kind {
            WeaponKind::Beam => {
                stats.charge_time = base.charge_time / rate_divisor;
            }
            WeaponKind::SingleShot => {
                stats.fire_rate = base.fire_rate * m.fire_rate;
            }
            WeaponKind::Spread => {
                stats.fire_rate = base.fire_rate * m.fire_rate;
                stats.range = (base.range * m.range).max(0.0);
                stats.spread_angle = base.spread_angle / range_divisor;
                let scaled = (f64::from(base.bullets_per_shot) * m.damage).round();
                stats.bullets_per_shot =
                    scaled.clamp(0.0, f64::from(MAX_BULLETS_PER_SHOT)) as u32;
            }
            WeaponKind::AreaDenial => {
                stats.range = (base.range * m.range).max(0.0);
                stats.spawn_duration = base.spawn_duration * m.fire_rate;
                stats.spawn_cooldown = base.spawn_cooldown / rate_divisor;
                if let Some(prefab) = hazard_payload {
                    stats.hazard_prefab = prefab;
                }
            }
        }

        stats
    }

    /// Seconds between shots or bursts. `None` when the weapon cannot fire.
    pub fn fire_interval(&self) -> Option<f64> {
        if self.fire_rate > 0.0 && self.fire_rate.is_finite() {
            Some(1.0 / self.fire_rate)
        } else {
            None
        }
    }
}
