//! Spread: a wind-up, then repeated bursts fanned across the spread angle.

use bulwark_core::enums::{PrefabKind, SpreadPhase};
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::stats::{BaseStats, EffectiveStats};
use bulwark_core::types::{normalize_angle, Velocity};

use super::FireContext;
use crate::context::{AudioSink, EntitySpawner, SpawnPayload, SpawnRequest};
use crate::cooldown::Countdown;

/// Offsets in degrees, relative to the firing axis, for a burst of `count`
/// bullets spread evenly across `spread` degrees. Bullet `i` sits at
/// `-spread/2 + i * spread/(count-1)`. One bullet or fewer fires straight.
pub fn spread_angles(count: u32, spread: f64) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0];
    }
    let step = spread / f64::from(count - 1);
    (0..count)
        .map(|i| -spread / 2.0 + f64::from(i) * step)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Spread {
    phase: SpreadPhase,
    wind_up: Countdown,
    /// Time until the next burst once winding up is done.
    fire: Countdown,
}

impl Spread {
    pub fn phase(&self) -> SpreadPhase {
        self.phase
    }

    pub fn update(
        &mut self,
        locked: bool,
        stats: &EffectiveStats,
        base: &BaseStats,
        ctx: &mut FireContext<'_>,
    ) {
        if !locked {
            *self = Self::default();
            return;
        }

        if self.phase == SpreadPhase::Idle {
            self.wind_up = Countdown::start(base.wind_up_time);
            self.fire = Countdown::ELAPSED;
            self.phase = SpreadPhase::WindingUp;
        }

        if self.phase == SpreadPhase::WindingUp {
            if !self.wind_up.advance(ctx.dt) {
                return;
            }
            tracing::debug!(turret = ctx.turret, "spread wound up");
            self.phase = SpreadPhase::Bursting;
        }

        let Some(interval) = stats.fire_interval() else {
            return;
        };
        if self.fire.advance(ctx.dt) {
            self.burst(stats, base, ctx);
            self.fire.reset(interval);
        }
    }

    fn burst(&self, stats: &EffectiveStats, base: &BaseStats, ctx: &mut FireContext<'_>) {
        let angles = spread_angles(stats.bullets_per_shot, stats.spread_angle);
        for offset in &angles {
            let heading = normalize_angle(ctx.facing + offset);
            ctx.battlefield.spawn(SpawnRequest {
                prefab: PrefabKind::MachineBullet,
                position: ctx.muzzle,
                rotation: heading,
                velocity: Some(Velocity::along(heading, base.projectile_speed)),
                lifetime: base.projectile_lifetime,
                payload: SpawnPayload::Projectile {
                    damage: stats.damage,
                    owner: ctx.turret,
                },
            });
        }

        let count = angles.len() as u32;
        tracing::debug!(
            turret = ctx.turret,
            count,
            spread = stats.spread_angle,
            "spread burst"
        );
        ctx.audio.play(AudioEvent::MachineGunFired { turret: ctx.turret });
        ctx.events.push(CombatEvent::ProjectilesFired {
            turret: ctx.turret,
            count,
            damage: stats.damage,
        });
    }
}
