//! SingleShot: one bullet per fire interval while locked.

use bulwark_core::enums::PrefabKind;
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::stats::{BaseStats, EffectiveStats};
use bulwark_core::types::Velocity;

use super::FireContext;
use crate::context::{AudioSink, EntitySpawner, SpawnPayload, SpawnRequest};
use crate::cooldown::Countdown;

#[derive(Debug, Clone, Default)]
pub struct SingleShot {
    /// Time until the next shot. Starts elapsed so a fresh lock fires at once.
    timer: Countdown,
}

impl SingleShot {
    pub fn update(
        &mut self,
        locked: bool,
        stats: &EffectiveStats,
        base: &BaseStats,
        ctx: &mut FireContext<'_>,
    ) {
        if !locked {
            self.timer = Countdown::ELAPSED;
            return;
        }

        let Some(interval) = stats.fire_interval() else {
            return;
        };

        if !self.timer.advance(ctx.dt) {
            return;
        }

        ctx.battlefield.spawn(SpawnRequest {
            prefab: PrefabKind::Bullet,
            position: ctx.muzzle,
            rotation: ctx.facing,
            velocity: Some(Velocity::along(ctx.facing, base.projectile_speed)),
            lifetime: base.projectile_lifetime,
            payload: SpawnPayload::Projectile {
                damage: stats.damage,
                owner: ctx.turret,
            },
        });
        ctx.audio.play(AudioEvent::GunFired { turret: ctx.turret });
        ctx.events.push(CombatEvent::ProjectilesFired {
            turret: ctx.turret,
            count: 1,
            damage: stats.damage,
        });
        tracing::trace!(turret = ctx.turret, damage = stats.damage, "bullet fired");

        self.timer.reset(interval);
    }

    pub fn time_to_next_shot(&self) -> f64 {
        self.timer.remaining().max(0.0)
    }
}
