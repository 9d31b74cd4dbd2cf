//! Beam: Idle → Charging → Firing → Idle.
//!
//! The charge time scales with the fire-rate multiplier. When the charge
//! runs out, every hostile along a fixed-length ray from the firing port
//! takes the buffed damage once, and the ray is held visible for a fixed
//! duration before the next charge starts.

use bulwark_core::enums::BeamPhase;
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::stats::{BaseStats, EffectiveStats};
use bulwark_core::types::{heading_vector, Position};

use super::FireContext;
use crate::context::{AudioSink, DamageRouter, SpatialQuery};
use crate::cooldown::Countdown;

#[derive(Debug, Clone, Default)]
pub struct Beam {
    phase: BeamPhase,
    /// Charge countdown while Charging, ray hold while Firing.
    timer: Countdown,
}

impl Beam {
    pub fn phase(&self) -> BeamPhase {
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
            if self.phase == BeamPhase::Firing {
                ctx.events.push(CombatEvent::BeamCleared { turret: ctx.turret });
            }
            *self = Self::default();
            return;
        }

        if self.phase == BeamPhase::Idle {
            self.timer = Countdown::start(stats.charge_time);
            self.phase = BeamPhase::Charging;
        }

        match self.phase {
            BeamPhase::Charging => {
                if self.timer.advance(ctx.dt) {
                    self.fire(stats, base, ctx);
                    self.timer = Countdown::start(base.ray_duration);
                    self.phase = BeamPhase::Firing;
                }
            }
            BeamPhase::Firing => {
                if self.timer.advance(ctx.dt) {
                    ctx.events.push(CombatEvent::BeamCleared { turret: ctx.turret });
                    self.phase = BeamPhase::Idle;
                }
            }
            BeamPhase::Idle => {}
        }
    }

    fn fire(&self, stats: &EffectiveStats, base: &BaseStats, ctx: &mut FireContext<'_>) {
        let origin = ctx.muzzle.as_vec();
        let direction = heading_vector(ctx.facing);
        let hits = ctx.battlefield.raycast(origin, direction, base.ray_length);

        let mut landed = 0;
        for target in &hits {
            if ctx.battlefield.apply_damage(*target, stats.damage) {
                landed += 1;
            }
        }

        tracing::debug!(
            turret = ctx.turret,
            hits = landed,
            damage = stats.damage,
            "beam fired"
        );
        ctx.audio.play(AudioEvent::LaserFired { turret: ctx.turret });
        ctx.events.push(CombatEvent::BeamFired {
            turret: ctx.turret,
            origin: ctx.muzzle,
            end: Position::from(origin + direction * base.ray_length),
            hits: landed,
            damage: stats.damage,
        });
    }
}
