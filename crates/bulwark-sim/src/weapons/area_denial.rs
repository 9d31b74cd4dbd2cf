//! AreaDenial: keeps one hazard alive at the firing port, then cools down.
//!
//! The hazard's lifetime belongs to the spawner. The weapon only holds a
//! generation-checked handle and asks whether it is still alive; once it is
//! gone the handle is dropped and the weapon waits out the rest of the
//! cooldown, which started the moment the hazard was spawned.

use hecs::Entity;

use bulwark_core::enums::HazardPhase;
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::stats::EffectiveStats;

use super::FireContext;
use crate::context::{AudioSink, EntitySpawner, SpawnPayload, SpawnRequest};
use crate::cooldown::Countdown;

#[derive(Debug, Clone, Default)]
pub struct AreaDenial {
    phase: HazardPhase,
    hazard: Option<Entity>,
    cooldown: Countdown,
}

impl AreaDenial {
    pub fn phase(&self) -> HazardPhase {
        self.phase
    }

    /// The live hazard, if any.
    pub fn hazard(&self) -> Option<Entity> {
        self.hazard
    }

    pub fn update(&mut self, locked: bool, stats: &EffectiveStats, ctx: &mut FireContext<'_>) {
        self.cooldown.advance(ctx.dt);

        // A live hazard follows the port even without a lock.
        if let Some(hazard) = self.hazard {
            if ctx.battlefield.is_alive(hazard) {
                ctx.battlefield.place(hazard, ctx.muzzle, ctx.facing);
            } else {
                tracing::debug!(turret = ctx.turret, "hazard expired");
                ctx.events.push(CombatEvent::HazardExpired { turret: ctx.turret });
                self.hazard = None;
            }
        }

        self.phase = self.derive_phase();

        if locked && self.phase == HazardPhase::Idle {
            self.ignite(stats, ctx);
            self.phase = HazardPhase::Active;
        }
    }

    fn derive_phase(&self) -> HazardPhase {
        if self.hazard.is_some() {
            HazardPhase::Active
        } else if !self.cooldown.is_elapsed() {
            HazardPhase::Cooldown
        } else {
            HazardPhase::Idle
        }
    }

    fn ignite(&mut self, stats: &EffectiveStats, ctx: &mut FireContext<'_>) {
        let hazard = ctx.battlefield.spawn(SpawnRequest {
            prefab: stats.hazard_prefab,
            position: ctx.muzzle,
            rotation: ctx.facing,
            velocity: None,
            lifetime: stats.spawn_duration,
            payload: SpawnPayload::Hazard {
                damage: stats.damage,
                owner: ctx.turret,
            },
        });
        self.hazard = Some(hazard);
        self.cooldown = Countdown::start(stats.spawn_cooldown);

        tracing::debug!(
            turret = ctx.turret,
            prefab = ?stats.hazard_prefab,
            duration = stats.spawn_duration,
            cooldown = stats.spawn_cooldown,
            "hazard spawned"
        );
        ctx.audio.play(AudioEvent::HazardIgnited { turret: ctx.turret });
        ctx.events.push(CombatEvent::HazardSpawned {
            turret: ctx.turret,
            prefab: stats.hazard_prefab,
        });
    }
}
