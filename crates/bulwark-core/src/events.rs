//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PrefabKind;
use crate::types::Position;

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Beam ray discharged.
    LaserFired { turret: u32 },
    /// SingleShot bullet fired.
    GunFired { turret: u32 },
    /// Spread burst fired.
    MachineGunFired { turret: u32 },
    /// AreaDenial hazard spawned.
    HazardIgnited { turret: u32 },
}

/// Gameplay events for UI and debugging.
///
/// Entity handles are reported as their `u64` bit representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    BuffApplied { turret: u32, expires_at: f64 },
    BuffsExpired { turret: u32, count: usize },
    TargetAcquired { turret: u32, target: u64 },
    TargetLost { turret: u32 },
    BeamFired {
        turret: u32,
        origin: Position,
        end: Position,
        hits: u32,
        damage: f64,
    },
    /// The ray's visible hold ended or was cut short by losing the target.
    BeamCleared { turret: u32 },
    ProjectilesFired { turret: u32, count: u32, damage: f64 },
    HazardSpawned { turret: u32, prefab: PrefabKind },
    HazardExpired { turret: u32 },
    HostileDestroyed { entity: u64 },
}
