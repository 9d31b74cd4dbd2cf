//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon fitted to a turret. Fixed for the turret's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Charged hitscan ray.
    #[default]
    Beam,
    /// One projectile per fire interval.
    SingleShot,
    /// Multi-projectile bursts after a wind-up.
    Spread,
    /// Persistent hazard that follows the turret's aim.
    AreaDenial,
}

/// What a spawned entity is. The renderer maps these to sprites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefabKind {
    #[default]
    Bullet,
    MachineBullet,
    Flame,
    /// AreaDenial hazard while a positive range buff is live.
    UpgradedFlame,
}

/// Beam weapon phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamPhase {
    #[default]
    Idle,
    Charging,
    Firing,
}

/// Spread weapon phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadPhase {
    #[default]
    Idle,
    WindingUp,
    Bursting,
}

/// AreaDenial weapon phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardPhase {
    #[default]
    Idle,
    Active,
    Cooldown,
}

/// Externally visible weapon phase, one variant per weapon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "phase")]
pub enum WeaponPhase {
    Beam(BeamPhase),
    /// SingleShot has no phases beyond "locked or not".
    SingleShot,
    Spread(SpreadPhase),
    AreaDenial(HazardPhase),
}

/// Top-level run state of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}
