//! Combat snapshot: the complete visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{RunState, WeaponKind, WeaponPhase};
use crate::events::{AudioEvent, CombatEvent};
use crate::stats::EffectiveStats;
use crate::types::{Position, SimTime};

/// Complete combat state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub run_state: RunState,
    pub turrets: Vec<TurretView>,
    pub hostiles: Vec<HostileView>,
    pub audio_events: Vec<AudioEvent>,
    pub combat_events: Vec<CombatEvent>,
}

/// One turret as seen by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub id: u32,
    pub kind: WeaponKind,
    pub position: Position,
    /// Current facing (degrees).
    pub facing: f64,
    pub rest_facing: f64,
    /// Locked target handle bits, if any.
    pub target: Option<u64>,
    pub phase: WeaponPhase,
    pub stats: EffectiveStats,
    pub buffs: Vec<BuffView>,
}

/// A live buff on a turret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffView {
    pub damage_multiplier: f64,
    pub range_multiplier: f64,
    pub fire_rate_multiplier: f64,
    pub expires_at: f64,
}

/// A hostile entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub entity: u64,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
}
