//! Commands sent to the engine from outside the tick.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All externally triggered actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurretCommand {
    /// Card effect: temporary multiplicative boost on one turret.
    /// Ignored when `duration_secs <= 0`.
    ApplyBuff {
        turret: u32,
        damage_percent: f64,
        range_percent: f64,
        fire_rate_percent: f64,
        duration_secs: f64,
    },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
