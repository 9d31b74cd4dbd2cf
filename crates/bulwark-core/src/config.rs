//! Scenario and engine configuration, loaded from JSON.
//!
//! Only structural problems are rejected here. Odd tuning values (zero
//! bullets, negative cooldowns) are accepted and clamped where they are used.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{HOSTILE_HEALTH, HOSTILE_RADIUS, TICK_RATE};
use crate::enums::WeaponKind;
use crate::stats::BaseStats;
use crate::types::{Position, Velocity};

/// Errors raised while loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The scenario is not valid JSON for this schema.
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// The scenario parsed but cannot drive a simulation.
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// Engine timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed ticks per simulated second.
    pub tick_rate: u32,
    /// Wall-clock pacing factor for the game loop (1.0 = real time).
    pub time_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            time_scale: 1.0,
        }
    }
}

impl EngineConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }
}

/// One turret placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretConfig {
    pub kind: WeaponKind,
    pub position: Position,
    /// Mount orientation in degrees. The FOV cone is centered on it.
    #[serde(default)]
    pub rest_facing: f64,
    /// Omitted fields fall back to generic defaults; an omitted block uses
    /// `BaseStats::for_kind`.
    #[serde(default)]
    pub stats: Option<BaseStats>,
}

impl TurretConfig {
    pub fn new(kind: WeaponKind, position: Position, rest_facing: f64) -> Self {
        Self {
            kind,
            position,
            rest_facing,
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Base stats this turret is created with.
    pub fn base_stats(&self) -> BaseStats {
        self.stats.unwrap_or_else(|| BaseStats::for_kind(self.kind))
    }
}

/// One hostile present at scenario start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostileConfig {
    pub position: Position,
    #[serde(default = "default_hostile_health")]
    pub health: f64,
    #[serde(default = "default_hostile_radius")]
    pub radius: f64,
    #[serde(default)]
    pub velocity: Velocity,
}

fn default_hostile_health() -> f64 {
    HOSTILE_HEALTH
}

fn default_hostile_radius() -> f64 {
    HOSTILE_RADIUS
}

/// Everything needed to start a combat simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub turrets: Vec<TurretConfig>,
    #[serde(default)]
    pub hostiles: Vec<HostileConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let scenario: ScenarioConfig = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse, and validate a scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject scenarios the engine cannot step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        if !(self.engine.time_scale.is_finite() && self.engine.time_scale > 0.0) {
            return Err(ConfigError::Invalid(
                "time_scale must be a positive number".into(),
            ));
        }
        for (i, turret) in self.turrets.iter().enumerate() {
            if !turret.position.is_finite() || !turret.rest_facing.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "turret {i} has a non-finite placement"
                )));
            }
        }
        for (i, hostile) in self.hostiles.iter().enumerate() {
            if !hostile.position.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "hostile {i} has a non-finite position"
                )));
            }
        }
        Ok(())
    }
}
