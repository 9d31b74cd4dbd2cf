//! Rotation controller: bounded angular steps toward the target bearing,
//! or back to rest facing when nothing is locked.

use bulwark_core::stats::BaseStats;
use bulwark_core::types::{angle_delta, normalize_angle};

/// Two-speed turret traverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationController {
    /// Degrees per second while tracking a target.
    pub rotation_speed: f64,
    /// Degrees per second while returning to rest.
    pub return_rotation_speed: f64,
}

impl RotationController {
    pub fn from_stats(stats: &BaseStats) -> Self {
        Self {
            rotation_speed: stats.rotation_speed,
            return_rotation_speed: stats.return_rotation_speed,
        }
    }

    /// New facing after one tick. `bearing` is the direction to the locked
    /// target, if any.
    pub fn update(&self, facing: f64, rest_facing: f64, bearing: Option<f64>, dt: f64) -> f64 {
        match bearing {
            Some(bearing) => rotate_towards(facing, bearing, self.rotation_speed * dt),
            None => rotate_towards(facing, rest_facing, self.return_rotation_speed * dt),
        }
    }
}

/// Step from `current` toward `target` by at most `max_step` degrees along
/// the shorter arc. Never overshoots.
pub fn rotate_towards(current: f64, target: f64, max_step: f64) -> f64 {
    let delta = angle_delta(current, target);
    let step = max_step.max(0.0);
    if delta.abs() <= step {
        normalize_angle(target)
    } else {
        normalize_angle(current + delta.signum() * step)
    }
}
