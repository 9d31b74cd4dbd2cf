//! Fundamental geometric and simulation types.
//!
//! Angles are degrees. A facing of 0° points along +Y and angles grow
//! counter-clockwise, so a facing of 90° points along −X.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Bearing (facing angle) that would point from `self` at `other`.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        bearing_of(other.as_vec() - self.as_vec())
    }

    /// The point `distance` units ahead along `facing_deg`.
    pub fn offset_along(&self, facing_deg: f64, distance: f64) -> Position {
        Position::from(self.as_vec() + heading_vector(facing_deg) * distance)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `facing_deg`.
    pub fn along(facing_deg: f64, speed: f64) -> Self {
        let v = heading_vector(facing_deg) * speed;
        Self { x: v.x, y: v.y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Unit vector for a facing angle in degrees.
pub fn heading_vector(facing_deg: f64) -> DVec2 {
    let rad = facing_deg.to_radians();
    DVec2::new(-rad.sin(), rad.cos())
}

/// Facing angle in degrees of a direction vector, normalized to (−180, 180].
/// A zero vector maps to 0°.
pub fn bearing_of(direction: DVec2) -> f64 {
    if direction == DVec2::ZERO {
        return 0.0;
    }
    normalize_angle(direction.y.atan2(direction.x).to_degrees() - 90.0)
}

/// Wrap an angle into (−180, 180].
pub fn normalize_angle(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in (−180, 180].
pub fn angle_delta(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Unsigned angle in degrees between a facing and a direction vector.
/// A zero direction is treated as dead ahead.
pub fn angle_off_facing(facing_deg: f64, direction: DVec2) -> f64 {
    if direction == DVec2::ZERO {
        return 0.0;
    }
    let forward = heading_vector(facing_deg);
    forward
        .perp_dot(direction)
        .atan2(forward.dot(direction))
        .abs()
        .to_degrees()
}
