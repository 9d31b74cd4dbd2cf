//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Targeting and rotation ---

/// Default acquisition radius in world units.
pub const TARGETING_RANGE: f64 = 5.0;

/// Turn rate toward a locked target (degrees per second).
pub const ROTATION_SPEED: f64 = 5.0;

/// Turn rate back to rest facing while unlocked (degrees per second).
pub const RETURN_ROTATION_SPEED: f64 = 2.0;

/// Full field-of-view cone width in degrees. Acquisition uses half of it.
pub const FIELD_OF_VIEW: f64 = 90.0;

/// Distance from turret pivot to firing port.
pub const MUZZLE_OFFSET: f64 = 0.5;

// --- Shared ---

/// Base damage per hit.
pub const BASE_DAMAGE: f64 = 5.0;

// --- Beam ---

/// Charge time before the ray fires (seconds).
pub const BEAM_CHARGE_TIME: f64 = 1.5;

/// How long the ray stays visible after firing (seconds).
pub const BEAM_RAY_DURATION: f64 = 0.3;

/// Ray length in world units.
pub const BEAM_RAY_LENGTH: f64 = 10.0;

// --- SingleShot ---

/// Shots per second.
pub const SINGLE_SHOT_FIRE_RATE: f64 = 5.0;

pub const SINGLE_SHOT_BULLET_SPEED: f64 = 5.0;

/// Bullet auto-despawn time (seconds).
pub const SINGLE_SHOT_BULLET_LIFETIME: f64 = 3.0;

// --- Spread ---

/// Bursts per second.
pub const SPREAD_FIRE_RATE: f64 = 0.2;

pub const SPREAD_WIND_UP_TIME: f64 = 1.5;

pub const SPREAD_BULLETS_PER_SHOT: u32 = 5;

/// Upper bound on a buffed burst.
pub const MAX_BULLETS_PER_SHOT: u32 = 64;

/// Total fan width in degrees.
pub const SPREAD_ANGLE: f64 = 30.0;

pub const SPREAD_BULLET_SPEED: f64 = 8.0;

pub const SPREAD_BULLET_LIFETIME: f64 = 4.0;

// --- AreaDenial ---

/// Hazard lifetime (seconds).
pub const HAZARD_SPAWN_DURATION: f64 = 2.0;

/// Cooldown between hazard spawns, counted from the spawn (seconds).
pub const HAZARD_SPAWN_COOLDOWN: f64 = 3.0;

// --- Buffs ---

/// Smallest multiplier used as a divisor. Keeps −100 % buffs finite.
pub const MIN_DIVISOR_MULTIPLIER: f64 = 0.05;

// --- Hostiles ---

/// Default collider radius for hostiles.
pub const HOSTILE_RADIUS: f64 = 0.25;

/// Default hostile health.
pub const HOSTILE_HEALTH: f64 = 20.0;

/// Projectile contact radius (added to the hostile collider).
pub const PROJECTILE_RADIUS: f64 = 0.05;
