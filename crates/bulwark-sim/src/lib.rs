//! Turret combat engine for BULWARK.
//!
//! Owns the hecs world of hostiles, projectiles, and hazards, drives every
//! turret at a fixed tick rate, and produces `CombatSnapshot`s for the
//! frontend.

pub mod battlefield;
pub mod buff;
pub mod context;
pub mod cooldown;
pub mod engine;
pub mod rotation;
pub mod systems;
pub mod targeting;
pub mod turret;
pub mod weapons;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::CombatEngine;
