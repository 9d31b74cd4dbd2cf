//! ECS systems that operate on the world after the turrets have acted.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They hold no state of their own.

pub mod cleanup;
pub mod impact;
pub mod lifetime;
pub mod movement;
pub mod snapshot;
