//! Core types and definitions for the BULWARK turret combat core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, stat blocks, commands, events, snapshots,
//! configuration, and constants. It has no dependency on the ECS.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
