//! BULWARK headless runner.
//!
//! Runs the combat engine on its own thread at a fixed rate, forwards
//! JSON commands read from a line stream, and exposes the latest snapshot.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use bulwark_core as core;
