//! Game loop thread: runs the combat engine at its tick rate and publishes
//! snapshots.
//!
//! Commands arrive via an `mpsc` channel and are queued on the engine
//! before each tick. The latest snapshot is kept in shared state for the
//! main thread to poll.

use std::io;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use bulwark_core::state::CombatSnapshot;
use bulwark_sim::CombatEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Spawns the game loop on a named thread. `max_ticks` bounds the run.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: CombatEngine,
    latest_snapshot: SharedSnapshot,
    max_ticks: Option<u64>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot, max_ticks);
        })?;

    Ok((cmd_tx, handle))
}

/// Wall-clock duration of one tick at the given time scale.
pub fn tick_duration(dt: f64, time_scale: f64) -> Duration {
    let nominal = Duration::from_secs_f64(dt);
    if time_scale > 0.001 {
        nominal.div_f64(time_scale)
    } else {
        nominal
    }
}

/// Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop(
    mut engine: CombatEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<CombatSnapshot>>,
    max_ticks: Option<u64>,
) {
    let tick_len = tick_duration(engine.dt(), engine.time_scale());
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;
    tracing::info!(?tick_len, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(ticks, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (the engine handles pause internally)
        let snapshot = engine.tick();
        ticks += 1;
        for event in &snapshot.combat_events {
            tracing::trace!(?event, "combat event");
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|max| ticks >= max) {
            tracing::info!(ticks, "tick limit reached");
            return;
        }

        // 4. Sleep until the next tick
        next_tick_time += tick_len;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_len * 2 {
            // Too far behind; reset instead of spiralling into catch-up
            next_tick_time = now;
        }
    }
}
