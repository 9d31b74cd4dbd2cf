//! State shared between the runner's main thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bulwark_core::commands::TurretCommand;
use bulwark_core::state::CombatSnapshot;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the combat engine.
    Command(TurretCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<CombatSnapshot>>>;

/// Handles held outside the game loop while it runs.
#[derive(Clone)]
pub struct RunnerState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
}

impl RunnerState {
    /// Ask the loop to stop after its current tick.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<CombatSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_state_shutdown_and_latest() {
        let (tx, rx) = mpsc::channel();
        let state = RunnerState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        assert!(state.latest().is_none());

        *state.latest_snapshot.lock().unwrap() = Some(CombatSnapshot::default());
        assert_eq!(state.latest().unwrap().time.tick, 0);

        state.shutdown();
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));

        // Shutting down a loop that already hung up is harmless.
        drop(rx);
        state.shutdown();
    }
}
