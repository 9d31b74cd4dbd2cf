//! Line-delimited JSON command input.
//!
//! Each non-blank line is one `TurretCommand`, e.g.
//! `{"type":"ApplyBuff","turret":0,"damage_percent":50,"range_percent":0,"fire_rate_percent":0,"duration_secs":5}`.
//! Malformed lines are logged and skipped.

use std::io::{self, BufRead};
use std::sync::mpsc;

use bulwark_core::commands::TurretCommand;

use crate::state::GameLoopCommand;

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<TurretCommand>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Forward every command read from `reader` to the game loop until EOF or
/// until the loop hangs up. Returns how many commands were forwarded.
pub fn forward_commands<R: BufRead>(
    reader: R,
    command_tx: &mpsc::Sender<GameLoopCommand>,
) -> io::Result<usize> {
    let mut forwarded = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                tracing::debug!(?command, "command received");
                if command_tx.send(GameLoopCommand::Command(command)).is_err() {
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(line = number + 1, %err, "skipping malformed command");
            }
        }
    }
    Ok(forwarded)
}
