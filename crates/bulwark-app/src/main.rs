//! `bulwark-app <scenario.json> [seconds]`
//!
//! Loads a scenario, runs it in real time, forwards JSON commands from
//! stdin, and prints the final snapshot as JSON on stdout. Without a
//! duration the run ends when stdin closes.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bulwark_app::game_loop;
use bulwark_app::ipc;
use bulwark_app::state::{RunnerState, SharedSnapshot};
use bulwark_core::config::ScenarioConfig;
use bulwark_sim::CombatEngine;

#[derive(Parser)]
#[command(name = "bulwark-app")]
#[command(about = "Run a BULWARK turret combat scenario headless")]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,
    /// Simulated seconds to run; omit to run until stdin closes
    seconds: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let scenario = ScenarioConfig::from_path(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let engine = CombatEngine::from_scenario(&scenario);

    let max_ticks = match args.seconds {
        Some(secs) if secs.is_finite() && secs > 0.0 => {
            Some((secs * f64::from(scenario.engine.tick_rate)).ceil() as u64)
        }
        Some(secs) => return Err(anyhow!("duration must be a positive number, got {secs}")),
        None => None,
    };

    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (command_tx, handle) =
        game_loop::spawn_game_loop(engine, Arc::clone(&latest), max_ticks)
            .context("spawning game loop")?;
    let runner = RunnerState {
        command_tx,
        latest_snapshot: latest,
    };

    let reader = runner.clone();
    let shutdown_on_eof = max_ticks.is_none();
    std::thread::Builder::new()
        .name("bulwark-stdin".into())
        .spawn(move || {
            match ipc::forward_commands(std::io::stdin().lock(), &reader.command_tx) {
                Ok(count) => tracing::debug!(count, "stdin closed"),
                Err(err) => tracing::warn!(%err, "stdin read failed"),
            }
            if shutdown_on_eof {
                reader.shutdown();
            }
        })
        .context("spawning stdin reader")?;

    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    let snapshot = runner
        .latest()
        .ok_or_else(|| anyhow!("simulation produced no snapshot"))?;
    tracing::info!(
        tick = snapshot.time.tick,
        elapsed_secs = snapshot.time.elapsed_secs,
        "run finished"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?
    );
    Ok(())
}
