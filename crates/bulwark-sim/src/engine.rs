//! Combat engine: owns the world and the turrets and drives the fixed tick.
//!
//! `CombatEngine` is headless. A host queues commands, calls `tick()` at the
//! configured rate, and renders the returned `CombatSnapshot`.

use std::collections::VecDeque;

use hecs::{Entity, World};

use bulwark_core::commands::TurretCommand;
use bulwark_core::config::{EngineConfig, HostileConfig, ScenarioConfig, TurretConfig};
use bulwark_core::enums::RunState;
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::state::CombatSnapshot;
use bulwark_core::types::{Position, SimTime};

use crate::battlefield::WorldBattlefield;
use crate::buff::Buff;
use crate::systems;
use crate::turret::Turret;
use crate::world_setup;

/// The combat engine. Owns the ECS world, every turret, and sim time.
pub struct CombatEngine {
    world: World,
    time: SimTime,
    dt: f64,
    time_scale: f64,
    run_state: RunState,
    turrets: Vec<Turret>,
    command_queue: VecDeque<TurretCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    combat_events: Vec<CombatEvent>,
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CombatEngine {
    /// Create an empty engine.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            dt: config.dt(),
            time_scale: config.time_scale,
            run_state: RunState::default(),
            turrets: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            combat_events: Vec::new(),
        }
    }

    /// Create an engine with every turret and hostile in `scenario`.
    /// Turret ids follow their order in the scenario.
    pub fn from_scenario(scenario: &ScenarioConfig) -> Self {
        let mut engine = Self::new(scenario.engine);
        for turret in &scenario.turrets {
            engine.add_turret(turret);
        }
        for hostile in &scenario.hostiles {
            engine.spawn_hostile_from(hostile);
        }
        tracing::info!(
            turrets = engine.turrets.len(),
            hostiles = scenario.hostiles.len(),
            tick_rate = scenario.engine.tick_rate,
            "scenario loaded"
        );
        engine
    }

    /// Place a turret and return its id.
    pub fn add_turret(&mut self, config: &TurretConfig) -> u32 {
        let id = self.turrets.len() as u32;
        self.turrets.push(Turret::from_config(id, config));
        id
    }

    /// Spawn a stationary hostile.
    pub fn spawn_hostile(&mut self, position: Position, health: f64) -> Entity {
        world_setup::spawn_hostile(&mut self.world, position, health)
    }

    pub fn spawn_hostile_from(&mut self, config: &HostileConfig) -> Entity {
        world_setup::spawn_from_config(&mut self.world, config)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: TurretCommand) {
        self.command_queue.push_back(command);
    }

    /// Apply a buff right away, stamped with the current sim time.
    /// Returns false for an unknown turret or a non-positive duration.
    pub fn apply_buff(
        &mut self,
        turret_id: u32,
        damage_percent: f64,
        range_percent: f64,
        fire_rate_percent: f64,
        duration_secs: f64,
    ) -> bool {
        let now = self.time.elapsed_secs;
        let Some(turret) = self.turrets.iter_mut().find(|t| t.id() == turret_id) else {
            tracing::warn!(turret = turret_id, "buff for unknown turret ignored");
            return false;
        };
        let buff = Buff::from_percentages(
            damage_percent,
            range_percent,
            fire_rate_percent,
            duration_secs,
        );
        turret.apply_buff(buff, now, &mut self.combat_events)
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> CombatSnapshot {
        self.process_commands();

        if self.run_state == RunState::Running {
            self.run_turrets();
            self.run_systems();
            self.time.advance(self.dt);
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.run_state,
            &self.turrets,
            std::mem::take(&mut self.audio_events),
            std::mem::take(&mut self.combat_events),
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn turret(&self, id: u32) -> Option<&Turret> {
        self.turrets.iter().find(|t| t.id() == id)
    }

    pub fn turrets(&self) -> &[Turret] {
        &self.turrets
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for hosts that move or damage hostiles directly.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: TurretCommand) {
        match command {
            TurretCommand::ApplyBuff {
                turret,
                damage_percent,
                range_percent,
                fire_rate_percent,
                duration_secs,
            } => {
                self.apply_buff(
                    turret,
                    damage_percent,
                    range_percent,
                    fire_rate_percent,
                    duration_secs,
                );
            }
            TurretCommand::Pause => {
                if self.run_state == RunState::Running {
                    tracing::info!(tick = self.time.tick, "paused");
                    self.run_state = RunState::Paused;
                }
            }
            TurretCommand::Resume => {
                if self.run_state == RunState::Paused {
                    tracing::info!(tick = self.time.tick, "resumed");
                    self.run_state = RunState::Running;
                }
            }
        }
    }

    /// Tick every turret in id order against the current world.
    fn run_turrets(&mut self) {
        let now = self.time.elapsed_secs;
        for turret in &mut self.turrets {
            let mut battlefield = WorldBattlefield::new(&mut self.world);
            turret.tick(
                now,
                self.dt,
                &mut battlefield,
                &mut self.audio_events,
                &mut self.combat_events,
            );
        }
    }

    /// Run world systems in order.
    fn run_systems(&mut self) {
        // 1. Projectile and hostile movement
        systems::movement::run(&mut self.world, self.dt);
        // 2. Projectile contact damage
        systems::impact::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Lifetime expiry (bullets, hazards)
        systems::lifetime::run(&mut self.world, self.dt, &mut self.despawn_buffer);
        // 4. Destroyed hostiles
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.combat_events,
        );
    }
}
