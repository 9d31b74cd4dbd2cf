//! Snapshot system: builds a `CombatSnapshot` from the turrets and world.
//!
//! Read-only; never modifies the world.

use hecs::World;

use bulwark_core::components::{Health, Hostile};
use bulwark_core::enums::RunState;
use bulwark_core::events::{AudioEvent, CombatEvent};
use bulwark_core::state::{CombatSnapshot, HostileView};
use bulwark_core::types::{Position, SimTime};

use crate::turret::Turret;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    run_state: RunState,
    turrets: &[Turret],
    audio_events: Vec<AudioEvent>,
    combat_events: Vec<CombatEvent>,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        run_state,
        turrets: turrets.iter().map(Turret::view).collect(),
        hostiles: build_hostiles(world),
        audio_events,
        combat_events,
    }
}

/// Hostile views ordered by handle.
fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut hostiles: Vec<HostileView> = world
        .query::<(&Position, &Health, &Hostile)>()
        .iter()
        .map(|(entity, (pos, health, _))| HostileView {
            entity: entity.to_bits().get(),
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
        .collect();
    hostiles.sort_by_key(|h| h.entity);
    hostiles
}
