#[cfg(test)]
mod tests {
    use crate::commands::TurretCommand;
    use crate::config::{ConfigError, ScenarioConfig, TurretConfig};
    use crate::enums::*;
    use crate::events::{AudioEvent, CombatEvent};
    use crate::state::CombatSnapshot;
    use crate::stats::BaseStats;
    use crate::types::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_weapon_kind_serde() {
        let variants = vec![
            WeaponKind::Beam,
            WeaponKind::SingleShot,
            WeaponKind::Spread,
            WeaponKind::AreaDenial,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_phase_serde() {
        let variants = vec![
            WeaponPhase::Beam(BeamPhase::Charging),
            WeaponPhase::SingleShot,
            WeaponPhase::Spread(SpreadPhase::WindingUp),
            WeaponPhase::AreaDenial(HazardPhase::Cooldown),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_apply_buff_command_from_json() {
        let json = r#"{"type":"ApplyBuff","turret":2,"damage_percent":50.0,
            "range_percent":0.0,"fire_rate_percent":25.0,"duration_secs":5.0}"#;
        let cmd: TurretCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            TurretCommand::ApplyBuff {
                turret: 2,
                damage_percent: 50.0,
                range_percent: 0.0,
                fire_rate_percent: 25.0,
                duration_secs: 5.0,
            }
        );

        let pause: TurretCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert_eq!(pause, TurretCommand::Pause);
    }

    #[test]
    fn test_events_are_tagged() {
        let audio = serde_json::to_value(AudioEvent::LaserFired { turret: 1 }).unwrap();
        assert_eq!(audio["type"], "LaserFired");

        let combat = serde_json::to_value(CombatEvent::TargetLost { turret: 3 }).unwrap();
        assert_eq!(combat["type"], "TargetLost");
        assert_eq!(combat["turret"], 3);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = CombatSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CombatSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.turrets.is_empty());
        assert_eq!(back.run_state, RunState::Running);
    }

    // ---- Geometry ----

    #[test]
    fn test_heading_vector_convention() {
        let up = heading_vector(0.0);
        assert!(approx(up.x, 0.0) && approx(up.y, 1.0));
        let left = heading_vector(90.0);
        assert!(approx(left.x, -1.0) && approx(left.y, 0.0));
    }

    #[test]
    fn test_bearing_to_matches_heading() {
        let origin = Position::new(0.0, 0.0);
        for facing in [-135.0, -90.0, -10.0, 0.0, 45.0, 90.0, 170.0] {
            let point = origin.offset_along(facing, 3.0);
            assert!(
                approx(origin.bearing_to(&point), facing),
                "bearing for facing {facing} was {}",
                origin.bearing_to(&point)
            );
        }
    }

    #[test]
    fn test_normalize_angle_range() {
        assert!(approx(normalize_angle(190.0), -170.0));
        assert!(approx(normalize_angle(-190.0), 170.0));
        assert!(approx(normalize_angle(180.0), 180.0));
        assert!(approx(normalize_angle(-180.0), 180.0));
        assert!(approx(normalize_angle(720.0), 0.0));
    }

    #[test]
    fn test_angle_delta_takes_short_way() {
        assert!(approx(angle_delta(170.0, -170.0), 20.0));
        assert!(approx(angle_delta(-170.0, 170.0), -20.0));
        assert!(approx(angle_delta(0.0, 90.0), 90.0));
    }

    #[test]
    fn test_angle_off_facing() {
        let dir = heading_vector(30.0);
        assert!(approx(angle_off_facing(0.0, dir), 30.0));
        assert!(approx(angle_off_facing(60.0, dir), 30.0));
        assert!(approx(angle_off_facing(0.0, glam::DVec2::ZERO), 0.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..50 {
            time.advance(0.02);
        }
        assert_eq!(time.tick, 50);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Config ----

    #[test]
    fn test_scenario_defaults_fill_in() {
        let json = r#"{
            "turrets": [
                {"kind": "Spread", "position": {"x": 1.0, "y": 2.0}},
                {"kind": "Beam", "position": {"x": 0.0, "y": 0.0}, "rest_facing": 90.0,
                 "stats": {"damage": 12.0}}
            ],
            "hostiles": [{"position": {"x": 0.0, "y": 4.0}}]
        }"#;
        let scenario = ScenarioConfig::from_json_str(json).unwrap();
        assert_eq!(scenario.engine.tick_rate, crate::constants::TICK_RATE);
        assert_eq!(scenario.turrets.len(), 2);

        let spread = scenario.turrets[0].base_stats();
        assert_eq!(spread, BaseStats::for_kind(WeaponKind::Spread));

        let beam = scenario.turrets[1].base_stats();
        assert!(approx(beam.damage, 12.0));
        assert!(approx(beam.charge_time, crate::constants::BEAM_CHARGE_TIME));

        let hostile = &scenario.hostiles[0];
        assert!(approx(hostile.health, crate::constants::HOSTILE_HEALTH));
        assert!(approx(hostile.radius, crate::constants::HOSTILE_RADIUS));
    }

    #[test]
    fn test_scenario_rejects_zero_tick_rate() {
        let json = r#"{"engine": {"tick_rate": 0}}"#;
        let err = ScenarioConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_scenario_parse_error() {
        let err = ScenarioConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_scenario_missing_file() {
        let err = ScenarioConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_turret_config_builder() {
        let stats = BaseStats {
            range: 9.0,
            ..BaseStats::default()
        };
        let config = TurretConfig::new(WeaponKind::AreaDenial, Position::new(1.0, 1.0), 45.0)
            .with_stats(stats);
        assert!(approx(config.base_stats().range, 9.0));
    }
}
