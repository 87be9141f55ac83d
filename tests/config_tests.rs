// Host-side tests for runtime configuration and the device policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
    pub mod gates {
        include!("../src/core/gates.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use crate::config::*;
use crate::constants::*;
use crate::core::cursor::CursorVariant;
use crate::core::scene::SceneVariant;

#[test]
fn defaults_come_from_constants() {
    let c = FxConfig::default();
    assert!(c.cursor_enabled);
    assert_eq!(c.cursor, CursorVariant::DotRing);
    assert_eq!(c.scene, Some(SceneVariant::Constellation));
    assert!(c.gates_enabled);
    assert_eq!(c.gates.count, GATE_COUNT);
    assert_eq!(c.gates.max_distance, GATE_MAX_DISTANCE);
    assert_eq!(c.scene_config.particle_count, PARTICLE_COUNT);
    assert_eq!(c.magnetic_strength, MAGNETIC_STRENGTH);
    assert_eq!(c.seed, None);
    assert_eq!(c.log_level, log::Level::Info);
}

#[test]
fn attribute_overrides_apply() {
    let mut c = FxConfig::default();
    c.apply_overrides([
        ("data-fx-cursor", "prism"),
        ("data-fx-scene", "knot"),
        ("data-fx-gates", "24"),
        ("data-fx-gate-distance", "200"),
        ("magnetic", "0.5"),
        ("particles", "300"),
        ("shards", "4"),
        ("seed", "1234"),
        ("log", "debug"),
    ])
    .expect("valid overrides");
    assert_eq!(c.cursor, CursorVariant::Prism);
    assert_eq!(c.scene, Some(SceneVariant::Knot));
    assert_eq!(c.gates.count, 24);
    assert!(c.gates_enabled);
    assert_eq!(c.gates.max_distance, 200.0);
    assert_eq!(c.magnetic_strength, 0.5);
    assert_eq!(c.scene_config.particle_count, 300);
    assert_eq!(c.scene_config.shard_count, 4);
    assert_eq!(c.seed, Some(1234));
    assert_eq!(c.log_level, log::Level::Debug);
}

#[test]
fn features_can_be_switched_off() {
    let mut c = FxConfig::default();
    c.apply_overrides([("cursor", "off"), ("scene", "none"), ("gates", "off")])
        .expect("valid overrides");
    assert!(!c.cursor_enabled);
    assert_eq!(c.scene, None);
    assert!(!c.gates_enabled);
}

#[test]
fn unknown_key_is_rejected() {
    let mut c = FxConfig::default();
    let err = c.apply_overrides([("data-fx-sparkles", "on")]).unwrap_err();
    assert_eq!(err, ConfigError::UnknownKey("sparkles".into()));
    assert_eq!(err.to_string(), "unknown option `sparkles`");
}

#[test]
fn bad_values_are_rejected_and_earlier_pairs_kept() {
    let mut c = FxConfig::default();
    let err = c
        .apply_overrides([("particles", "120"), ("magnetic", "1.5"), ("seed", "7")])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "magnetic".into(),
            value: "1.5".into()
        }
    );
    assert_eq!(c.scene_config.particle_count, 120);
    assert_eq!(c.magnetic_strength, MAGNETIC_STRENGTH);
    assert_eq!(c.seed, None);

    for (k, v) in [
        ("cursor", "sparkle"),
        ("scene", "plasma"),
        ("gates", "many"),
        ("gate-distance", "0"),
        ("gate-distance", "-4"),
        ("particles", "-1"),
        ("log", "loud"),
    ] {
        let mut c = FxConfig::default();
        assert!(c.apply_overrides([(k, v)]).is_err(), "{k}={v} accepted");
    }
}

#[test]
fn coarse_pointer_disables_cursor_only() {
    let mut c = FxConfig::default();
    c.adjust_for_device(DeviceHints {
        coarse_pointer: true,
        ..DeviceHints::default()
    });
    assert!(!c.cursor_enabled);
    assert!(c.scene.is_some());
    assert!(c.gates_enabled);
}

#[test]
fn reduced_motion_drops_scene_and_gates() {
    let mut c = FxConfig::default();
    c.adjust_for_device(DeviceHints {
        reduced_motion: true,
        cores: 8,
        ..DeviceHints::default()
    });
    assert_eq!(c.scene, None);
    assert!(!c.gates_enabled);
    assert!(c.cursor_enabled);
    assert_eq!(c.gates.count, GATE_COUNT);
}

#[test]
fn low_core_count_halves_decoration() {
    let mut c = FxConfig::default();
    c.adjust_for_device(DeviceHints {
        cores: 2,
        ..DeviceHints::default()
    });
    assert_eq!(c.gates.count, GATE_COUNT / 2);
    assert_eq!(c.scene_config.particle_count, PARTICLE_COUNT / 2);
    assert_eq!(c.scene_config.shard_count, SHARD_COUNT / 2);

    // unknown core count leaves counts alone
    let mut c = FxConfig::default();
    c.adjust_for_device(DeviceHints::default());
    assert_eq!(c.gates.count, GATE_COUNT);
}

#[test]
fn css_colors_parse() {
    assert_eq!(parse_css_color("#fff"), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_css_color(" #000000 "), Some([0.0, 0.0, 0.0]));
    let c = parse_css_color("rgb(255, 0, 51)").expect("rgb");
    assert!((c[0] - 1.0).abs() < 1e-6 && c[1] == 0.0 && (c[2] - 0.2).abs() < 1e-6);
    assert!(parse_css_color("rgba(10 20 30 / 0.5)").is_some());
    assert_eq!(parse_css_color("#12"), None);
    assert_eq!(parse_css_color("tomato"), None);
    assert_eq!(parse_css_color(""), None);
}
