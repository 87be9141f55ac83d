// Host-side tests for the proximity gate field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod gates {
        include!("../src/core/gates.rs");
    }
}

use crate::constants::*;
use crate::core::gates::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn settle(field: &mut GateField, pointer: Option<Vec2>, seconds: f32) -> Vec<GateVisual> {
    let dt = 1.0 / 60.0;
    let mut out = Vec::new();
    for _ in 0..(seconds / dt) as usize {
        out = field.step(dt, pointer).to_vec();
    }
    out
}

#[test]
fn openness_is_zero_beyond_max_distance() {
    let a = Vec2::new(100.0, 100.0);
    assert_eq!(openness(a, Vec2::new(100.0, 250.0), 150.0), 0.0);
    assert_eq!(openness(a, Vec2::new(400.0, 400.0), 150.0), 0.0);
}

#[test]
fn openness_is_one_at_anchor() {
    let a = Vec2::new(10.0, 20.0);
    assert_eq!(openness(a, a, 150.0), 1.0);
}

#[test]
fn openness_decreases_with_distance() {
    let a = Vec2::ZERO;
    let mut prev = f32::INFINITY;
    for d in [0.0, 10.0, 40.0, 75.0, 120.0, 149.0, 150.0] {
        let o = openness(a, Vec2::new(d, 0.0), 150.0);
        assert!(o <= prev);
        assert!((0.0..=1.0).contains(&o));
        prev = o;
    }
    assert!((openness(a, Vec2::new(75.0, 0.0), 150.0) - 0.5).abs() < 1e-6);
}

#[test]
fn openness_for_nearby_pointer() {
    let o = openness(Vec2::new(400.0, 300.0), Vec2::new(420.0, 310.0), 150.0);
    assert!((o - 0.8509).abs() < 1e-3, "openness={o}");
}

#[test]
fn zero_max_distance_does_not_divide() {
    let a = Vec2::new(5.0, 5.0);
    assert_eq!(openness(a, a, 0.0), 1.0);
    assert_eq!(openness(a, Vec2::new(6.0, 5.0), 0.0), 0.0);
    assert_eq!(openness(a, Vec2::new(6.0, 5.0), -3.0), 0.0);
}

#[test]
fn anchors_fill_viewport_with_configured_ranges() {
    let field = GateField::new(GateConfig::default(), VIEWPORT, 42);
    assert_eq!(field.anchors().len(), GATE_COUNT);
    for a in field.anchors() {
        assert!(a.position.x >= 0.0 && a.position.x < VIEWPORT.x);
        assert!(a.position.y >= 0.0 && a.position.y < VIEWPORT.y);
        assert!(a.rotation_deg >= 0.0 && a.rotation_deg < 360.0);
        assert!(a.size >= GATE_MIN_SIZE && a.size < GATE_MIN_SIZE + GATE_SIZE_SPAN);
    }
}

#[test]
fn same_seed_same_layout() {
    let a = GateField::new(GateConfig::default(), VIEWPORT, 9);
    let b = GateField::new(GateConfig::default(), VIEWPORT, 9);
    assert_eq!(a.anchors(), b.anchors());
}

#[test]
fn regenerate_keeps_count_and_replaces_anchors() {
    let mut field = GateField::new(GateConfig::default(), VIEWPORT, 3);
    let before = field.anchors().to_vec();
    let generation = field.generation();
    let smaller = Vec2::new(640.0, 480.0);
    field.regenerate(smaller);
    assert_eq!(field.anchors().len(), before.len());
    assert_ne!(field.anchors(), &before[..]);
    assert_eq!(field.generation(), generation + 1);
    assert_eq!(field.viewport(), smaller);
    assert!(field
        .anchors()
        .iter()
        .all(|a| a.position.x < smaller.x && a.position.y < smaller.y));
}

#[test]
fn regenerate_discards_open_gate_motion() {
    let mut field = GateField::new(GateConfig::default(), VIEWPORT, 11);
    let under = field.anchors()[0].position;
    let open = settle(&mut field, Some(under), 2.0);
    assert!(open[0].spread > 0.0);
    assert!(open[0].opacity > GATE_REST_OPACITY);

    field.regenerate(VIEWPORT);
    let far = Some(Vec2::new(-1.0e5, -1.0e5));
    for v in field.step(1.0 / 60.0, far) {
        assert_eq!(v.spread, 0.0);
        assert_eq!(v.opacity, GATE_REST_OPACITY);
        assert_eq!(v.glow_opacity, None);
    }
}

#[test]
fn zero_viewport_does_not_panic() {
    let mut field = GateField::new(GateConfig::default(), Vec2::ZERO, 1);
    assert_eq!(field.anchors().len(), GATE_COUNT);
    field.step(1.0 / 60.0, Some(Vec2::ZERO));
}

#[test]
fn no_pointer_keeps_gates_closed() {
    let mut field = GateField::new(GateConfig::default(), VIEWPORT, 5);
    let visuals = settle(&mut field, None, 0.5);
    for v in visuals {
        assert_eq!(v.openness, 0.0);
        assert!(v.spread.abs() < 1e-3);
        assert!((v.opacity - GATE_REST_OPACITY).abs() < 1e-3);
        assert!(v.glow_opacity.is_none());
    }
}

#[test]
fn gate_under_pointer_opens_fully() {
    let cfg = GateConfig {
        count: 1,
        ..GateConfig::default()
    };
    let mut field = GateField::new(cfg, VIEWPORT, 11);
    let at = field.anchors()[0].position;
    let visuals = settle(&mut field, Some(at), 2.0);
    let v = visuals[0];
    assert_eq!(v.openness, 1.0);
    assert!((v.spread - GATE_SPREAD_PX).abs() < 0.05, "spread={}", v.spread);
    assert!((v.opacity - (GATE_REST_OPACITY + GATE_OPEN_OPACITY_GAIN)).abs() < 1e-3);
    let glow = v.glow_opacity.expect("glow visible when open");
    assert!((glow - GATE_GLOW_OPACITY).abs() < 1e-2);
}

#[test]
fn glow_hidden_at_threshold() {
    let cfg = GateConfig {
        count: 1,
        ..GateConfig::default()
    };
    let mut field = GateField::new(cfg, VIEWPORT, 13);
    let at = field.anchors()[0].position;
    // openness just below the glow threshold
    let pointer = at + Vec2::new(cfg.max_distance * 0.96, 0.0);
    let visuals = settle(&mut field, Some(pointer), 0.5);
    assert!(visuals[0].openness <= GATE_GLOW_THRESHOLD);
    assert!(visuals[0].glow_opacity.is_none());
}
