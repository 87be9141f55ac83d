// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_timing_is_sane() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(SPRING_SUBSTEP_SEC > 0.0 && SPRING_SUBSTEP_SEC < MAX_FRAME_DT_SEC);
    // the clamped frame must fit into the sub-step budget
    assert!(MAX_FRAME_DT_SEC / SPRING_SUBSTEP_SEC <= SPRING_MAX_SUBSTEPS as f32);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_hover_grows_and_brightens() {
    assert!(CURSOR_RING_HOVER_SIZE > CURSOR_RING_SIZE);
    assert!(CURSOR_RING_HOVER_OPACITY > CURSOR_RING_OPACITY);
    assert!(CURSOR_PRISM_HOVER_SIZE > CURSOR_PRISM_SIZE);
    assert!(CURSOR_PRESS_SCALE > 0.0 && CURSOR_PRESS_SCALE < 1.0);
    assert!(CURSOR_PRISM_SIDES >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gate_opacity_stays_in_unit_range() {
    assert!(GATE_REST_OPACITY + GATE_OPEN_OPACITY_GAIN <= 1.0);
    assert!(GATE_GLOW_OPACITY <= 1.0);
    assert!(GATE_GLOW_THRESHOLD > 0.0 && GATE_GLOW_THRESHOLD < 1.0);
    assert!(GATE_MAX_DISTANCE > 0.0);
    assert!(GATE_MIN_SIZE > 0.0 && GATE_SIZE_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_and_policy_constants() {
    assert!(SCENE_POINTER_LERP > 0.0 && SCENE_POINTER_LERP <= 1.0);
    assert!(SCENE_OPACITY > 0.0 && SCENE_OPACITY <= 1.0);
    assert!(SHARD_ORBIT_MIN > CORE_SIZE);
    assert!(LOW_END_COUNT_SCALE > 0.0 && LOW_END_COUNT_SCALE < 1.0);
    assert!(SCENE_FALLBACK_TINT.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH <= 1.0);
}
