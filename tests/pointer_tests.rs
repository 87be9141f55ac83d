// Host-side tests for the shared input store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pointer {
    include!("../src/core/pointer.rs");
}

use glam::Vec2;
use pointer::*;

#[test]
fn reader_sees_latest_writes() {
    let store = InputStore::new(Vec2::new(1000.0, 500.0));
    let reader = store.reader();
    let before = reader.snapshot();
    assert!(!before.pointer_seen);
    assert!(!before.pressed);

    store.record_pointer(10.0, 20.0);
    store.record_pointer(300.0, 250.0);
    store.set_pressed(true);
    store.set_scroll(1200.0);

    let snap = reader.snapshot();
    assert!(snap.pointer_seen);
    assert_eq!(snap.pointer, PointerSample::new(300.0, 250.0));
    assert!(snap.pressed);
    assert_eq!(snap.scroll_y, 1200.0);
    assert_eq!(snap.viewport, Vec2::new(1000.0, 500.0));
    // the earlier snapshot is a copy, not a view
    assert!(!before.pointer_seen);
}

#[test]
fn non_finite_samples_keep_last_value() {
    let store = InputStore::new(Vec2::new(100.0, 100.0));
    store.record_pointer(5.0, 6.0);
    store.record_pointer(f32::NAN, 1.0);
    store.set_scroll(f32::INFINITY);
    let snap = store.reader().snapshot();
    assert_eq!(snap.pointer.as_vec2(), Vec2::new(5.0, 6.0));
    assert_eq!(snap.scroll_y, 0.0);
}

#[test]
fn ndc_maps_corners_with_y_up() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(PointerSample::new(0.0, 0.0).to_ndc(vp), Vec2::new(-1.0, 1.0));
    assert_eq!(PointerSample::new(800.0, 600.0).to_ndc(vp), Vec2::new(1.0, -1.0));
    assert_eq!(PointerSample::new(400.0, 300.0).to_ndc(vp), Vec2::ZERO);
    // outside the viewport clamps to the edge
    assert_eq!(PointerSample::new(-50.0, 900.0).to_ndc(vp), Vec2::new(-1.0, -1.0));
}

#[test]
fn zero_viewport_maps_to_origin() {
    assert_eq!(PointerSample::new(10.0, 10.0).to_ndc(Vec2::ZERO), Vec2::ZERO);
    let store = InputStore::new(Vec2::new(-5.0, 0.0));
    store.record_pointer(3.0, 3.0);
    let snap = store.reader().snapshot();
    assert_eq!(snap.viewport, Vec2::ZERO);
    assert_eq!(snap.pointer_ndc(), Vec2::ZERO);
}
