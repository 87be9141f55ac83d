// Host-side tests for magnetic hover wraps and card tilt.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod magnetic {
        include!("../src/core/magnetic.rs");
    }
}

use crate::constants::*;
use crate::core::magnetic::*;
use glam::Vec2;

fn button() -> Rect {
    // center at (150, 120)
    Rect::new(100.0, 100.0, 100.0, 40.0)
}

fn settle_magnetic(m: &mut Magnetic, seconds: f32) -> Vec2 {
    let dt = 1.0 / 60.0;
    let mut v = m.offset();
    for _ in 0..(seconds / dt) as usize {
        v = m.step(dt);
    }
    v
}

#[test]
fn rect_geometry() {
    let r = button();
    assert_eq!(r.center(), Vec2::new(150.0, 120.0));
    assert!(r.contains(Vec2::new(100.0, 100.0)));
    assert!(r.contains(Vec2::new(200.0, 140.0)));
    assert!(!r.contains(Vec2::new(201.0, 120.0)));
    assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
}

#[test]
fn offset_pulls_toward_pointer_scaled_by_strength() {
    let mut m = Magnetic::new(0.3);
    m.pointer_move(button(), Vec2::new(190.0, 130.0));
    assert!((m.target() - Vec2::new(12.0, 3.0)).length() < 1e-4);
    let offset = settle_magnetic(&mut m, 3.0);
    assert!((offset - Vec2::new(12.0, 3.0)).length() < 0.01, "offset={offset}");
}

#[test]
fn returns_to_rest_after_leave() {
    let mut m = Magnetic::default();
    m.pointer_move(button(), Vec2::new(110.0, 105.0));
    settle_magnetic(&mut m, 1.0);
    assert!(!m.is_at_rest());
    m.pointer_leave();
    let offset = settle_magnetic(&mut m, 3.0);
    assert!(offset.length() < 0.01);
    assert!(m.is_at_rest());
}

#[test]
fn pointer_outside_rect_acts_as_leave() {
    let mut m = Magnetic::new(0.5);
    m.pointer_move(button(), Vec2::new(180.0, 120.0));
    assert!(m.target().x > 0.0);
    m.pointer_move(button(), Vec2::new(500.0, 500.0));
    assert_eq!(m.target(), Vec2::ZERO);
}

#[test]
fn strength_is_clamped() {
    assert_eq!(Magnetic::new(3.0).strength(), 1.0);
    assert_eq!(Magnetic::new(-1.0).strength(), 0.0);
    assert_eq!(Magnetic::new(f32::NAN).strength(), MAGNETIC_STRENGTH);
}

#[test]
fn tilt_maps_corners_to_max_angles() {
    let r = button();
    let mut t = Tilt::default();
    t.pointer_move(r, Vec2::new(r.left, r.top));
    assert_eq!(t.target(), (TILT_MAX_DEG, -TILT_MAX_DEG));
    t.pointer_move(r, Vec2::new(r.left + r.width, r.top + r.height));
    assert_eq!(t.target(), (-TILT_MAX_DEG, TILT_MAX_DEG));
    t.pointer_move(r, r.center());
    let (x, y) = t.target();
    assert!(x.abs() < 1e-5 && y.abs() < 1e-5);
}

#[test]
fn tilt_springs_back_on_leave() {
    let r = button();
    let mut t = Tilt::new(10.0);
    t.pointer_move(r, Vec2::new(r.left, r.top));
    for _ in 0..60 {
        t.step(1.0 / 60.0);
    }
    t.pointer_leave();
    let mut last = (1.0, 1.0);
    for _ in 0..180 {
        last = t.step(1.0 / 60.0);
    }
    assert!(last.0.abs() < 0.01 && last.1.abs() < 0.01);
}

#[test]
fn tilt_ignores_empty_rect() {
    let mut t = Tilt::default();
    t.pointer_move(Rect::new(0.0, 0.0, 0.0, 0.0), Vec2::new(5.0, 5.0));
    assert_eq!(t.target(), (0.0, 0.0));
    let (x, y) = t.step(1.0 / 60.0);
    assert!(x.is_finite() && y.is_finite());
}
