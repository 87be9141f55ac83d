// Hover containers that react to the pointer inside their bounds:
// [`Magnetic`] pulls its child toward the pointer, [`Tilt`] rotates a card
// in 3D. Both spring back to rest on leave.

use crate::constants::*;
use crate::core::spring::{Spring, Spring2, SpringConfig};
use glam::Vec2;

/// Axis-aligned box in viewport pixels (a `getBoundingClientRect` result).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub struct Magnetic {
    strength: f32,
    offset: Spring2,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new(MAGNETIC_STRENGTH)
    }
}

impl Magnetic {
    /// `strength` is the fraction of the center-to-pointer vector applied.
    pub fn new(strength: f32) -> Self {
        let strength = if strength.is_finite() {
            strength.clamp(0.0, 1.0)
        } else {
            MAGNETIC_STRENGTH
        };
        Self {
            strength,
            offset: Spring2::new(
                SpringConfig::with_unit_mass(MAGNETIC_STIFFNESS, MAGNETIC_DAMPING),
                Vec2::ZERO,
            ),
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Vec2) {
        if !bounds.contains(pointer) {
            self.pointer_leave();
            return;
        }
        self.offset
            .set_target((pointer - bounds.center()) * self.strength);
    }

    pub fn pointer_leave(&mut self) {
        self.offset.set_target(Vec2::ZERO);
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        self.offset.step(dt_sec)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.value()
    }

    pub fn target(&self) -> Vec2 {
        self.offset.target()
    }

    pub fn is_at_rest(&self) -> bool {
        self.offset.target() == Vec2::ZERO && self.offset.is_settled(0.01)
    }
}

/// Card tilt: the pointer's relative position maps to a rotation of up to
/// `max_deg` around each axis.
pub struct Tilt {
    max_deg: f32,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(TILT_MAX_DEG)
    }
}

impl Tilt {
    pub fn new(max_deg: f32) -> Self {
        let cfg = SpringConfig::with_unit_mass(TILT_STIFFNESS, TILT_DAMPING);
        Self {
            max_deg: max_deg.abs(),
            rotate_x: Spring::new(cfg, 0.0),
            rotate_y: Spring::new(cfg, 0.0),
        }
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Vec2) {
        if bounds.is_empty() {
            return;
        }
        let x = ((pointer.x - bounds.left) / bounds.width).clamp(0.0, 1.0);
        let y = ((pointer.y - bounds.top) / bounds.height).clamp(0.0, 1.0);
        self.rotate_x.set_target(self.max_deg - y * 2.0 * self.max_deg);
        self.rotate_y.set_target(-self.max_deg + x * 2.0 * self.max_deg);
    }

    pub fn pointer_leave(&mut self) {
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
    }

    /// Returns `(rotate_x, rotate_y)` in degrees.
    pub fn step(&mut self, dt_sec: f32) -> (f32, f32) {
        (self.rotate_x.step(dt_sec), self.rotate_y.step(dt_sec))
    }

    pub fn target(&self) -> (f32, f32) {
        (self.rotate_x.target(), self.rotate_y.target())
    }
}
