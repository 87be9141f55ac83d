// Damped second-order springs.
//
// A spring models `m·x'' = -k·(x - target) - c·x'`. Frames feed a variable
// `dt`; it is clamped to [`MAX_FRAME_DT_SEC`] and integrated in fixed
// sub-steps with semi-implicit Euler so dropped frames never blow up the
// state. Values approach their target asymptotically.

use crate::constants::{MAX_FRAME_DT_SEC, SPRING_MAX_SUBSTEPS, SPRING_SUBSTEP_SEC};
use glam::Vec2;

/// Physical coefficients of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Unit-mass spring.
    pub const fn with_unit_mass(stiffness: f32, damping: f32) -> Self {
        Self::new(stiffness, damping, 1.0)
    }

    /// 1.0 is critical damping, below it the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        let denom = 2.0 * (self.stiffness * self.mass).max(f32::EPSILON).sqrt();
        self.damping / denom
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with_unit_mass(170.0, 26.0)
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Snap to `value` with no residual motion.
    pub fn jump_to(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    /// Advance by one frame and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return self.value;
        }
        let dt = dt_sec.min(MAX_FRAME_DT_SEC);
        let steps = ((dt / SPRING_SUBSTEP_SEC).ceil() as u32).clamp(1, SPRING_MAX_SUBSTEPS);
        let h = dt / steps as f32;
        let inv_mass = 1.0 / self.config.mass.max(f32::EPSILON);
        for _ in 0..steps {
            let force = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force * inv_mass * h;
            self.value += self.velocity * h;
        }
        if !self.value.is_finite() || !self.velocity.is_finite() {
            // Coefficients far outside the stable range; settle instead of propagating NaN.
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// Two independent springs sharing one config, used for 2D offsets.
#[derive(Clone, Debug)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, value: Vec2) {
        self.x.jump_to(value.x);
        self.y.jump_to(value.y);
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        Vec2::new(self.x.step(dt_sec), self.y.step(dt_sec))
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.x.is_settled(epsilon) && self.y.is_settled(epsilon)
    }
}
