// Proximity gate field.
//
// A fixed number of anchors scattered over the viewport. Each anchor "opens"
// with linear falloff as the pointer approaches; openness drives a split of
// the two gate halves, their opacity and a center glow.

use crate::constants::*;
use crate::core::spring::{Spring, SpringConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Linear falloff: 1 at the anchor, 0 at and beyond `max_distance`.
#[inline]
pub fn openness(anchor: Vec2, pointer: Vec2, max_distance: f32) -> f32 {
    let distance = anchor.distance(pointer);
    if max_distance <= 0.0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / max_distance).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateConfig {
    pub count: usize,
    pub max_distance: f32,
    pub spread_px: f32,
    pub min_size: f32,
    pub size_span: f32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            count: GATE_COUNT,
            max_distance: GATE_MAX_DISTANCE,
            spread_px: GATE_SPREAD_PX,
            min_size: GATE_MIN_SIZE,
            size_span: GATE_SIZE_SPAN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub size: f32,
}

/// Render parameters of one gate for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GateVisual {
    /// Unsmoothed openness in `[0, 1]`.
    pub openness: f32,
    /// Offset of each half from the anchor, in px along the gate axis.
    pub spread: f32,
    pub opacity: f32,
    /// `None` while the gate is effectively closed.
    pub glow_opacity: Option<f32>,
}

#[derive(Clone, Debug)]
struct GateMotion {
    open: Spring,
    glow: Spring,
}

impl GateMotion {
    fn resting() -> Self {
        Self {
            open: Spring::new(SpringConfig::with_unit_mass(GATE_STIFFNESS, GATE_DAMPING), 0.0),
            glow: Spring::new(
                SpringConfig::with_unit_mass(GATE_GLOW_STIFFNESS, GATE_GLOW_DAMPING),
                0.0,
            ),
        }
    }
}

pub struct GateField {
    config: GateConfig,
    viewport: Vec2,
    anchors: Vec<Anchor>,
    motion: Vec<GateMotion>,
    visuals: Vec<GateVisual>,
    generation: u32,
    rng: StdRng,
}

impl GateField {
    pub fn new(config: GateConfig, viewport: Vec2, seed: u64) -> Self {
        let mut field = Self {
            config,
            viewport,
            anchors: Vec::with_capacity(config.count),
            motion: Vec::with_capacity(config.count),
            visuals: Vec::with_capacity(config.count),
            generation: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.scatter();
        field
    }

    /// Throw away every anchor and its motion state, then scatter a fresh set
    /// of the same size across `viewport`.
    pub fn regenerate(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.generation = self.generation.wrapping_add(1);
        self.scatter();
        log::debug!(
            "[gates] regenerated {} anchors for {:.0}x{:.0} (gen {})",
            self.anchors.len(),
            viewport.x,
            viewport.y,
            self.generation
        );
    }

    fn scatter(&mut self) {
        let w = self.viewport.x.max(0.0);
        let h = self.viewport.y.max(0.0);
        self.anchors.clear();
        self.motion.clear();
        self.visuals.clear();
        for _ in 0..self.config.count {
            let rng = &mut self.rng;
            self.anchors.push(Anchor {
                position: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                rotation_deg: rng.gen::<f32>() * 360.0,
                size: self.config.min_size + rng.gen::<f32>() * self.config.size_span,
            });
            self.motion.push(GateMotion::resting());
            self.visuals.push(GateVisual {
                opacity: GATE_REST_OPACITY,
                ..GateVisual::default()
            });
        }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Incremented on every regeneration so views know to rebuild.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Evaluate every anchor against `pointer`. `None` (no pointer seen yet)
    /// lets every gate settle closed.
    pub fn step(&mut self, dt_sec: f32, pointer: Option<Vec2>) -> &[GateVisual] {
        let max_distance = self.config.max_distance;
        let spread_px = self.config.spread_px;
        for ((anchor, motion), visual) in self
            .anchors
            .iter()
            .zip(self.motion.iter_mut())
            .zip(self.visuals.iter_mut())
        {
            let open = pointer
                .map(|p| openness(anchor.position, p, max_distance))
                .unwrap_or(0.0);
            motion.open.set_target(open);
            motion.glow.set_target(if open > GATE_GLOW_THRESHOLD {
                open * GATE_GLOW_OPACITY
            } else {
                0.0
            });
            let smoothed = motion.open.step(dt_sec).clamp(0.0, 1.0);
            let glow = motion.glow.step(dt_sec).clamp(0.0, GATE_GLOW_OPACITY);
            *visual = GateVisual {
                openness: open,
                spread: smoothed * spread_px,
                opacity: GATE_REST_OPACITY + smoothed * GATE_OPEN_OPACITY_GAIN,
                glow_opacity: (open > GATE_GLOW_THRESHOLD).then_some(glow),
            };
        }
        &self.visuals
    }
}
