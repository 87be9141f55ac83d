// Decorative background scene.
//
// Layers advance with elapsed time (spin, orbit, pulse) and selected layers
// ease toward the pointer with per-frame exponential smoothing
// (`v += (target - v) * factor`). The scene only produces transforms; the
// renderer turns them into geometry.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

/// Alternate scene designs. One is chosen per deployment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneVariant {
    /// A single floating wireframe torus knot.
    Knot,
    /// Particle field, nested wireframe solids, orbiting shards and a core.
    #[default]
    Constellation,
}

impl FromStr for SceneVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "knot" => Ok(Self::Knot),
            "constellation" => Ok(Self::Constellation),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mesh {
    TorusKnot,
    Icosahedron,
    Octahedron,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Wireframe(Mesh),
    /// Small glowing point orbiting the center.
    Shard,
    /// Pulsing glow at the center.
    Core,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub shard_count: usize,
    pub pointer_lerp: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            shard_count: SHARD_COUNT,
            pointer_lerp: SCENE_POINTER_LERP,
        }
    }
}

/// Per-object transform handed to the rasterizer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl ObjectTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.position,
        )
    }
}

/// Angle reached after `elapsed` seconds at `rate` rad/s, wrapped into
/// `[0, TAU)`. The clock is kept in f64 so the angle keeps advancing on pages
/// left open for days.
pub fn angle_at(elapsed: f64, rate: f32) -> f32 {
    (elapsed * rate as f64).rem_euclid(std::f64::consts::TAU) as f32
}

fn wrap_angles(v: Vec3) -> Vec3 {
    let tau = std::f32::consts::TAU;
    Vec3::new(v.x.rem_euclid(tau), v.y.rem_euclid(tau), v.z.rem_euclid(tau))
}

/// Gentle bobbing used by floating objects: `(rotation wobble, y offset)`.
pub fn float_offset(elapsed: f64) -> (Vec3, f32) {
    let a = angle_at(elapsed, FLOAT_SPEED / 4.0);
    let wobble = Vec3::new(
        a.cos() / 8.0 * FLOAT_ROTATION_INTENSITY,
        a.sin() / 8.0 * FLOAT_ROTATION_INTENSITY,
        a.sin() / 20.0 * FLOAT_ROTATION_INTENSITY,
    );
    (wobble, a.sin() / 10.0 * FLOAT_INTENSITY)
}

#[inline]
fn approach(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    /// Rotation eases toward the pointer (scaled by `gain`, negative gain
    /// counter-rotates) on top of a constant spin.
    Follow { spin: Vec3, gain: f32, float: bool },
    Orbit {
        radius: f32,
        speed: f32,
        phase: f32,
        incline: f32,
    },
    Pulse,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: ObjectKind,
    base: ObjectTransform,
    motion: Motion,
    /// Accumulated spin.
    rotation: Vec3,
    /// Smoothed pointer-driven rotation around X and Y.
    follow: Vec2,
    current: ObjectTransform,
}

impl SceneObject {
    fn new(kind: ObjectKind, base: ObjectTransform, motion: Motion) -> Self {
        Self {
            kind,
            base,
            motion,
            rotation: base.rotation,
            follow: Vec2::ZERO,
            current: base,
        }
    }

    pub fn transform(&self) -> ObjectTransform {
        self.current
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.current.model_matrix()
    }

    fn update(&mut self, elapsed: f64, dt: f32, pointer: Vec2, lerp: f32) {
        match self.motion {
            Motion::Follow { spin, gain, float } => {
                // pointer y tilts around X, pointer x turns around Y
                let target = Vec2::new(pointer.y, pointer.x) * gain;
                self.follow.x = approach(self.follow.x, target.x, lerp);
                self.follow.y = approach(self.follow.y, target.y, lerp);
                self.rotation = wrap_angles(self.rotation + spin * dt);
                let (wobble, bob) = if float {
                    float_offset(elapsed)
                } else {
                    (Vec3::ZERO, 0.0)
                };
                self.current = ObjectTransform {
                    position: self.base.position + Vec3::Y * bob,
                    rotation: self.rotation + self.follow.extend(0.0) + wobble,
                    ..self.base
                };
            }
            Motion::Orbit {
                radius,
                speed,
                phase,
                incline,
            } => {
                let a = phase + angle_at(elapsed, speed);
                let flat = Vec3::new(a.cos() * radius, 0.0, a.sin() * radius);
                let position = Quat::from_rotation_x(incline) * flat;
                let twinkle = 0.75 + 0.25 * (angle_at(elapsed, 2.0) + phase).sin();
                self.current = ObjectTransform {
                    position: self.base.position + position,
                    opacity: self.base.opacity * twinkle,
                    ..self.base
                };
            }
            Motion::Pulse => {
                let pulse = 1.0 + CORE_PULSE_AMPLITUDE * angle_at(elapsed, CORE_PULSE_RATE).sin();
                let target = Vec3::new(pointer.x, pointer.y, 0.0) * SCENE_POINTER_OFFSET_GAIN;
                let position = self.current.position.lerp(target, lerp);
                self.current = ObjectTransform {
                    position,
                    scale: self.base.scale * pulse,
                    ..self.base
                };
            }
        }
    }
}

pub struct Scene {
    variant: SceneVariant,
    config: SceneConfig,
    objects: Vec<SceneObject>,
    particles: Vec<Vec3>,
    particle_field: ObjectTransform,
    elapsed: f64,
}

impl Scene {
    pub fn new(variant: SceneVariant, config: &SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut objects = Vec::new();
        let mut particles = Vec::new();
        match variant {
            SceneVariant::Knot => {
                objects.push(SceneObject::new(
                    ObjectKind::Wireframe(Mesh::TorusKnot),
                    ObjectTransform::default(),
                    Motion::Follow {
                        spin: Vec3::new(SCENE_SPIN_X_PER_SEC, SCENE_SPIN_Y_PER_SEC, 0.0),
                        gain: SCENE_POINTER_ROTATION_GAIN,
                        float: true,
                    },
                ));
            }
            SceneVariant::Constellation => {
                particles = (0..config.particle_count)
                    .map(|_| random_in_sphere(&mut rng) * PARTICLE_FIELD_RADIUS)
                    .collect();
                objects.push(SceneObject::new(
                    ObjectKind::Wireframe(Mesh::Icosahedron),
                    ObjectTransform {
                        scale: 1.6,
                        opacity: 0.55,
                        ..Default::default()
                    },
                    Motion::Follow {
                        spin: Vec3::new(SCENE_SPIN_X_PER_SEC, SCENE_SPIN_Y_PER_SEC, 0.0),
                        gain: SCENE_POINTER_ROTATION_GAIN,
                        float: true,
                    },
                ));
                objects.push(SceneObject::new(
                    ObjectKind::Wireframe(Mesh::Octahedron),
                    ObjectTransform {
                        scale: 0.9,
                        opacity: 0.8,
                        ..Default::default()
                    },
                    Motion::Follow {
                        spin: Vec3::new(-SCENE_SPIN_Y_PER_SEC, -SCENE_SPIN_X_PER_SEC, 0.1),
                        gain: -SCENE_POINTER_ROTATION_GAIN * 0.5,
                        float: false,
                    },
                ));
                for i in 0..config.shard_count {
                    let phase = i as f32 / config.shard_count.max(1) as f32 * std::f32::consts::TAU;
                    objects.push(SceneObject::new(
                        ObjectKind::Shard,
                        ObjectTransform {
                            scale: SHARD_SIZE,
                            opacity: 0.9,
                            ..Default::default()
                        },
                        Motion::Orbit {
                            radius: SHARD_ORBIT_MIN + rng.gen::<f32>() * SHARD_ORBIT_SPAN,
                            speed: 0.2 + rng.gen::<f32>() * 0.4,
                            phase,
                            incline: (rng.gen::<f32>() - 0.5) * std::f32::consts::FRAC_PI_2,
                        },
                    ));
                }
                objects.push(SceneObject::new(
                    ObjectKind::Core,
                    ObjectTransform {
                        scale: CORE_SIZE,
                        opacity: 0.7,
                        ..Default::default()
                    },
                    Motion::Pulse,
                ));
            }
        }
        log::debug!(
            "[scene] {:?}: {} objects, {} particles",
            variant,
            objects.len(),
            particles.len()
        );
        Self {
            variant,
            config: *config,
            objects,
            particles,
            particle_field: ObjectTransform {
                scale: 1.0,
                opacity: 0.8,
                ..Default::default()
            },
            elapsed: 0.0,
        }
    }

    pub fn variant(&self) -> SceneVariant {
        self.variant
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Object-space particle positions; place them with
    /// [`Scene::particle_transform`].
    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    pub fn particle_transform(&self) -> ObjectTransform {
        self.particle_field
    }

    /// Advance by one frame. `pointer_ndc` is in `[-1, 1]`, y up.
    pub fn update(&mut self, dt_sec: f32, pointer_ndc: Vec2) {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        let pointer = if pointer_ndc.is_finite() {
            pointer_ndc.clamp(Vec2::NEG_ONE, Vec2::ONE)
        } else {
            Vec2::ZERO
        };
        self.elapsed += dt as f64;
        let lerp = self.config.pointer_lerp.clamp(0.0, 1.0);
        for object in &mut self.objects {
            object.update(self.elapsed, dt, pointer, lerp);
        }
        if !self.particles.is_empty() {
            let field = &mut self.particle_field;
            let target = Vec3::new(pointer.x, pointer.y, 0.0) * SCENE_POINTER_OFFSET_GAIN;
            field.position = field.position.lerp(target, lerp);
            field.rotation.y =
                angle_at(self.elapsed, PARTICLE_DRIFT_PER_SEC * std::f32::consts::TAU);
        }
    }
}

fn random_in_sphere(rng: &mut StdRng) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}
