/// Motion and interaction tuning constants.
///
/// These constants express intended behavior (spring coefficients, falloff
/// distances, reveal timings) and keep magic numbers out of the effect code.
// Frame timing: long frames are clamped, springs integrate in fixed sub-steps
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_SUBSTEPS: u32 = 32;

// Cursor: dot + ring variant
pub const CURSOR_DOT_SIZE: f32 = 6.0;
pub const CURSOR_RING_SIZE: f32 = 36.0;
pub const CURSOR_RING_HOVER_SIZE: f32 = 56.0;
pub const CURSOR_RING_OPACITY: f32 = 0.4;
pub const CURSOR_RING_HOVER_OPACITY: f32 = 0.8;
pub const CURSOR_RING_STIFFNESS: f32 = 300.0;
pub const CURSOR_RING_DAMPING: f32 = 25.0;
pub const CURSOR_RING_MASS: f32 = 0.5;

// Cursor: prism variant (lagging polygon)
pub const CURSOR_PRISM_SIDES: u32 = 6;
pub const CURSOR_PRISM_SIZE: f32 = 28.0;
pub const CURSOR_PRISM_HOVER_SIZE: f32 = 44.0;
pub const CURSOR_PRISM_HOVER_ROTATION_DEG: f32 = 90.0;
pub const CURSOR_PRISM_STIFFNESS: f32 = 170.0;
pub const CURSOR_PRISM_DAMPING: f32 = 18.0;
pub const CURSOR_PRISM_MASS: f32 = 0.8;

// Cursor: shared size/rotation/opacity response and press feedback
pub const CURSOR_STYLE_STIFFNESS: f32 = 400.0;
pub const CURSOR_STYLE_DAMPING: f32 = 30.0;
pub const CURSOR_PRESS_SCALE: f32 = 0.8;

// Proximity gate field
pub const GATE_COUNT: usize = 40;
pub const GATE_MAX_DISTANCE: f32 = 150.0; // px beyond which a gate stays shut
pub const GATE_SPREAD_PX: f32 = 18.0; // half-gate offset at full openness
pub const GATE_MIN_SIZE: f32 = 8.0;
pub const GATE_SIZE_SPAN: f32 = 16.0;
pub const GATE_REST_OPACITY: f32 = 0.15;
pub const GATE_OPEN_OPACITY_GAIN: f32 = 0.3;
pub const GATE_GLOW_OPACITY: f32 = 0.6;
pub const GATE_GLOW_THRESHOLD: f32 = 0.05;
pub const GATE_GLOW_SIZE: f32 = 4.0;
pub const GATE_STIFFNESS: f32 = 300.0;
pub const GATE_DAMPING: f32 = 20.0;
pub const GATE_GLOW_STIFFNESS: f32 = 200.0;
pub const GATE_GLOW_DAMPING: f32 = 25.0;

// Magnetic wrap and hover tilt
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_STIFFNESS: f32 = 150.0;
pub const MAGNETIC_DAMPING: f32 = 15.0;
pub const TILT_MAX_DEG: f32 = 8.0;
pub const TILT_STIFFNESS: f32 = 150.0;
pub const TILT_DAMPING: f32 = 20.0;
pub const TILT_PERSPECTIVE_PX: f32 = 800.0;

// Scroll reveal, parallax, nav
pub const REVEAL_DURATION_SEC: f32 = 0.8;
pub const REVEAL_OFFSET_PX: f32 = 24.0;
pub const REVEAL_STAGGER_SEC: f32 = 0.04;
pub const PARALLAX_DEFAULT_RANGE_PX: f32 = 80.0;
pub const NAV_SHOW_VIEWPORT_FRACTION: f32 = 0.5;
pub const MARQUEE_PERIOD_SEC: f32 = 20.0;
pub const MARQUEE_TRAVEL_PERCENT: f32 = 50.0; // content is doubled, half a width loops seamlessly

// Reactive scene: pointer following and float motion
pub const SCENE_POINTER_LERP: f32 = 0.05; // fraction of the gap closed per frame
pub const SCENE_POINTER_ROTATION_GAIN: f32 = 1.5;
pub const SCENE_POINTER_OFFSET_GAIN: f32 = 0.4;
pub const SCENE_SPIN_X_PER_SEC: f32 = 0.18;
pub const SCENE_SPIN_Y_PER_SEC: f32 = 0.30;
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.4;
pub const FLOAT_INTENSITY: f32 = 0.5;

// Reactive scene: layer composition
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_FIELD_RADIUS: f32 = 6.0;
pub const PARTICLE_SIZE: f32 = 0.025;
pub const PARTICLE_DRIFT_PER_SEC: f32 = 0.02;
pub const SHARD_COUNT: usize = 6;
pub const SHARD_ORBIT_MIN: f32 = 2.2;
pub const SHARD_ORBIT_SPAN: f32 = 1.2;
pub const SHARD_SIZE: f32 = 0.12;
pub const CORE_SIZE: f32 = 0.55;
pub const CORE_PULSE_AMPLITUDE: f32 = 0.15;
pub const CORE_PULSE_RATE: f32 = 1.3;
pub const TORUS_KNOT_SEGMENTS: usize = 256;

// Camera and compositing
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const SCENE_OPACITY: f32 = 0.4;
/// Used when `--color-accent` is missing or unparsable.
pub const SCENE_FALLBACK_TINT: [f32; 3] = [0.49, 0.83, 0.99];

// Device policy
pub const LOW_END_MAX_CORES: u32 = 2;
pub const LOW_END_COUNT_SCALE: f32 = 0.5;
