// Host-side tests for the background scene, its meshes and the CPU batch
// handed to the GPU. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}
mod batch {
    include!("../src/render/batch.rs");
}

use crate::batch::{MeshCache, SceneBatch};
use crate::constants::*;
use crate::core::geometry::*;
use crate::core::scene::*;
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn run(scene: &mut Scene, pointer: Vec2, frames: usize) {
    for _ in 0..frames {
        scene.update(DT, pointer);
    }
}

#[test]
fn mesh_edge_counts() {
    assert_eq!(octahedron_edges(1.0).len(), 12);
    assert_eq!(icosahedron_edges(1.0).len(), 30);
    assert_eq!(
        torus_knot_edges(1.0, 0.3, 2, 3, 256, 8, 4).len(),
        256 * 8 + 64 * 8
    );
}

#[test]
fn solid_vertices_lie_on_radius() {
    for [a, b] in icosahedron_edges(2.0).into_iter().chain(octahedron_edges(2.0)) {
        assert!((a.length() - 2.0).abs() < 1e-4);
        assert!((b.length() - 2.0).abs() < 1e-4);
    }
    let edges = icosahedron_edges(1.0);
    let first = edges[0][0].distance(edges[0][1]);
    assert!(edges
        .iter()
        .all(|[a, b]| (a.distance(*b) - first).abs() < 1e-4));
}

#[test]
fn torus_knot_is_finite_and_starts_on_axis() {
    let p0 = torus_knot_point(0.0, 2, 3, 1.0);
    assert!((p0 - Vec3::new(1.5, 0.0, 0.0)).length() < 1e-6);
    assert!(torus_knot_edges(1.0, 0.3, 2, 3, 64, 6, 2)
        .iter()
        .all(|[a, b]| a.is_finite() && b.is_finite()));
}

#[test]
fn variant_names_parse() {
    assert_eq!("knot".parse::<SceneVariant>(), Ok(SceneVariant::Knot));
    assert_eq!(
        "Constellation".parse::<SceneVariant>(),
        Ok(SceneVariant::Constellation)
    );
    assert!("plasma".parse::<SceneVariant>().is_err());
}

#[test]
fn knot_scene_has_single_wireframe() {
    let scene = Scene::new(SceneVariant::Knot, &SceneConfig::default(), 1);
    assert_eq!(scene.objects().len(), 1);
    assert_eq!(
        scene.objects()[0].kind,
        ObjectKind::Wireframe(Mesh::TorusKnot)
    );
    assert!(scene.particles().is_empty());
}

#[test]
fn constellation_layers() {
    let cfg = SceneConfig::default();
    let scene = Scene::new(SceneVariant::Constellation, &cfg, 1);
    assert_eq!(scene.particles().len(), cfg.particle_count);
    assert!(scene
        .particles()
        .iter()
        .all(|p| p.length() <= PARTICLE_FIELD_RADIUS + 1e-4));
    let count = |k: ObjectKind| scene.objects().iter().filter(|o| o.kind == k).count();
    assert_eq!(count(ObjectKind::Wireframe(Mesh::Icosahedron)), 1);
    assert_eq!(count(ObjectKind::Wireframe(Mesh::Octahedron)), 1);
    assert_eq!(count(ObjectKind::Shard), cfg.shard_count);
    assert_eq!(count(ObjectKind::Core), 1);
}

#[test]
fn wireframes_ease_toward_pointer() {
    let cfg = SceneConfig::default();
    let mut toward = Scene::new(SceneVariant::Constellation, &cfg, 4);
    let mut rest = Scene::new(SceneVariant::Constellation, &cfg, 4);
    run(&mut toward, Vec2::new(1.0, 0.0), 300);
    run(&mut rest, Vec2::ZERO, 300);

    let outer = toward.objects()[0].transform().rotation.y - rest.objects()[0].transform().rotation.y;
    assert!((outer - SCENE_POINTER_ROTATION_GAIN).abs() < 0.01, "outer={outer}");
    // the inner solid counter-rotates
    let inner = toward.objects()[1].transform().rotation.y - rest.objects()[1].transform().rotation.y;
    assert!(inner < 0.0);
}

#[test]
fn core_drifts_toward_pointer() {
    let mut scene = Scene::new(SceneVariant::Constellation, &SceneConfig::default(), 2);
    run(&mut scene, Vec2::new(1.0, -1.0), 400);
    let core = scene
        .objects()
        .iter()
        .find(|o| o.kind == ObjectKind::Core)
        .expect("core");
    let target = Vec3::new(1.0, -1.0, 0.0) * SCENE_POINTER_OFFSET_GAIN;
    assert!((core.transform().position - target).length() < 1e-3);
}

#[test]
fn spin_continues_without_pointer() {
    let mut scene = Scene::new(SceneVariant::Knot, &SceneConfig::default(), 0);
    run(&mut scene, Vec2::ZERO, 600);
    assert!((scene.elapsed() - 10.0).abs() < 1e-2);
    let r = scene.objects()[0].transform().rotation;
    assert!(r.x > SCENE_SPIN_X_PER_SEC * 10.0 - 0.1, "rotation={r}");
}

#[test]
fn clock_keeps_advancing_after_days() {
    let days = 5.0 * 86_400.0;
    let frame = 1.0 / 60.0;
    assert_ne!(
        angle_at(days, CORE_PULSE_RATE),
        angle_at(days + frame, CORE_PULSE_RATE)
    );
    let a = angle_at(days, 0.3);
    assert!((0.0..std::f32::consts::TAU).contains(&a));
    assert!((angle_at(days + frame, 0.3) - a - 0.3 * frame as f32).abs() < 1e-4);
}

#[test]
fn accumulated_spin_stays_wrapped() {
    let mut scene = Scene::new(SceneVariant::Knot, &SceneConfig::default(), 0);
    for _ in 0..3000 {
        scene.update(MAX_FRAME_DT_SEC, Vec2::ZERO);
    }
    let r = scene.objects()[0].transform().rotation;
    let bound = std::f32::consts::TAU + 0.1;
    assert!(r.x > -0.1 && r.x < bound && r.y > -0.1 && r.y < bound, "rotation={r}");
}

#[test]
fn bad_inputs_keep_transforms_finite() {
    let mut scene = Scene::new(SceneVariant::Constellation, &SceneConfig::default(), 8);
    scene.update(f32::NAN, Vec2::new(f32::NAN, f32::INFINITY));
    scene.update(50.0, Vec2::new(40.0, -40.0));
    for o in scene.objects() {
        let t = o.transform();
        assert!(t.position.is_finite() && t.rotation.is_finite());
        assert!(o.model_matrix().is_finite());
    }
    assert!(scene.elapsed() <= MAX_FRAME_DT_SEC as f64 + 1e-6);
}

#[test]
fn batch_collects_lines_and_sprites() {
    let cfg = SceneConfig {
        particle_count: 50,
        shard_count: 3,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(SceneVariant::Constellation, &cfg, 6);
    scene.update(DT, Vec2::ZERO);
    let meshes = MeshCache::new();
    let mut batch = SceneBatch::default();
    batch.rebuild(&scene, &meshes);
    assert_eq!(batch.lines.len(), (30 + 12) * 2);
    assert_eq!(batch.sprites.len(), 50 + 3 + 1);

    // rebuilding reuses the buffers instead of appending
    batch.rebuild(&scene, &meshes);
    assert_eq!(batch.sprites.len(), 50 + 3 + 1);
}
