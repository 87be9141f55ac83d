// Wireframe edge lists for the background scene meshes. Edges are pairs of
// object-space points; the renderer transforms them with the object's model
// matrix each frame.

use glam::Vec3;

pub type Edge = [Vec3; 2];

/// 6 vertices on the axes, 12 edges.
pub fn octahedron_edges(radius: f32) -> Vec<Edge> {
    let verts = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let mut edges = Vec::with_capacity(12);
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            // every pair except opposite vertices
            if verts[i].dot(verts[j]) > -0.5 {
                edges.push([verts[i] * radius, verts[j] * radius]);
            }
        }
    }
    edges
}

/// 12 vertices, 30 edges, circumscribed by `radius`.
pub fn icosahedron_edges(radius: f32) -> Vec<Edge> {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let raw = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    // In this unnormalized form every edge has length exactly 2.
    let mut edges = Vec::with_capacity(30);
    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            if (raw[i].distance(raw[j]) - 2.0).abs() < 1e-3 {
                edges.push([
                    raw[i].normalize() * radius,
                    raw[j].normalize() * radius,
                ]);
            }
        }
    }
    edges
}

/// Point on a `(p, q)` torus knot centerline for parameter `u` in
/// `[0, 2π·p)`.
pub fn torus_knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p.max(1) as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube wireframe around a torus knot: `radial` strands running along the
/// knot plus a ring every `ring_every` segments.
pub fn torus_knot_edges(
    radius: f32,
    tube: f32,
    p: u32,
    q: u32,
    segments: usize,
    radial: usize,
    ring_every: usize,
) -> Vec<Edge> {
    let segments = segments.max(3);
    let radial = radial.max(3);
    let ring_every = ring_every.max(1);
    let span = std::f32::consts::TAU * p.max(1) as f32;

    // tube cross-section vertices, one row per segment
    let rows: Vec<Vec<Vec3>> = (0..segments)
        .map(|i| {
            let u = i as f32 / segments as f32 * span;
            let p1 = torus_knot_point(u, p, q, radius);
            let p2 = torus_knot_point(u + 0.01, p, q, radius);
            let tangent = p2 - p1;
            let mut normal = p2 + p1;
            let binormal = tangent.cross(normal).normalize_or_zero();
            normal = binormal.cross(tangent).normalize_or_zero();
            (0..radial)
                .map(|j| {
                    let v = j as f32 / radial as f32 * std::f32::consts::TAU;
                    p1 + (normal * v.cos() + binormal * v.sin()) * tube
                })
                .collect()
        })
        .collect();

    let mut edges = Vec::with_capacity(segments * radial * 2);
    for i in 0..segments {
        let next = (i + 1) % segments;
        for j in 0..radial {
            edges.push([rows[i][j], rows[next][j]]);
            if i % ring_every == 0 {
                edges.push([rows[i][j], rows[i][(j + 1) % radial]]);
            }
        }
    }
    edges
}
