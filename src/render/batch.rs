use crate::constants::{PARTICLE_SIZE, TORUS_KNOT_SEGMENTS};
use crate::core::geometry::{self, Edge};
use crate::core::scene::{Mesh, ObjectKind, Scene};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) position: [f32; 4],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteInstance {
    pub(crate) center_size: [f32; 4],
    pub(crate) color: [f32; 4],
}

/// Object-space edge lists, built once.
pub(crate) struct MeshCache {
    torus_knot: Vec<Edge>,
    icosahedron: Vec<Edge>,
    octahedron: Vec<Edge>,
}

impl MeshCache {
    pub(crate) fn new() -> Self {
        Self {
            torus_knot: geometry::torus_knot_edges(1.0, 0.3, 2, 3, TORUS_KNOT_SEGMENTS, 8, 4),
            icosahedron: geometry::icosahedron_edges(1.0),
            octahedron: geometry::octahedron_edges(1.0),
        }
    }

    pub(crate) fn edges(&self, mesh: Mesh) -> &[Edge] {
        match mesh {
            Mesh::TorusKnot => &self.torus_knot,
            Mesh::Icosahedron => &self.icosahedron,
            Mesh::Octahedron => &self.octahedron,
        }
    }
}

/// CPU-side vertex data for one frame, reused between frames.
#[derive(Default)]
pub(crate) struct SceneBatch {
    pub(crate) lines: Vec<LineVertex>,
    pub(crate) sprites: Vec<SpriteInstance>,
}

impl SceneBatch {
    pub(crate) fn rebuild(&mut self, scene: &Scene, meshes: &MeshCache) {
        self.lines.clear();
        self.sprites.clear();

        let field = scene.particle_transform();
        let field_model = field.model_matrix();
        for p in scene.particles() {
            let w = field_model.transform_point3(*p);
            self.sprites.push(SpriteInstance {
                center_size: [w.x, w.y, w.z, PARTICLE_SIZE],
                color: [0.85, 0.9, 1.0, field.opacity],
            });
        }

        for object in scene.objects() {
            let t = object.transform();
            match object.kind {
                ObjectKind::Wireframe(mesh) => {
                    let model = t.model_matrix();
                    let color = [1.0, 1.0, 1.0, t.opacity];
                    for [a, b] in meshes.edges(mesh) {
                        for v in [model.transform_point3(*a), model.transform_point3(*b)] {
                            self.lines.push(LineVertex {
                                position: [v.x, v.y, v.z, 1.0],
                                color,
                            });
                        }
                    }
                }
                ObjectKind::Shard => self.sprites.push(SpriteInstance {
                    center_size: [t.position.x, t.position.y, t.position.z, t.scale],
                    color: [1.0, 0.95, 0.85, t.opacity],
                }),
                ObjectKind::Core => self.sprites.push(SpriteInstance {
                    center_size: [t.position.x, t.position.y, t.position.z, t.scale],
                    color: [0.9, 0.95, 1.0, t.opacity],
                }),
            }
        }
    }
}
