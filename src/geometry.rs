//! Unit meshes for the scene-graph shapes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

/// Vertex with position and normal
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Get the vertex buffer layout
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// CPU-side indexed triangle mesh
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Unit UV sphere (radius 1, poles on ±Y)
pub fn generate_sphere(segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let pos = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            // unit sphere: position doubles as normal
            vertices.push(Vertex::new(pos, pos));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Unit cylinder: radius 1, height 1 along Y, with caps.
/// Same axis convention as the original geometry library, so demos lay
/// cylinders along Z with a single X rotation.
pub fn generate_cylinder(segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let mut cap = |y: f32, normal: Vec3, flip: bool| {
        let center = vertices.len() as u32;
        vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));

        let ring_start = vertices.len() as u32;
        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            vertices.push(Vertex::new(Vec3::new(theta.cos(), y, theta.sin()), normal));
        }
        for seg in 0..segments {
            if flip {
                indices.extend_from_slice(&[center, ring_start + seg, ring_start + seg + 1]);
            } else {
                indices.extend_from_slice(&[center, ring_start + seg + 1, ring_start + seg]);
            }
        }
    };

    cap(0.5, Vec3::Y, false);
    cap(-0.5, Vec3::NEG_Y, true);

    // side wall, separate vertices for the radial normals
    let top_start = vertices.len() as u32;
    for &y in &[0.5f32, -0.5] {
        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let normal = Vec3::new(theta.cos(), 0.0, theta.sin());
            vertices.push(Vertex::new(Vec3::new(theta.cos(), y, theta.sin()), normal));
        }
    }
    let bottom_start = top_start + segments + 1;
    for seg in 0..segments {
        let t0 = top_start + seg;
        let t1 = top_start + seg + 1;
        let b0 = bottom_start + seg;
        let b1 = bottom_start + seg + 1;

        indices.extend_from_slice(&[t0, t1, b0]);
        indices.extend_from_slice(&[t1, b1, b0]);
    }

    MeshData { vertices, indices }
}

/// Unit cube (centered at origin, edge length 1)
pub fn generate_cube() -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let faces = [
        (
            Vec3::X,
            [
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(0.5, 0.5, -0.5),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.5, -0.5, 0.5),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-0.5, -0.5, 0.5),
                Vec3::new(-0.5, 0.5, 0.5),
                Vec3::new(-0.5, 0.5, -0.5),
                Vec3::new(-0.5, -0.5, -0.5),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-0.5, 0.5, -0.5),
                Vec3::new(-0.5, 0.5, 0.5),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.5, 0.5, -0.5),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-0.5, -0.5, 0.5),
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(0.5, -0.5, 0.5),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-0.5, -0.5, 0.5),
                Vec3::new(0.5, -0.5, 0.5),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(-0.5, 0.5, 0.5),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(-0.5, 0.5, -0.5),
                Vec3::new(0.5, 0.5, -0.5),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for pos in corners {
            vertices.push(Vertex::new(pos, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Torus with ring radius 1 in the XY plane and the given tube ratio
/// (tube radius / ring radius). The renderer scales by the ring radius.
pub fn generate_torus(tube_ratio: f32, ring_segments: u32, tube_segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=ring_segments {
        let u = 2.0 * PI * ring as f32 / ring_segments as f32;
        for seg in 0..=tube_segments {
            let v = 2.0 * PI * seg as f32 / tube_segments as f32;

            let normal = Vec3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin());
            let pos = Vec3::new(
                (1.0 + tube_ratio * v.cos()) * u.cos(),
                (1.0 + tube_ratio * v.cos()) * u.sin(),
                tube_ratio * v.sin(),
            );
            vertices.push(Vertex::new(pos, normal));
        }
    }

    for ring in 0..ring_segments {
        for seg in 0..tube_segments {
            let current = ring * (tube_segments + 1) + seg;
            let next = current + tube_segments + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    MeshData { vertices, indices }
}
