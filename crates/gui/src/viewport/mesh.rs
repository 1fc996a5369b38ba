use glam::Vec3;

use super::proxies::BlockProxies;

/// Floats per interleaved vertex: position(3) + normal(3) + color(3)
pub const VERTEX_STRIDE: usize = 9;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Append an axis-aligned box centred at `center`
pub fn push_box(mesh: &mut MeshData, center: Vec3, size: Vec3, color: [f32; 3]) {
    let hw = size.x * 0.5;
    let hh = size.y * 0.5;
    let hd = size.z * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        (
            [
                Vec3::new(-hw, -hh, hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(-hw, hh, hd),
            ],
            Vec3::Z,
        ),
        // Back (-Z)
        (
            [
                Vec3::new(hw, -hh, -hd),
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, hh, -hd),
                Vec3::new(hw, hh, -hd),
            ],
            Vec3::NEG_Z,
        ),
        // Right (+X)
        (
            [
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(hw, hh, hd),
            ],
            Vec3::X,
        ),
        // Left (-X)
        (
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, -hh, hd),
                Vec3::new(-hw, hh, hd),
                Vec3::new(-hw, hh, -hd),
            ],
            Vec3::NEG_X,
        ),
        // Top (+Y)
        (
            [
                Vec3::new(-hw, hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(-hw, hh, -hd),
            ],
            Vec3::Y,
        ),
        // Bottom (-Y)
        (
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(-hw, -hh, hd),
            ],
            Vec3::NEG_Y,
        ),
    ];

    for (quad, normal) in &faces {
        let base = mesh.vertex_count() as u32;
        for v in quad {
            let p = center + *v;
            mesh.vertices.extend_from_slice(&[
                p.x, p.y, p.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// One combined mesh holding every block at its current offset and colour
pub fn blocks_mesh(proxies: &BlockProxies) -> MeshData {
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(proxies.len() * 24 * VERTEX_STRIDE),
        indices: Vec::with_capacity(proxies.len() * 36),
    };

    let size = proxies.block_size();
    for proxy in proxies.iter() {
        push_box(&mut mesh, proxy.center(), size, rgb_to_f32(proxy.color));
    }

    mesh
}

/// 8-bit RGB to linear 0..1 floats
pub fn rgb_to_f32(rgb: [u8; 3]) -> [f32; 3] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    ]
}
