use glam::{Vec2, Vec3};
use shared::CellIndex;

use super::camera::ArcBallCamera;
use super::proxies::BlockProxies;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box of the given full extents around a centre point
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest cell whose AABB is intersected by the ray.
/// Equal distances resolve to the lowest index.
pub fn pick_nearest<I>(ray: &Ray, aabbs: I) -> Option<CellIndex>
where
    I: IntoIterator<Item = (CellIndex, Aabb)>,
{
    let mut best: Option<(CellIndex, f32)> = None;

    for (index, aabb) in aabbs {
        if let Some(dist) = ray_aabb(ray, &aabb) {
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
    }

    best.map(|(index, _)| index)
}

/// Resolve the cell under a pointer given in normalized device coordinates.
///
/// `None` means nothing is under the pointer; `Some(0)` is the first cell.
pub fn pick_cell(
    camera: &ArcBallCamera,
    ndc: Vec2,
    aspect: f32,
    proxies: &BlockProxies,
) -> Option<CellIndex> {
    let ray = camera.ray_from_ndc(ndc, aspect);
    pick_nearest(&ray, proxies.aabbs())
}
