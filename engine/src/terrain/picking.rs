//! Terrain Picking
//!
//! Maps pointer rays and planar points onto the current surface. Hosts use
//! [`TerrainMesh::raycast`] to turn a pointer position into the brush
//! center passed to [`TerrainMesh::apply_brush`].

use glam::{Vec2, Vec3};

use super::mesh::TerrainMesh;
use crate::camera::Ray;

/// Where a ray met the terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainHit {
    /// World-space hit point
    pub point: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
    /// Row/column of the quad that was hit
    pub quad: (u32, u32),
}

impl TerrainHit {
    /// Planar hit position, the form brushes take as their center.
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.point.x, self.point.z)
    }
}

/// Moller-Trumbore ray/triangle test. Returns the distance along the ray.
fn intersect_triangle(ray: &Ray, p0: Vec3, p1: Vec3, p2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    let h = ray.direction.cross(edge2);
    let det = edge1.dot(h);
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - p0;
    let u = s.dot(h) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}

impl TerrainMesh {
    /// Nearest intersection of `ray` with the terrain surface.
    ///
    /// Both faces of every triangle count, so a camera that dips below the
    /// surface still picks it.
    pub fn raycast(&self, ray: &Ray) -> Option<TerrainHit> {
        if !ray.is_valid() {
            return None;
        }

        let segments = self.layout.segments();
        let mut nearest: Option<TerrainHit> = None;

        for row in 0..segments {
            for col in 0..segments {
                for tri in self.layout.quad_triangles(row, col) {
                    let [a, b, c] = tri.map(|i| self.positions[i]);
                    let Some(t) = intersect_triangle(ray, a, b, c) else {
                        continue;
                    };
                    if nearest.is_none_or(|hit| t < hit.distance) {
                        nearest = Some(TerrainHit {
                            point: ray.at(t),
                            distance: t,
                            quad: (row, col),
                        });
                    }
                }
            }
        }

        nearest
    }

    /// Surface height at planar point `(x, z)`, interpolated across the
    /// triangle containing it. `None` outside the terrain extent.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        let (row, col) = self.layout.quad_at(Vec2::new(x, z))?;

        let origin = self.layout.vertex_xz(row, col);
        let spacing = self.layout.spacing();
        let u = ((x - origin.x) / spacing).clamp(0.0, 1.0);
        let v = ((z - origin.y) / spacing).clamp(0.0, 1.0);

        let ya = self.position(row, col).y;
        let yb = self.position(row + 1, col).y;
        let yc = self.position(row + 1, col + 1).y;
        let yd = self.position(row, col + 1).y;

        // Triangle (a, b, d) covers u + v <= 1, (b, c, d) the rest
        let height = if u + v <= 1.0 {
            ya + (yd - ya) * u + (yb - ya) * v
        } else {
            yc + (yb - yc) * (1.0 - u) + (yd - yc) * (1.0 - v)
        };
        Some(height)
    }
}
