//! Normal Recomputation
//!
//! Per-vertex normals from area-weighted face normals of the fixed grid
//! triangulation. Each vertex gathers its incident triangles in the same
//! order every time, so recomputing a sub-region yields exactly the values a
//! full pass would.

use glam::Vec3;

use super::grid::{GridLayout, GridRegion};

/// Unnormalized face normal of a triangle. Length = 2x triangle area.
#[inline]
fn face_normal(positions: &[Vec3], tri: [usize; 3]) -> Vec3 {
    let p0 = positions[tri[0]];
    let edge1 = positions[tri[1]] - p0;
    let edge2 = positions[tri[2]] - p0;
    edge1.cross(edge2)
}

/// Normal of the vertex at `(row, col)` for the current positions.
pub fn vertex_normal(layout: &GridLayout, positions: &[Vec3], row: u32, col: u32) -> Vec3 {
    let last_quad = layout.segments() - 1;
    let idx = layout.index(row, col);

    let mut sum = Vec3::ZERO;
    for quad_row in row.saturating_sub(1)..=row.min(last_quad) {
        for quad_col in col.saturating_sub(1)..=col.min(last_quad) {
            for tri in layout.quad_triangles(quad_row, quad_col) {
                if tri.contains(&idx) {
                    sum += face_normal(positions, tri);
                }
            }
        }
    }

    // Grid spacing is never zero, so every face has a +Y component and the
    // sum only degenerates on non-finite input.
    sum.try_normalize().unwrap_or(Vec3::Y)
}

/// Recompute normals for every vertex inside `region`.
pub fn recompute_region(
    layout: &GridLayout,
    positions: &[Vec3],
    normals: &mut [Vec3],
    region: GridRegion,
) {
    for row in region.min_row..=region.max_row {
        for col in region.min_col..=region.max_col {
            normals[layout.index(row, col)] = vertex_normal(layout, positions, row, col);
        }
    }
}

/// Recompute normals for the whole grid.
pub fn recompute_all(layout: &GridLayout, positions: &[Vec3], normals: &mut [Vec3]) {
    recompute_region(layout, positions, normals, layout.full_region());
}
