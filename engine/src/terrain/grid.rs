//! Grid Layout
//!
//! Index math for the fixed `(segments + 1) x (segments + 1)` vertex lattice.
//! Row `r` runs along +Z, column `c` along +X, and the lattice is centered on
//! the origin. Nothing in here ever changes after construction.

use glam::Vec2;

/// Immutable lattice description shared by generation, brushing and picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    segments: u32,
    size: f32,
}

/// Inclusive rectangle of grid vertices, in row/column space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRegion {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl GridRegion {
    /// Grow the region by `ring` vertices on every side, clamped to `last`.
    pub fn expanded(&self, ring: u32, last: u32) -> Self {
        Self {
            min_row: self.min_row.saturating_sub(ring),
            max_row: (self.max_row + ring).min(last),
            min_col: self.min_col.saturating_sub(ring),
            max_col: (self.max_col + ring).min(last),
        }
    }

    /// Smallest region covering both `self` and the vertex at `(row, col)`.
    pub fn include(&self, row: u32, col: u32) -> Self {
        Self {
            min_row: self.min_row.min(row),
            max_row: self.max_row.max(row),
            min_col: self.min_col.min(col),
            max_col: self.max_col.max(col),
        }
    }

    pub fn vertex_count(&self) -> usize {
        ((self.max_row - self.min_row + 1) * (self.max_col - self.min_col + 1)) as usize
    }
}

impl GridLayout {
    /// Create a layout. `segments` below 1 is raised to 1; `size` must be
    /// positive, which configuration validation enforces.
    pub fn new(segments: u32, size: f32) -> Self {
        debug_assert!(size > 0.0, "grid extent must be positive");
        Self {
            segments: segments.max(1),
            size,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Vertices per row (and per column).
    #[inline]
    pub fn stride(&self) -> u32 {
        self.segments + 1
    }

    pub fn vertex_count(&self) -> usize {
        (self.stride() * self.stride()) as usize
    }

    pub fn triangle_count(&self) -> usize {
        (self.segments * self.segments * 2) as usize
    }

    /// Distance between neighbouring vertices along either axis.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.size / self.segments as f32
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }

    /// Flat index of the vertex at `(row, col)`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.stride() + col) as usize
    }

    /// Inverse of [`GridLayout::index`].
    #[inline]
    pub fn row_col(&self, index: usize) -> (u32, u32) {
        let stride = self.stride() as usize;
        ((index / stride) as u32, (index % stride) as u32)
    }

    /// World-space X/Z of the vertex at `(row, col)` (returned as `Vec2(x, z)`).
    #[inline]
    pub fn vertex_xz(&self, row: u32, col: u32) -> Vec2 {
        let spacing = self.spacing();
        let half = self.half_extent();
        Vec2::new(-half + col as f32 * spacing, -half + row as f32 * spacing)
    }

    /// Whole-grid region.
    pub fn full_region(&self) -> GridRegion {
        GridRegion {
            min_row: 0,
            max_row: self.segments,
            min_col: 0,
            max_col: self.segments,
        }
    }

    /// Rows/columns whose vertices may lie within `radius` of `center`.
    ///
    /// The bound is padded by one vertex so rounding never drops a candidate;
    /// callers still test the exact distance. Returns `None` when the disk
    /// misses the grid entirely.
    pub fn region_around(&self, center: Vec2, radius: f32) -> Option<GridRegion> {
        let half = self.half_extent();
        if center.x + radius < -half
            || center.x - radius > half
            || center.y + radius < -half
            || center.y - radius > half
        {
            return None;
        }

        let spacing = self.spacing();
        let last = self.segments as f32;
        let to_cell = |world: f32| ((world + half) / spacing).clamp(0.0, last);

        let min_col = to_cell(center.x - radius).floor() as u32;
        let max_col = to_cell(center.x + radius).ceil() as u32;
        let min_row = to_cell(center.y - radius).floor() as u32;
        let max_row = to_cell(center.y + radius).ceil() as u32;

        Some(
            GridRegion {
                min_row,
                max_row,
                min_col,
                max_col,
            }
            .expanded(1, self.segments),
        )
    }

    /// Quad containing a planar point, as `(row, col)` of its lower corner.
    pub fn quad_at(&self, point: Vec2) -> Option<(u32, u32)> {
        let half = self.half_extent();
        if !point.is_finite()
            || point.x < -half
            || point.x > half
            || point.y < -half
            || point.y > half
        {
            return None;
        }
        let spacing = self.spacing();
        let max_quad = self.segments - 1;
        let col = (((point.x + half) / spacing).floor() as u32).min(max_quad);
        let row = (((point.y + half) / spacing).floor() as u32).min(max_quad);
        Some((row, col))
    }

    /// The two triangles of quad `(row, col)`, as flat vertex indices.
    ///
    /// Corners: `a = (r, c)`, `b = (r + 1, c)`, `c = (r + 1, c + 1)`,
    /// `d = (r, c + 1)`. Triangles are `(a, b, d)` and `(b, c, d)`, wound so
    /// a flat grid faces +Y.
    #[inline]
    pub fn quad_triangles(&self, row: u32, col: u32) -> [[usize; 3]; 2] {
        let a = self.index(row, col);
        let b = self.index(row + 1, col);
        let c = self.index(row + 1, col + 1);
        let d = self.index(row, col + 1);
        [[a, b, d], [b, c, d]]
    }

    /// Index buffer for the whole grid, two triangles per quad.
    pub fn build_indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangle_count() * 3);
        for row in 0..self.segments {
            for col in 0..self.segments {
                for tri in self.quad_triangles(row, col) {
                    indices.extend(tri.iter().map(|&i| i as u32));
                }
            }
        }
        indices
    }
}
