//! Terrain Mesh
//!
//! Owns the fixed-topology heightmap grid: positions, derived normals and the
//! index buffer. Only heights (and the normals derived from them) ever
//! change; X/Z and the triangulation are set once in [`TerrainMesh::flat`].
//!
//! Renderers get read-only slices or an interleaved [`TerrainVertex`] copy.

use glam::{Vec2, Vec3};

use super::grid::GridLayout;
use super::noise_field::NoiseField;
use super::normals;
use super::vertex::TerrainVertex;
use crate::config::{GenerationConfig, TerrainConfig};

/// Heightmap terrain mesh
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    pub(super) layout: GridLayout,
    pub(super) positions: Vec<Vec3>,
    pub(super) normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Flat grid (`y = 0` everywhere) of `segments` quads per side spanning
    /// `size` world units, centered on the origin.
    pub fn flat(segments: u32, size: f32) -> Self {
        let layout = GridLayout::new(segments, size);
        let positions = (0..layout.vertex_count())
            .map(|i| {
                let (row, col) = layout.row_col(i);
                let xz = layout.vertex_xz(row, col);
                Vec3::new(xz.x, 0.0, xz.y)
            })
            .collect();

        Self {
            layout,
            positions,
            normals: vec![Vec3::Y; layout.vertex_count()],
            indices: layout.build_indices(),
        }
    }

    /// Flat grid sized by `config`.
    pub fn new(config: &TerrainConfig) -> Self {
        Self::flat(config.segments, config.size)
    }

    /// Build a grid and run one generation pass over it.
    pub fn generated<F>(config: &TerrainConfig, field: &F, params: &GenerationConfig) -> Self
    where
        F: NoiseField + ?Sized,
    {
        let mut mesh = Self::new(config);
        mesh.generate(field, params);
        mesh
    }

    /// Replace every height with `field(x / scale, z / scale) * amplitude`,
    /// then recompute all normals.
    pub fn generate<F>(&mut self, field: &F, params: &GenerationConfig)
    where
        F: NoiseField + ?Sized,
    {
        let scale = params.noise_scale as f64;
        for position in &mut self.positions {
            let h = field.sample(position.x as f64 / scale, position.z as f64 / scale);
            position.y = h as f32 * params.amplitude;
        }
        self.recompute_normals();

        let (min, max) = self.height_range();
        tracing::debug!(
            vertices = self.positions.len(),
            min_height = min,
            max_height = max,
            "generated terrain heights"
        );
    }

    /// Recompute every vertex normal from the current heights.
    pub fn recompute_normals(&mut self) {
        normals::recompute_all(&self.layout, &self.positions, &mut self.normals);
    }

    // ------------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------------

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle list, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn position(&self, row: u32, col: u32) -> Vec3 {
        self.positions[self.layout.index(row, col)]
    }

    pub fn normal(&self, row: u32, col: u32) -> Vec3 {
        self.normals[self.layout.index(row, col)]
    }

    /// Heights in flat-index order.
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.positions.iter().map(|p| p.y)
    }

    /// Planar coordinates of every vertex, as `Vec2(x, z)`.
    pub fn planar_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.positions.iter().map(|p| Vec2::new(p.x, p.z))
    }

    /// Lowest and highest vertex height.
    pub fn height_range(&self) -> (f32, f32) {
        self.heights()
            .fold((f32::MAX, f32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)))
    }

    /// Interleaved position/normal vertices for upload.
    pub fn vertices(&self) -> Vec<TerrainVertex> {
        let mut out = Vec::with_capacity(self.positions.len());
        self.write_vertices(&mut out);
        out
    }

    /// Refill `out` with interleaved vertices, reusing its allocation.
    pub fn write_vertices(&self, out: &mut Vec<TerrainVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .map(|(p, n)| TerrainVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                }),
        );
    }
}
