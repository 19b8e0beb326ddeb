//! GPU Vertex Layout
//!
//! Interleaved position/normal vertex for handing the terrain to a
//! rasterization pipeline.

use bytemuck::{Pod, Zeroable};

/// Vertex for the terrain surface
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 24]);

impl TerrainVertex {
    // position: Float32x3 @ offset 0, normal: Float32x3 @ offset 12
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout: 24 bytes stride, 2 attributes
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TerrainVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
