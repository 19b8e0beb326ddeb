//! Terrain Module
//!
//! Heightmap grid generated from noise and deformed by brushes.

pub mod brush;
pub mod grid;
pub mod mesh;
pub mod noise_field;
pub mod normals;
pub mod picking;
pub mod vertex;

pub use brush::{BrushDirection, BrushOutcome, BrushSettings, falloff};
pub use grid::{GridLayout, GridRegion};
pub use mesh::TerrainMesh;
pub use noise_field::{NoiseField, OctaveParams, SimplexField};
pub use picking::TerrainHit;
pub use vertex::TerrainVertex;
