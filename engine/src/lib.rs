//! Terrain Sculpt Engine
//!
//! CPU-side heightmap terrain for interactive sculpting: a fixed grid seeded
//! from procedural noise, deformed in place by falloff brushes, with normals
//! kept consistent for rendering after every call.
//!
//! # Modules
//!
//! - [`terrain`] - Grid, noise field, brush deformation, normals and picking
//! - [`sculpt`] - Stroke lifecycle and terrain regeneration
//! - [`camera`] - Screen-to-world rays for pointer picking
//! - [`config`] - JSON-backed configuration with reference defaults
//!
//! # Example
//!
//! ```no_run
//! use glam::Vec2;
//! use terrain_sculpt_engine::config::SculptConfig;
//! use terrain_sculpt_engine::terrain::{BrushDirection, BrushSettings};
//! use terrain_sculpt_engine::sculpt::SculptSession;
//!
//! let mut session = SculptSession::new(SculptConfig::default()).unwrap();
//! session.set_brush(BrushSettings::new(5.0, 0.5, BrushDirection::Raise));
//!
//! // Pointer down, a couple of moves, pointer up
//! session.press(Some(Vec2::new(0.0, 0.0)));
//! session.drag(Some(Vec2::new(1.0, 0.0)));
//! session.release();
//!
//! // Upload to the GPU
//! let vertices = session.mesh().vertices();
//! let indices = session.mesh().indices();
//! # let _ = (vertices, indices);
//! ```

pub mod camera;
pub mod config;
pub mod sculpt;
pub mod terrain;

pub use config::{ConfigError, SculptConfig};
pub use sculpt::SculptSession;
pub use terrain::{BrushDirection, BrushSettings, NoiseField, SimplexField, TerrainMesh};
