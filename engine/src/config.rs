//! Sculpt Configuration
//!
//! Grid, generation and brush settings. Defaults match the reference
//! terrain: a 128-segment grid spanning 100 x 100 world units, noise sampled
//! at a wavelength scale of 40 and scaled to +/-5 units of relief.
//!
//! Files are JSON. Every section is `#[serde(default)]`, so a file only needs
//! the keys it wants to override:
//!
//! ```json
//! { "terrain": { "segments": 64 }, "brush": { "size": 8.0 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terrain::brush::BrushSettings;
use crate::terrain::noise_field::OctaveParams;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, format!("must be a positive number, got {value}")));
    }
    Ok(())
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Grid resolution and world extent. Fixed for a mesh's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Quads per side; the grid has `segments + 1` vertices per side
    pub segments: u32,
    /// World-space side length of the square terrain, centered on the origin
    pub size: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            segments: 128,
            size: 100.0,
        }
    }
}

/// Parameters of the single noise pass that seeds terrain heights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// World units per noise unit; larger values give broader features
    pub noise_scale: f32,
    /// Height of a noise value of 1.0
    pub amplitude: f32,
    /// Fixed seed. `None` draws a fresh one on every generation.
    pub seed: Option<u32>,
    /// Fractal layering of the noise field
    pub octaves: OctaveParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            noise_scale: 40.0,
            amplitude: 5.0,
            seed: None,
            octaves: OctaveParams::default(),
        }
    }
}

/// Top-level configuration for a sculpting session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SculptConfig {
    pub terrain: TerrainConfig,
    pub generation: GenerationConfig,
    /// Initial brush; hosts replace it as the user moves sliders
    pub brush: BrushSettings,
}

impl SculptConfig {
    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded sculpt config");
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is inside the range the mesh code assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain.segments == 0 {
            return Err(invalid("terrain.segments", "must be at least 1"));
        }
        require_positive("terrain.size", self.terrain.size)?;
        require_positive("generation.noise_scale", self.generation.noise_scale)?;
        if !self.generation.amplitude.is_finite() {
            return Err(invalid("generation.amplitude", "must be finite"));
        }

        let octaves = &self.generation.octaves;
        if octaves.octaves == 0 {
            return Err(invalid("generation.octaves.octaves", "must be at least 1"));
        }
        if !octaves.persistence.is_finite() || !octaves.lacunarity.is_finite() {
            return Err(invalid(
                "generation.octaves",
                "persistence and lacunarity must be finite",
            ));
        }

        require_positive("brush.size", self.brush.size)?;
        if !self.brush.strength.is_finite() || self.brush.strength < 0.0 {
            return Err(invalid(
                "brush.strength",
                format!("must be a non-negative number, got {}", self.brush.strength),
            ));
        }
        Ok(())
    }
}
