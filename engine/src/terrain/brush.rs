//! Brush Deformation
//!
//! Raise/lower brush with a cosine falloff. The footprint is a vertical
//! cylinder: only planar (X/Z) distance matters. Within the footprint each
//! vertex moves by `strength * w`, where
//!
//! ```text
//! w = (cos(d / R * PI) + 1) / 2
//! ```
//!
//! which is 1 at the center and eases to 0 at the rim with zero slope, so
//! repeated dabs never leave a ridge along the brush edge. Displacement is
//! additive; nothing clamps heights to a target.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::GridRegion;
use super::mesh::TerrainMesh;
use super::normals;

/// Which way a brush pushes the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushDirection {
    #[default]
    Raise,
    Lower,
}

impl BrushDirection {
    /// +1 for raise, -1 for lower
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::Raise => 1.0,
            Self::Lower => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Raise => Self::Lower,
            Self::Lower => Self::Raise,
        }
    }
}

/// Brush parameters for a single application.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Footprint radius in world units
    pub size: f32,
    /// Height change at the brush center per application
    pub strength: f32,
    pub direction: BrushDirection,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: 5.0,
            strength: 0.5,
            direction: BrushDirection::Raise,
        }
    }
}

impl BrushSettings {
    pub fn new(size: f32, strength: f32, direction: BrushDirection) -> Self {
        Self {
            size,
            strength,
            direction,
        }
    }

    /// Same brush pushing the other way.
    pub fn inverted(&self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..*self
        }
    }

    /// Whether applying this brush can be done without corrupting heights.
    pub fn is_usable(&self) -> bool {
        self.size.is_finite() && self.size > 0.0 && self.strength.is_finite() && self.strength >= 0.0
    }

    /// Signed height change at planar distance `distance` from the center.
    #[inline]
    pub fn displacement(&self, distance: f32) -> f32 {
        self.strength * falloff(distance, self.size) * self.direction.sign()
    }
}

/// Cosine falloff weight: 1 at the center, 0 at and beyond `radius`.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        return 0.0;
    }
    ((distance / radius * PI).cos() + 1.0) * 0.5
}

/// What a brush application changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrushOutcome {
    /// Vertices whose height changed
    pub affected: usize,
    /// Bounding region of the changed vertices
    pub region: Option<GridRegion>,
}

impl BrushOutcome {
    pub fn is_noop(&self) -> bool {
        self.affected == 0
    }
}

impl TerrainMesh {
    /// Deform the terrain around the planar point `center` (`Vec2(x, z)`).
    ///
    /// Heights inside the footprint move by the brush displacement, then
    /// normals are refreshed for the changed vertices and their one-ring.
    /// A center off the grid, a non-finite center, or an unusable brush
    /// leaves the mesh untouched.
    pub fn apply_brush(&mut self, center: Vec2, brush: &BrushSettings) -> BrushOutcome {
        if !center.is_finite() || !brush.is_usable() {
            tracing::debug!(?center, ?brush, "ignoring brush with non-finite or invalid input");
            return BrushOutcome::default();
        }

        let Some(candidates) = self.layout.region_around(center, brush.size) else {
            return BrushOutcome::default();
        };

        let radius_sq = brush.size * brush.size;
        let mut outcome = BrushOutcome::default();

        for row in candidates.min_row..=candidates.max_row {
            for col in candidates.min_col..=candidates.max_col {
                let idx = self.layout.index(row, col);
                let position = &mut self.positions[idx];

                let dx = position.x - center.x;
                let dz = position.z - center.y;
                let dist_sq = dx * dx + dz * dz;
                if dist_sq >= radius_sq {
                    continue;
                }

                // Near the rim the displacement can round away entirely
                let height = position.y + brush.displacement(dist_sq.sqrt());
                if height == position.y {
                    continue;
                }
                position.y = height;

                outcome.affected += 1;
                outcome.region = Some(match outcome.region {
                    Some(region) => region.include(row, col),
                    None => GridRegion {
                        min_row: row,
                        max_row: row,
                        min_col: col,
                        max_col: col,
                    },
                });
            }
        }

        if let Some(region) = outcome.region {
            let dirty = region.expanded(1, self.layout.segments());
            normals::recompute_region(&self.layout, &self.positions, &mut self.normals, dirty);
        }

        outcome
    }
}
