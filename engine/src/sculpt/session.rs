//! Sculpt Session
//!
//! Drives a terrain through its lifecycle: generate on creation, deform with
//! pointer strokes, regenerate wholesale on reset.
//!
//! # Stroke Workflow
//!
//! 1. `press` when the button goes down: starts a stroke and applies one dab
//! 2. `drag` for every pointer move while held: one dab each
//! 3. `release` when the button comes up: returns the stroke summary
//!
//! Points are `Option`s because the pointer may be off the terrain; a `None`
//! keeps the stroke alive without touching the mesh.

use glam::Vec2;

use crate::camera::Ray;
use crate::config::{ConfigError, SculptConfig};
use crate::terrain::{BrushOutcome, BrushSettings, SimplexField, TerrainMesh};

/// State of the current stroke
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No button held
    #[default]
    Idle,
    /// Button held; dabs applied so far
    Stroking {
        dabs: u32,
        affected: usize,
        last_point: Option<Vec2>,
    },
}

/// Totals for a finished stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeSummary {
    /// Dabs that touched the mesh
    pub dabs: u32,
    /// Sum of affected vertex counts over all dabs
    pub affected: usize,
}

/// A terrain plus the brush and stroke state acting on it.
pub struct SculptSession {
    config: SculptConfig,
    mesh: TerrainMesh,
    seed: u32,
    brush: BrushSettings,
    stroke: StrokeState,
    /// Number of terrains generated by this session
    generation: u32,
}

impl SculptSession {
    /// Validate `config` and generate the first terrain.
    pub fn new(config: SculptConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.generation.seed.unwrap_or_else(rand::random);
        let mut session = Self {
            config,
            mesh: TerrainMesh::new(&config.terrain),
            seed,
            brush: config.brush,
            stroke: StrokeState::Idle,
            generation: 0,
        };
        session.regenerate(seed);
        Ok(session)
    }

    /// Discard the terrain and generate a new one. Without a configured seed
    /// every reset draws a fresh random seed. With a fixed seed the same
    /// terrain comes back, so reset only clears the sculpting.
    pub fn reset(&mut self) {
        let seed = self.config.generation.seed.unwrap_or_else(rand::random);
        self.regenerate(seed);
    }

    /// Discard the terrain and generate a new one from `seed`.
    pub fn reset_with_seed(&mut self, seed: u32) {
        self.regenerate(seed);
    }

    fn regenerate(&mut self, seed: u32) {
        let field = SimplexField::with_octaves(seed, self.config.generation.octaves);
        self.mesh = TerrainMesh::generated(&self.config.terrain, &field, &self.config.generation);
        self.seed = seed;
        self.stroke = StrokeState::Idle;
        self.generation += 1;
        tracing::info!(
            seed,
            generation = self.generation,
            vertices = self.mesh.vertex_count(),
            "terrain generated"
        );
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    pub fn config(&self) -> &SculptConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Replace brush settings; takes effect on the next dab.
    pub fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = brush;
    }

    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.stroke, StrokeState::Stroking { .. })
    }

    /// Brush center under a pointer ray, if the ray meets the terrain.
    pub fn pick(&self, ray: &Ray) -> Option<Vec2> {
        self.mesh.raycast(ray).map(|hit| hit.planar())
    }

    /// Button down: start a stroke and apply the first dab.
    pub fn press(&mut self, point: Option<Vec2>) -> BrushOutcome {
        if self.is_stroking() {
            tracing::debug!("press while already stroking; continuing stroke");
        } else {
            self.stroke = StrokeState::Stroking {
                dabs: 0,
                affected: 0,
                last_point: None,
            };
        }
        self.dab(point)
    }

    /// Pointer move: apply a dab if a stroke is in progress. A move that
    /// lands on the previous dab's point is dropped, so a pointer resting in
    /// place does not keep piling height onto one spot.
    pub fn drag(&mut self, point: Option<Vec2>) -> BrushOutcome {
        match self.stroke {
            StrokeState::Idle => BrushOutcome::default(),
            StrokeState::Stroking { last_point, .. } if point.is_some() && point == last_point => {
                BrushOutcome::default()
            }
            StrokeState::Stroking { .. } => self.dab(point),
        }
    }

    /// Button up: end the stroke. `None` if no stroke was in progress.
    pub fn release(&mut self) -> Option<StrokeSummary> {
        match std::mem::take(&mut self.stroke) {
            StrokeState::Idle => None,
            StrokeState::Stroking { dabs, affected, .. } => {
                tracing::debug!(dabs, affected, "stroke finished");
                Some(StrokeSummary { dabs, affected })
            }
        }
    }

    fn dab(&mut self, point: Option<Vec2>) -> BrushOutcome {
        let Some(center) = point else {
            return BrushOutcome::default();
        };
        let outcome = self.mesh.apply_brush(center, &self.brush);

        if let StrokeState::Stroking {
            dabs,
            affected,
            last_point,
        } = &mut self.stroke
        {
            if !outcome.is_noop() {
                *dabs += 1;
                *affected += outcome.affected;
            }
            *last_point = Some(center);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainConfig;
    use crate::terrain::BrushDirection;

    fn small_config(seed: Option<u32>) -> SculptConfig {
        let mut config = SculptConfig::default();
        config.terrain = TerrainConfig {
            segments: 16,
            size: 16.0,
        };
        config.generation.seed = seed;
        config
    }

    #[test]
    fn test_new_uses_configured_seed() {
        let session = SculptSession::new(small_config(Some(77))).unwrap();
        assert_eq!(session.seed(), 77);
        assert_eq!(session.generation(), 1);
        assert_eq!(session.mesh().vertex_count(), 17 * 17);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = small_config(None);
        config.terrain.size = -1.0;
        assert!(SculptSession::new(config).is_err());
    }

    #[test]
    fn test_drag_without_press_does_nothing() {
        let mut session = SculptSession::new(small_config(Some(1))).unwrap();
        let before: Vec<f32> = session.mesh().heights().collect();
        let outcome = session.drag(Some(Vec2::ZERO));
        assert!(outcome.is_noop());
        assert_eq!(session.mesh().heights().collect::<Vec<_>>(), before);
        assert!(session.release().is_none());
    }

    #[test]
    fn test_stroke_counts_dabs() {
        let mut session = SculptSession::new(small_config(Some(1))).unwrap();
        session.set_brush(BrushSettings::new(2.0, 0.25, BrushDirection::Raise));

        assert!(!session.press(Some(Vec2::ZERO)).is_noop());
        session.drag(Some(Vec2::new(1.0, 0.0)));
        // Pointer slid off the terrain mid-stroke
        assert!(session.drag(None).is_noop());
        session.drag(Some(Vec2::new(2.0, 0.0)));

        let summary = session.release().unwrap();
        assert_eq!(summary.dabs, 3);
        assert!(summary.affected > 0);
        assert!(!session.is_stroking());
    }

    #[test]
    fn test_reset_with_seed_replaces_mesh() {
        let mut session = SculptSession::new(small_config(Some(5))).unwrap();
        session.press(Some(Vec2::ZERO));
        session.reset_with_seed(5);

        let fresh = SculptSession::new(small_config(Some(5))).unwrap();
        assert_eq!(session.mesh().positions(), fresh.mesh().positions());
        assert_eq!(session.generation(), 2);
        assert!(!session.is_stroking());
    }

    #[test]
    fn test_drag_on_same_point_is_skipped() {
        let mut session = SculptSession::new(small_config(Some(1))).unwrap();
        session.set_brush(BrushSettings::new(2.0, 0.25, BrushDirection::Raise));

        session.press(Some(Vec2::ZERO));
        let after_press: Vec<f32> = session.mesh().heights().collect();
        assert!(session.drag(Some(Vec2::ZERO)).is_noop());
        assert_eq!(session.mesh().heights().collect::<Vec<_>>(), after_press);

        // Moving away and back dabs again
        assert!(!session.drag(Some(Vec2::new(1.0, 0.0))).is_noop());
        assert!(!session.drag(Some(Vec2::ZERO)).is_noop());
        assert_eq!(session.release().unwrap().dabs, 3);
    }

    #[test]
    fn test_reset_with_fixed_seed_clears_sculpting() {
        let mut session = SculptSession::new(small_config(Some(12))).unwrap();
        let original: Vec<f32> = session.mesh().heights().collect();

        session.press(Some(Vec2::ZERO));
        session.release();
        assert_ne!(session.mesh().heights().collect::<Vec<_>>(), original);

        session.reset();
        assert_eq!(session.seed(), 12);
        assert_eq!(session.mesh().heights().collect::<Vec<_>>(), original);
    }

    #[test]
    fn test_pick_then_press() {
        let mut session = SculptSession::new(small_config(Some(9))).unwrap();
        let ray = Ray::new(glam::Vec3::new(0.5, 50.0, 0.5), glam::Vec3::NEG_Y);
        let center = session.pick(&ray).unwrap();
        assert!((center - Vec2::new(0.5, 0.5)).length() < 1e-3);
        assert!(!session.press(Some(center)).is_noop());
    }
}
