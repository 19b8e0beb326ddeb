//! Noise Field
//!
//! Deterministic 2D scalar noise used to seed terrain heights. Anything that
//! maps `(x, z)` to a continuous value in `[-1, 1]` qualifies; the default is
//! seeded simplex noise with optional fractal octaves.

use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

/// Continuous, bounded, stateless 2D scalar function.
pub trait NoiseField {
    /// Sample the field. Implementations return values in `[-1, 1]` and give
    /// the same answer for the same input for their whole lifetime.
    fn sample(&self, x: f64, z: f64) -> f64;
}

impl<F> NoiseField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// Fractal layering parameters for [`SimplexField`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveParams {
    /// Number of layers summed (1 = plain simplex)
    pub octaves: u32,
    /// Amplitude multiplier per layer
    pub persistence: f64,
    /// Frequency multiplier per layer
    pub lacunarity: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Seeded simplex noise, optionally layered into fractal Brownian motion.
#[derive(Clone)]
pub struct SimplexField {
    seed: u32,
    simplex: Simplex,
    octaves: OctaveParams,
}

impl std::fmt::Debug for SimplexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexField")
            .field("seed", &self.seed)
            .field("octaves", &self.octaves)
            .finish()
    }
}

impl SimplexField {
    /// Single-octave simplex noise with the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_octaves(seed, OctaveParams::default())
    }

    /// Simplex noise layered according to `octaves`.
    pub fn with_octaves(seed: u32, octaves: OctaveParams) -> Self {
        Self {
            seed,
            simplex: Simplex::new(seed),
            octaves: OctaveParams {
                octaves: octaves.octaves.max(1),
                ..octaves
            },
        }
    }

    /// A field with a freshly drawn random seed.
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn octaves(&self) -> OctaveParams {
        self.octaves
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, x: f64, z: f64) -> f64 {
        let OctaveParams {
            octaves,
            persistence,
            lacunarity,
        } = self.octaves;

        let mut total = 0.0;
        let mut norm = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            total += self.simplex.get([x * frequency, z * frequency]) * amplitude;
            norm += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if norm > 0.0 {
            (total / norm).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}
