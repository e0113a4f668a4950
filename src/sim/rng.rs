//! Random sources for the simulation
//!
//! Gameplay only ever needs uniform samples in `[0, 1)`. Live play uses a
//! seeded PCG stream; tests script the exact samples.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Random sign: `+1.0` when the sample is above one half, else `-1.0`
    fn next_sign(&mut self) -> f32 {
        if self.next_unit() > 0.5 { 1.0 } else { -1.0 }
    }

    /// Uniform perturbation in `[-1, 1)`
    fn next_perturbation(&mut self) -> f32 {
        (self.next_unit() - 0.5) * 2.0
    }
}

/// Seeded PCG32 stream (reproducible per seed)
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRng {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    /// Samples outside `[0, 1)` are clamped into range
    pub fn new(samples: &[f32]) -> Self {
        let samples = samples
            .iter()
            .map(|s| s.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { samples, cursor: 0 }
    }

    /// How many samples have been consumed
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
