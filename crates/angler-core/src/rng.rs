//! Randomness abstraction for the encounter core.
//!
//! Phase behaviors draw randomness only through [`RandomSource`], so a
//! driver can supply a seeded generator for determinism and tests can
//! supply a scripted sequence.

/// The two randomness primitives the encounter core is allowed to use.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f32;

    /// Uniform draw in `[min, max)`. Returns `min` when the range is empty.
    fn range(&mut self, min: f32, max: f32) -> f32;
}

/// Replays a fixed sequence of `[0, 1)` values, cycling when exhausted.
///
/// Intended for tests that need to force specific rolls.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, index: 0 }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.uniform() * (max - min)
    }
}
