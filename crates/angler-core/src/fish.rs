//! Fish species descriptors — static configuration loaded once per zone.

use serde::{Deserialize, Serialize};

use crate::constants::RARE_RARITY_THRESHOLD;
use crate::rng::RandomSource;
use crate::types::clamp01;

/// Descriptor validation failures. These are configuration defects,
/// surfaced at load time rather than mid-encounter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FishConfigError {
    #[error("fish descriptor has an empty id")]
    EmptyId,
    #[error("fish `{id}` has an empty display name")]
    EmptyDisplayName { id: String },
    #[error("fish `{id}` has a negative minimum wait time")]
    NegativeWaitTime { id: String },
    #[error("fish `{id}` has max wait time below min wait time")]
    InvertedWaitRange { id: String },
    #[error("fish `{id}` has rarity outside [0, 1]")]
    RarityOutOfRange { id: String },
}

/// Shape of a species' response curve over the hook window.
///
/// Evaluated at normalized time `t` in [0, 1]; the result scales how
/// strongly the species telegraphs its bite at that point of the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum BiteWindowCurve {
    /// Constant response across the whole window.
    Flat { value: f32 },
    /// Linear ramp from `start` at t=0 to `end` at t=1.
    Linear { start: f32, end: f32 },
    /// Rises to `peak_value` at `peak_at`, falls off toward the edges.
    Peaked { peak_at: f32, peak_value: f32 },
}

impl BiteWindowCurve {
    /// Evaluate at clamped normalized time.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = clamp01(t);
        match *self {
            BiteWindowCurve::Flat { value } => value,
            BiteWindowCurve::Linear { start, end } => start + (end - start) * t,
            BiteWindowCurve::Peaked { peak_at, peak_value } => {
                let peak_at = clamp01(peak_at);
                if t <= peak_at {
                    if peak_at <= f32::EPSILON {
                        peak_value
                    } else {
                        peak_value * (t / peak_at)
                    }
                } else if peak_at >= 1.0 - f32::EPSILON {
                    peak_value
                } else {
                    peak_value * (1.0 - (t - peak_at) / (1.0 - peak_at))
                }
            }
        }
    }
}

impl Default for BiteWindowCurve {
    fn default() -> Self {
        BiteWindowCurve::Flat { value: 1.0 }
    }
}

/// Immutable per-species configuration. Loaded once, never mutated at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishDescriptor {
    pub id: String,
    pub display_name: String,
    /// Bite-window response curve, evaluated at clamped normalized time.
    pub bite_window_curve: BiteWindowCurve,
    /// Shortest wait before this species considers biting (seconds).
    pub min_wait_time: f32,
    /// Longest wait before this species considers biting (seconds).
    pub max_wait_time: f32,
    /// Selection weight in [0, 1]; doubles as the rarity classifier.
    pub rarity_base: f32,
}

impl FishDescriptor {
    /// Check the descriptor invariants.
    pub fn validate(&self) -> Result<(), FishConfigError> {
        if self.id.is_empty() {
            return Err(FishConfigError::EmptyId);
        }
        if self.display_name.is_empty() {
            return Err(FishConfigError::EmptyDisplayName {
                id: self.id.clone(),
            });
        }
        if self.min_wait_time < 0.0 {
            return Err(FishConfigError::NegativeWaitTime {
                id: self.id.clone(),
            });
        }
        if self.max_wait_time < self.min_wait_time {
            return Err(FishConfigError::InvertedWaitRange {
                id: self.id.clone(),
            });
        }
        if !(0.0..=1.0).contains(&self.rarity_base) {
            return Err(FishConfigError::RarityOutOfRange {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Whether this species counts as a rare catch.
    pub fn is_rare(&self) -> bool {
        self.rarity_base < RARE_RARITY_THRESHOLD
    }

    /// Draw a wait time from this species' range.
    pub fn roll_wait_time(&self, rng: &mut dyn RandomSource) -> f32 {
        rng.range(self.min_wait_time, self.max_wait_time)
    }
}
