//! Stillness — the quiet wait before a bite check.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::types::clamp01;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct StillnessConfig {
    /// Quiet time required before a bite check starts.
    pub threshold: f32,
}

impl Default for StillnessConfig {
    fn default() -> Self {
        Self {
            threshold: STILLNESS_THRESHOLD_SECS,
        }
    }
}

/// Accumulates quiet time. A cast input twitches the lure instead,
/// taking priority over the threshold even when both land on the same
/// tick.
pub struct StillnessPhase {
    config: StillnessConfig,
    stillness_time: f32,
    progress: f32,
}

impl StillnessPhase {
    pub fn new(config: StillnessConfig) -> Self {
        Self {
            config,
            stillness_time: 0.0,
            progress: 0.0,
        }
    }

    /// Normalized progress toward the bite check in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

impl Default for StillnessPhase {
    fn default() -> Self {
        Self::new(StillnessConfig::default())
    }
}

impl PhaseBehavior for StillnessPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.stillness_time = 0.0;
        self.progress = 0.0;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        self.stillness_time += dt;
        self.progress = clamp01(self.stillness_time / self.config.threshold);
    }

    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase> {
        // Twitch input wins over the threshold on the same tick.
        if ctx.cast_pressed {
            return Some(Phase::MicroTwitch);
        }
        (self.stillness_time >= self.config.threshold).then_some(Phase::BiteCheck)
    }
}
