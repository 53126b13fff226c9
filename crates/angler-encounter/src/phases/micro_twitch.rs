//! MicroTwitch — a short player-initiated lure twitch.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::types::clamp01;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct MicroTwitchConfig {
    /// Twitch duration, clamped to a floor at construction.
    pub duration: f32,
}

impl MicroTwitchConfig {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(TWITCH_DURATION_FLOOR_SECS),
        }
    }
}

impl Default for MicroTwitchConfig {
    fn default() -> Self {
        Self::new(TWITCH_DURATION_SECS)
    }
}

/// Plays out the twitch, then drops back into stillness.
pub struct MicroTwitchPhase {
    config: MicroTwitchConfig,
    elapsed: f32,
    progress: f32,
}

impl MicroTwitchPhase {
    pub fn new(config: MicroTwitchConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

impl Default for MicroTwitchPhase {
    fn default() -> Self {
        Self::new(MicroTwitchConfig::default())
    }
}

impl PhaseBehavior for MicroTwitchPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.progress = 0.0;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;
        self.progress = clamp01(self.elapsed / self.config.duration);
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        (self.progress >= 1.0).then_some(Phase::Stillness)
    }
}
