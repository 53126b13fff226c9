//! Hooked — the hook-set beat between the window and the fight.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::types::clamp01;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct HookedConfig {
    pub duration: f32,
}

impl Default for HookedConfig {
    fn default() -> Self {
        Self {
            duration: HOOK_SET_DURATION_SECS,
        }
    }
}

/// Short fixed-length beat, then into reeling.
pub struct HookedPhase {
    config: HookedConfig,
    elapsed: f32,
    progress: f32,
}

impl HookedPhase {
    pub fn new(config: HookedConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            progress: 0.0,
        }
    }
}

impl Default for HookedPhase {
    fn default() -> Self {
        Self::new(HookedConfig::default())
    }
}

impl PhaseBehavior for HookedPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.progress = 0.0;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;
        self.progress = clamp01(self.elapsed / self.config.duration);
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        (self.progress >= 1.0).then_some(Phase::Reeling)
    }
}
