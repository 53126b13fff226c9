//! LureDrift — lure on the water, waiting for it to settle.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct LureDriftConfig {
    /// Lure speed below which the lure counts as settled.
    pub velocity_threshold: f32,
    /// Minimum drift time before settling is allowed.
    pub min_drift_time: f32,
}

impl Default for LureDriftConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: DRIFT_VELOCITY_THRESHOLD,
            min_drift_time: DRIFT_MIN_TIME_SECS,
        }
    }
}

/// Waits for the externally-integrated lure velocity to die down.
/// The drift physics itself lives outside the core; this phase only
/// reads the kinematics the driver writes into the context.
pub struct LureDriftPhase {
    config: LureDriftConfig,
    elapsed: f32,
}

impl LureDriftPhase {
    pub fn new(config: LureDriftConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
        }
    }
}

impl Default for LureDriftPhase {
    fn default() -> Self {
        Self::new(LureDriftConfig::default())
    }
}

impl PhaseBehavior for LureDriftPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;
    }

    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase> {
        let settled = self.elapsed >= self.config.min_drift_time
            && ctx.lure_velocity.length() <= self.config.velocity_threshold;
        settled.then_some(Phase::Stillness)
    }
}
