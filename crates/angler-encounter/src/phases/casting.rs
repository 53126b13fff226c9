//! Casting — lure in flight toward its landing point.

use glam::Vec2;

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::types::clamp01;

use crate::behavior::PhaseBehavior;

/// Tuning for the cast flight.
#[derive(Debug, Clone, Copy)]
pub struct CastingConfig {
    /// Flight time in seconds, clamped to a minimum at construction.
    pub duration: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl CastingConfig {
    pub fn new(duration: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            duration: duration.max(CAST_DURATION_FLOOR_SECS),
            min_distance,
            max_distance: max_distance.max(min_distance),
        }
    }
}

impl Default for CastingConfig {
    fn default() -> Self {
        Self::new(CAST_DURATION_SECS, CAST_MIN_DISTANCE, CAST_MAX_DISTANCE)
    }
}

/// Flies the lure from the player toward a rolled landing point.
pub struct CastingPhase {
    config: CastingConfig,
    elapsed: f32,
    progress: f32,
    landing_point: Vec2,
}

impl CastingPhase {
    pub fn new(config: CastingConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            progress: 0.0,
            landing_point: Vec2::ZERO,
        }
    }

    /// Where the lure will land, rolled on enter. The lure animation
    /// outside the core interpolates toward this point.
    pub fn landing_point(&self) -> Vec2 {
        self.landing_point
    }

    /// Normalized flight progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

impl Default for CastingPhase {
    fn default() -> Self {
        Self::new(CastingConfig::default())
    }
}

impl PhaseBehavior for CastingPhase {
    fn enter(&mut self, ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.progress = 0.0;

        let roll = ctx.uniform();
        let distance =
            self.config.min_distance + (self.config.max_distance - self.config.min_distance) * roll;
        let direction = ctx.cast_direction.try_normalize().unwrap_or(Vec2::X);
        self.landing_point = ctx.lure_position + direction * distance;
        ctx.line_length = distance;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;
        self.progress = clamp01(self.elapsed / self.config.duration);
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        (self.elapsed >= self.config.duration).then_some(Phase::LureDrift)
    }
}
