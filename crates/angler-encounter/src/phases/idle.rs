//! Idle — waiting for a cast input.

use angler_core::context::EncounterContext;
use angler_core::enums::Phase;

use crate::behavior::PhaseBehavior;

/// Waits for the cast input, then hands off to casting.
///
/// The request flag is sticky: once a press is seen during an update,
/// the transition fires even if the momentary flag has been cleared by
/// the time the machine polls `next`.
pub struct IdlePhase {
    cast_requested: bool,
}

impl IdlePhase {
    pub fn new() -> Self {
        Self {
            cast_requested: false,
        }
    }
}

impl Default for IdlePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseBehavior for IdlePhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.cast_requested = false;
    }

    fn update(&mut self, ctx: &mut EncounterContext, _dt: f32) {
        if ctx.cast_pressed {
            self.cast_requested = true;
        }
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        self.cast_requested.then_some(Phase::Casting)
    }
}
