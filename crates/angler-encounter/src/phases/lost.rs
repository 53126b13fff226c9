//! Lost — terminal notice display, with the reason the fish got away.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::{LostReason, Phase};

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct LostConfig {
    pub duration: f32,
}

impl Default for LostConfig {
    fn default() -> Self {
        Self {
            duration: LOST_DISPLAY_SECS,
        }
    }
}

/// Lingers for the notice, then returns to idle. The reason is captured
/// from the context on enter (written there by whichever phase decided
/// the loss) and reset to `Unknown` on exit.
pub struct LostPhase {
    config: LostConfig,
    elapsed: f32,
    complete: bool,
    event_ready: bool,
    reason: LostReason,
}

impl LostPhase {
    pub fn new(config: LostConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            complete: false,
            event_ready: false,
            reason: LostReason::Unknown,
        }
    }

    /// Why the fish was lost.
    pub fn reason(&self) -> LostReason {
        self.reason
    }

    /// True from enter until the orchestrator consumes the loss event.
    pub fn event_ready(&self) -> bool {
        self.event_ready
    }

    /// Consume the one-shot loss event flag.
    pub fn take_event(&mut self) -> bool {
        std::mem::take(&mut self.event_ready)
    }
}

impl Default for LostPhase {
    fn default() -> Self {
        Self::new(LostConfig::default())
    }
}

impl PhaseBehavior for LostPhase {
    fn enter(&mut self, ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.complete = false;
        self.event_ready = true;
        self.reason = ctx.lost_reason;
    }

    fn update(&mut self, _ctx: &mut EncounterContext, dt: f32) {
        if self.complete {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.config.duration {
            self.complete = true;
        }
    }

    fn exit(&mut self, ctx: &mut EncounterContext) {
        self.reason = LostReason::Unknown;
        ctx.lost_reason = LostReason::Unknown;
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        self.complete.then_some(Phase::Idle)
    }
}
