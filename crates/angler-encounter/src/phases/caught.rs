//! Caught — terminal celebration display.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct CaughtConfig {
    pub duration: f32,
}

impl Default for CaughtConfig {
    fn default() -> Self {
        Self {
            duration: CAUGHT_DISPLAY_SECS,
        }
    }
}

/// Lingers for the celebration, then returns to idle. The timer freezes
/// once complete.
pub struct CaughtPhase {
    config: CaughtConfig,
    elapsed: f32,
    complete: bool,
    event_ready: bool,
}

impl CaughtPhase {
    pub fn new(config: CaughtConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            complete: false,
            event_ready: false,
        }
    }

    /// True from enter until the orchestrator consumes the catch event.
    pub fn event_ready(&self) -> bool {
        self.event_ready
    }

    /// Consume the one-shot catch event flag.
    pub fn take_event(&mut self) -> bool {
        std::mem::take(&mut self.event_ready)
    }
}

impl Default for CaughtPhase {
    fn default() -> Self {
        Self::new(CaughtConfig::default())
    }
}

impl PhaseBehavior for CaughtPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.complete = false;
        self.event_ready = true;
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

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        self.complete.then_some(Phase::Idle)
    }
}
