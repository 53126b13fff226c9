//! HookOpportunity — the bounded window for setting the hook.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::{LostReason, Phase};

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct HookOpportunityConfig {
    /// How long the window stays open.
    pub window_duration: f32,
    /// Input at or before this time-in-phase counts as too early.
    pub early_penalty_window: f32,
}

impl Default for HookOpportunityConfig {
    fn default() -> Self {
        Self {
            window_duration: HOOK_WINDOW_DURATION_SECS,
            early_penalty_window: HOOK_EARLY_PENALTY_WINDOW_SECS,
        }
    }
}

/// Watches for the hook-set input inside the window.
///
/// The first press latches the outcome: pressing inside the early
/// penalty window loses the fish, pressing afterwards (but before the
/// window closes) hooks it. A latched hook is never overwritten by a
/// later expiry check.
pub struct HookOpportunityPhase {
    config: HookOpportunityConfig,
    elapsed: f32,
    hook_received: bool,
    early_penalty: bool,
    expired: bool,
}

impl HookOpportunityPhase {
    pub fn new(config: HookOpportunityConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            hook_received: false,
            early_penalty: false,
            expired: false,
        }
    }
}

impl Default for HookOpportunityPhase {
    fn default() -> Self {
        Self::new(HookOpportunityConfig::default())
    }
}

impl PhaseBehavior for HookOpportunityPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.hook_received = false;
        self.early_penalty = false;
        self.expired = false;
    }

    fn update(&mut self, ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;

        if !self.hook_received && !self.expired && ctx.cast_pressed {
            self.hook_received = true;
            self.early_penalty = self.elapsed <= self.config.early_penalty_window;
        }
        if !self.hook_received && self.elapsed >= self.config.window_duration {
            self.expired = true;
        }
    }

    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase> {
        if self.hook_received {
            if self.early_penalty {
                ctx.lost_reason = LostReason::EarlyHook;
                return Some(Phase::Lost);
            }
            return Some(Phase::Hooked);
        }
        if self.expired {
            ctx.lost_reason = LostReason::MissedHook;
            return Some(Phase::Lost);
        }
        None
    }
}
