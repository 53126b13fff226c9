//! SlackEvent — the fish threw slack; release the reel or snap the line.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::{LostReason, Phase};

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct SlackEventConfig {
    /// Continuous release time needed to clear the event.
    pub required_release_duration: f32,
    /// Total reel-held time that snaps the line.
    pub max_hold_duration: f32,
}

impl Default for SlackEventConfig {
    fn default() -> Self {
        Self {
            required_release_duration: SLACK_REQUIRED_RELEASE_SECS,
            max_hold_duration: SLACK_MAX_HOLD_SECS,
        }
    }
}

/// Resolves to cleared (back to reeling) when the reel stays released
/// long enough, or snapped (lost) when it is held too long. Resuming
/// the reel resets the release accumulation to zero.
pub struct SlackEventPhase {
    config: SlackEventConfig,
    release_time: f32,
    hold_time: f32,
    cleared: bool,
    snapped: bool,
}

impl SlackEventPhase {
    pub fn new(config: SlackEventConfig) -> Self {
        Self {
            config,
            release_time: 0.0,
            hold_time: 0.0,
            cleared: false,
            snapped: false,
        }
    }
}

impl Default for SlackEventPhase {
    fn default() -> Self {
        Self::new(SlackEventConfig::default())
    }
}

impl PhaseBehavior for SlackEventPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.release_time = 0.0;
        self.hold_time = 0.0;
        self.cleared = false;
        self.snapped = false;
    }

    fn update(&mut self, ctx: &mut EncounterContext, dt: f32) {
        if self.cleared || self.snapped {
            return;
        }

        if ctx.reel_held {
            self.hold_time += dt;
            self.release_time = 0.0;
            if self.hold_time >= self.config.max_hold_duration {
                self.snapped = true;
                ctx.lost_reason = LostReason::SlackEventFailure;
            }
        } else {
            self.release_time += dt;
            if self.release_time >= self.config.required_release_duration {
                self.cleared = true;
            }
        }
    }

    fn next(&mut self, _ctx: &mut EncounterContext) -> Option<Phase> {
        if self.cleared {
            return Some(Phase::Reeling);
        }
        if self.snapped {
            return Some(Phase::Lost);
        }
        None
    }
}
