//! Reeling — the tension-based contest between player and fish.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::{LostReason, Phase};

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct ReelingConfig {
    /// Tension gained per second of reeling, before struggle scaling.
    pub tension_up_rate: f32,
    /// Tension shed per second while released.
    pub tension_down_rate: f32,
    /// Tension at which the line snaps.
    pub max_tension: f32,
    /// Catch progress gained per second of reeling.
    pub progress_rate: f32,
    /// Chance per interval that the fish throws slack.
    pub slack_chance: f32,
    /// Seconds between slack re-rolls while reeling.
    pub slack_interval: f32,
    /// Per-tick escape chance while released at low tension.
    pub escape_threshold: f32,
}

impl Default for ReelingConfig {
    fn default() -> Self {
        Self {
            tension_up_rate: REEL_TENSION_UP_RATE,
            tension_down_rate: REEL_TENSION_DOWN_RATE,
            max_tension: REEL_MAX_TENSION,
            progress_rate: REEL_PROGRESS_RATE,
            slack_chance: REEL_SLACK_CHANCE,
            slack_interval: REEL_SLACK_INTERVAL_SECS,
            escape_threshold: REEL_ESCAPE_THRESHOLD,
        }
    }
}

/// Runs the tension/progress dynamics until one of three outcomes
/// latches: snapped (tension ceiling), caught (full progress), or
/// escaped (fish slips the hook at low tension). Once resolved, further
/// updates leave tension and progress unchanged.
///
/// The internal slack warning does not transition the machine by
/// itself: reeling through it escalates tension gain, and the player
/// acknowledging it with the slack input hands off to the dedicated
/// slack-event phase.
pub struct ReelingPhase {
    config: ReelingConfig,
    tension: f32,
    reel_progress: f32,
    snapped: bool,
    caught: bool,
    escaped: bool,
    slack_active: bool,
    slack_timer: f32,
}

impl ReelingPhase {
    pub fn new(config: ReelingConfig) -> Self {
        Self {
            config,
            tension: 0.0,
            reel_progress: 0.0,
            snapped: false,
            caught: false,
            escaped: false,
            slack_active: false,
            slack_timer: 0.0,
        }
    }

    /// Current line tension in [0, max_tension].
    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Catch progress in [0, 1].
    pub fn reel_progress(&self) -> f32 {
        self.reel_progress
    }

    /// Whether the fish has thrown slack — a UI warning, not a
    /// transition by itself.
    pub fn slack_warning(&self) -> bool {
        self.slack_active
    }

    fn resolved(&self) -> bool {
        self.snapped || self.caught || self.escaped
    }
}

impl Default for ReelingPhase {
    fn default() -> Self {
        Self::new(ReelingConfig::default())
    }
}

impl PhaseBehavior for ReelingPhase {
    fn enter(&mut self, ctx: &mut EncounterContext) {
        self.tension = self.config.max_tension * REEL_START_TENSION_FRACTION;
        self.reel_progress = 0.0;
        self.snapped = false;
        self.caught = false;
        self.escaped = false;
        self.slack_active = false;
        self.slack_timer = 0.0;
        ctx.set_line_tension(self.tension / self.config.max_tension);
    }

    fn update(&mut self, ctx: &mut EncounterContext, dt: f32) {
        if self.resolved() {
            return;
        }

        if ctx.reel_held {
            let mut gain = self.config.tension_up_rate * dt * (1.0 + ctx.struggle_intensity);
            if self.slack_active {
                // Reeling against thrown slack strains the line hard.
                gain *= REEL_SLACK_TENSION_MULTIPLIER;
            }
            self.tension += gain;
            self.reel_progress += self.config.progress_rate * dt;

            self.slack_timer += dt;
            if self.slack_timer >= self.config.slack_interval {
                self.slack_timer = 0.0;
                self.slack_active = ctx.uniform() < self.config.slack_chance;
            }
        } else {
            self.tension -= self.config.tension_down_rate * dt;
            self.slack_active = false;
            self.slack_timer = 0.0;

            let low_tension = self.config.max_tension * REEL_LOW_TENSION_FRACTION;
            if self.tension <= low_tension && ctx.uniform() < self.config.escape_threshold {
                self.escaped = true;
                ctx.lost_reason = LostReason::FishEscaped;
            }
        }

        self.tension = self.tension.clamp(0.0, self.config.max_tension);

        if self.tension >= self.config.max_tension {
            self.snapped = true;
            ctx.lost_reason = LostReason::LineSnapped;
        } else if self.reel_progress >= 1.0 {
            self.caught = true;
        }

        ctx.set_line_tension(self.tension / self.config.max_tension);
    }

    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase> {
        if self.snapped || self.escaped {
            return Some(Phase::Lost);
        }
        if self.caught {
            return Some(Phase::Caught);
        }
        if self.slack_active && ctx.slack_pressed {
            return Some(Phase::SlackEvent);
        }
        None
    }
}
