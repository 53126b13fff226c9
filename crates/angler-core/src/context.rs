//! The shared encounter context — the one mutable record every phase
//! behavior reads and writes.
//!
//! The context is owned by the external driver and passed by mutable
//! borrow into every phase call. No phase behavior may hold its own copy
//! of context fields across calls.

use glam::Vec2;

use crate::enums::{LostReason, Phase};
use crate::fish::FishDescriptor;
use crate::rng::RandomSource;
use crate::types::clamp01;

/// Shared mutable state for a single encounter attempt.
///
/// Created once per attempt; [`EncounterContext::reset_for_attempt`]
/// restores it when the encounter returns to idle from a terminal phase.
pub struct EncounterContext {
    /// The currently active phase (mirrored by the state machine).
    pub phase: Phase,
    /// Seconds spent in the current phase; reset to 0 on every transition.
    pub time_in_phase: f32,

    // --- Lure and line (written by the driver from external physics) ---
    pub lure_position: Vec2,
    pub lure_velocity: Vec2,
    pub line_length: f32,
    /// Normalized line strain in [0, 1].
    pub line_tension: f32,

    // --- Inputs (momentary flags cleared by the driver each tick) ---
    pub cast_pressed: bool,
    pub slack_pressed: bool,
    pub cancel_pressed: bool,
    /// Held flag: true for every tick the reel input is down.
    pub reel_held: bool,
    /// Facing direction supplied by the orchestration layer; casts land
    /// along this direction.
    pub cast_direction: Vec2,

    // --- Fish state ---
    pub has_fish_interest: bool,
    pub has_hooked_fish: bool,
    pub hooked_fish_id: Option<String>,
    /// How hard the hooked fish is fighting, in [0, 1].
    pub struggle_intensity: f32,
    pub selected_fish: Option<FishDescriptor>,
    pub available_fish: Vec<FishDescriptor>,

    // --- Zone ---
    pub zone_id: String,
    /// Additive fractional bite modifier. The zone setter clamps it
    /// non-negative; direct writes may go below zero and are clamped
    /// downstream by the bite check.
    pub bite_probability_modifier: f32,

    /// Pending/current loss reason. Phases that decide a loss write it
    /// before returning `Lost`; the lost phase resets it on exit.
    pub lost_reason: LostReason,

    rng: Box<dyn RandomSource>,
}

impl EncounterContext {
    /// Create a fresh context using the given randomness source.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            phase: Phase::Idle,
            time_in_phase: 0.0,
            lure_position: Vec2::ZERO,
            lure_velocity: Vec2::ZERO,
            line_length: 0.0,
            line_tension: 0.0,
            cast_pressed: false,
            slack_pressed: false,
            cancel_pressed: false,
            reel_held: false,
            cast_direction: Vec2::X,
            has_fish_interest: false,
            has_hooked_fish: false,
            hooked_fish_id: None,
            struggle_intensity: 0.0,
            selected_fish: None,
            available_fish: Vec::new(),
            zone_id: String::new(),
            bite_probability_modifier: 0.0,
            lost_reason: LostReason::Unknown,
            rng,
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f32 {
        self.rng.uniform()
    }

    /// Uniform draw in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.range(min, max)
    }

    /// Configure the active fishing zone. The modifier is clamped
    /// non-negative here; the bite check applies the full [0, 1] clamp.
    pub fn set_zone(&mut self, zone_id: impl Into<String>, bite_modifier: f32) {
        self.zone_id = zone_id.into();
        self.bite_probability_modifier = bite_modifier.max(0.0);
    }

    /// Mirror the line tension computed by the reeling logic (or the
    /// orchestration layer), clamped to [0, 1].
    pub fn set_line_tension(&mut self, tension: f32) {
        self.line_tension = clamp01(tension);
    }

    /// Mirror a fish-AI hook decision into the context.
    pub fn set_hooked_fish(&mut self, fish_id: impl Into<String>, struggle_intensity: f32) {
        self.has_hooked_fish = true;
        self.hooked_fish_id = Some(fish_id.into());
        self.struggle_intensity = clamp01(struggle_intensity);
    }

    /// Clear any hooked-fish state.
    pub fn clear_hooked_fish(&mut self) {
        self.has_hooked_fish = false;
        self.hooked_fish_id = None;
        self.struggle_intensity = 0.0;
    }

    /// End-of-tick reset of the momentary input flags. The held reel
    /// flag is the driver's to manage and is left alone.
    pub fn clear_momentary_inputs(&mut self) {
        self.cast_pressed = false;
        self.slack_pressed = false;
        self.cancel_pressed = false;
    }

    /// Restore per-attempt transient state when returning to idle from a
    /// terminal phase. Zone configuration and the available fish list
    /// survive across attempts.
    pub fn reset_for_attempt(&mut self) {
        self.time_in_phase = 0.0;
        self.lure_velocity = Vec2::ZERO;
        self.line_length = 0.0;
        self.line_tension = 0.0;
        self.has_fish_interest = false;
        self.clear_hooked_fish();
        self.selected_fish = None;
        self.lost_reason = LostReason::Unknown;
    }
}
