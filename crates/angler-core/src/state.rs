//! Encounter state snapshot — the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{LostReason, Phase};
use crate::events::PhaseChanged;
use crate::types::SimTime;

/// Complete encounter state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: Phase,
    /// Seconds spent in the current phase.
    pub time_in_phase: f32,
    pub lure_position: Vec2,
    pub lure_velocity: Vec2,
    /// Normalized line strain in [0, 1].
    pub line_tension: f32,
    pub has_fish_interest: bool,
    pub has_hooked_fish: bool,
    pub hooked_fish_id: Option<String>,
    pub struggle_intensity: f32,
    /// Species chosen when the bite was confirmed, if any.
    pub selected_fish_id: Option<String>,
    pub zone_id: String,
    /// Meaningful while in (or transitioning through) the lost phase.
    pub lost_reason: LostReason,
    /// Whether a cancel gesture was accepted this tick (idle only).
    pub cancel_requested: bool,
    /// Phase transitions that occurred during this tick.
    pub phase_events: Vec<PhaseChanged>,
}
