//! Input commands sent from the host to the encounter driver.
//!
//! Commands are queued and applied at the next tick boundary. Momentary
//! presses are translated into context flags that last exactly one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::fish::FishDescriptor;

/// All host-side actions the encounter driver accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    // --- Player inputs ---
    /// Cast / hook-set / twitch input (context-sensitive by phase).
    PressCast,
    /// Acknowledge a slack warning during reeling.
    PressSlack,
    /// Cancel gesture; honored only while the encounter is idle.
    PressCancel,
    /// Reel input held state for this and subsequent ticks.
    SetReelHeld { held: bool },
    /// Facing direction used as the cast direction.
    SetFacing { direction: Vec2 },

    // --- Externally-observed data ---
    /// Lure kinematics computed by the drift physics outside the core.
    SetLureKinematics { position: Vec2, velocity: Vec2 },
    /// Line tension override from the orchestration layer.
    SetLineTension { tension: f32 },

    // --- Configuration ---
    /// Active zone and its additive bite-probability modifier.
    SetZone { zone_id: String, bite_modifier: f32 },
    /// Replace the list of species available in the current zone.
    SetAvailableFish { fish: Vec<FishDescriptor> },
}
