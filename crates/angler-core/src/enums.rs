//! Enumeration types used throughout the encounter simulation.

use serde::{Deserialize, Serialize};

/// The mutually-exclusive stages of a fishing encounter.
///
/// Exactly one phase is active at any time. `Idle` is both the start
/// phase and the phase the two terminal display phases (`Caught`,
/// `Lost`) return to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a cast input.
    #[default]
    Idle,
    /// Lure in flight toward its landing point.
    Casting,
    /// Lure on the water, still moving.
    LureDrift,
    /// Lure settled, waiting quietly.
    Stillness,
    /// Short player-initiated lure twitch.
    MicroTwitch,
    /// Rolling whether a fish bites.
    BiteCheck,
    /// Bite confirmed; the hook-set window is open.
    HookOpportunity,
    /// Hook set, brief transition into the fight.
    Hooked,
    /// Tension-based reeling contest.
    Reeling,
    /// Fish threw slack; the player must release the reel.
    SlackEvent,
    /// Fish landed (terminal display).
    Caught,
    /// Fish lost (terminal display).
    Lost,
}

impl Phase {
    /// All phases, in encounter order. Useful for wiring up a full registry.
    pub const ALL: [Phase; 12] = [
        Phase::Idle,
        Phase::Casting,
        Phase::LureDrift,
        Phase::Stillness,
        Phase::MicroTwitch,
        Phase::BiteCheck,
        Phase::HookOpportunity,
        Phase::Hooked,
        Phase::Reeling,
        Phase::SlackEvent,
        Phase::Caught,
        Phase::Lost,
    ];

    /// Stable display name, used in phase-changed notifications.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Casting => "Casting",
            Phase::LureDrift => "LureDrift",
            Phase::Stillness => "Stillness",
            Phase::MicroTwitch => "MicroTwitch",
            Phase::BiteCheck => "BiteCheck",
            Phase::HookOpportunity => "HookOpportunity",
            Phase::Hooked => "Hooked",
            Phase::Reeling => "Reeling",
            Phase::SlackEvent => "SlackEvent",
            Phase::Caught => "Caught",
            Phase::Lost => "Lost",
        }
    }

    /// Whether this phase is a terminal display phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Caught | Phase::Lost)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a hooked (or biting) fish was lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LostReason {
    /// No specific cause recorded.
    #[default]
    Unknown,
    /// The hook window expired with no input.
    MissedHook,
    /// Hook-set input arrived inside the early-penalty window.
    EarlyHook,
    /// Tension reached maximum and the line snapped.
    LineSnapped,
    /// The fish slipped the hook at low tension.
    FishEscaped,
    /// A slack event was mishandled (reel held too long).
    SlackEventFailure,
}
