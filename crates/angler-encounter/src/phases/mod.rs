//! The twelve phase behaviors of a fishing encounter.

pub mod bite_check;
pub mod casting;
pub mod caught;
pub mod hook_opportunity;
pub mod hooked;
pub mod idle;
pub mod lost;
pub mod lure_drift;
pub mod micro_twitch;
pub mod reeling;
pub mod slack_event;
pub mod stillness;

use angler_core::enums::Phase;

use crate::machine::{EncounterError, EncounterMachine};

/// Register the default behavior set for all twelve phases.
pub fn register_defaults(machine: &mut EncounterMachine) -> Result<(), EncounterError> {
    machine.register(Phase::Idle, Box::new(idle::IdlePhase::new()))?;
    machine.register(Phase::Casting, Box::new(casting::CastingPhase::default()))?;
    machine.register(
        Phase::LureDrift,
        Box::new(lure_drift::LureDriftPhase::default()),
    )?;
    machine.register(
        Phase::Stillness,
        Box::new(stillness::StillnessPhase::default()),
    )?;
    machine.register(
        Phase::MicroTwitch,
        Box::new(micro_twitch::MicroTwitchPhase::default()),
    )?;
    machine.register(
        Phase::BiteCheck,
        Box::new(bite_check::BiteCheckPhase::default()),
    )?;
    machine.register(
        Phase::HookOpportunity,
        Box::new(hook_opportunity::HookOpportunityPhase::default()),
    )?;
    machine.register(Phase::Hooked, Box::new(hooked::HookedPhase::default()))?;
    machine.register(Phase::Reeling, Box::new(reeling::ReelingPhase::default()))?;
    machine.register(
        Phase::SlackEvent,
        Box::new(slack_event::SlackEventPhase::default()),
    )?;
    machine.register(Phase::Caught, Box::new(caught::CaughtPhase::default()))?;
    machine.register(Phase::Lost, Box::new(lost::LostPhase::default()))?;
    Ok(())
}
