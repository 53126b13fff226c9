//! Encounter engine — the tick-driven driver around the state machine.
//!
//! `EncounterEngine` owns the shared context and the machine, processes
//! host commands at tick boundaries, performs the orchestration duties
//! the core leaves external (fish selection on bite confirmation,
//! hooked-fish mirroring, context reset on return to idle, momentary
//! flag clearing), and produces `EncounterSnapshot`s.

use std::collections::VecDeque;

use glam::Vec2;

use angler_core::commands::InputCommand;
use angler_core::constants::DT;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::events::PhaseChanged;
use angler_core::fish::{FishConfigError, FishDescriptor};
use angler_core::state::EncounterSnapshot;
use angler_core::types::{clamp01, SimTime};
use angler_encounter::phases;
use angler_encounter::selector::select_fish;
use angler_encounter::{EncounterError, EncounterMachine};

use crate::rng::SeededRandom;

/// Startup failures: either bad fish configuration or a machine wiring
/// defect. Both are fatal by design.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Machine(#[from] EncounterError),
    #[error(transparent)]
    FishConfig(#[from] FishConfigError),
}

/// Configuration for starting a new encounter engine.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    /// RNG seed for determinism. Same seed = same encounter.
    pub seed: u64,
    pub zone_id: String,
    /// Additive bite-probability modifier for the zone, clamped
    /// non-negative.
    pub bite_modifier: f32,
    pub available_fish: Vec<FishDescriptor>,
    /// Initial facing direction; casts land along it.
    pub start_facing: Vec2,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            zone_id: "default".to_string(),
            bite_modifier: 0.0,
            available_fish: Vec::new(),
            start_facing: Vec2::X,
        }
    }
}

/// The encounter driver. Owns the context and machine exclusively; a
/// host running several encounters runs one engine per encounter.
pub struct EncounterEngine {
    machine: EncounterMachine,
    context: EncounterContext,
    time: SimTime,
    command_queue: VecDeque<InputCommand>,
    cancel_requested: bool,
}

impl EncounterEngine {
    /// Build and initialize an engine. Fails fast on invalid fish
    /// configuration or machine wiring defects.
    pub fn new(config: EncounterConfig) -> Result<Self, EngineError> {
        for fish in &config.available_fish {
            fish.validate()?;
        }

        let mut context = EncounterContext::new(Box::new(SeededRandom::new(config.seed)));
        context.set_zone(config.zone_id, config.bite_modifier);
        context.available_fish = config.available_fish;
        context.cast_direction = config.start_facing;

        let mut machine = EncounterMachine::new();
        phases::register_defaults(&mut machine)?;
        machine.initialize(Phase::Idle, &mut context)?;

        Ok(Self {
            machine,
            context,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            cancel_requested: false,
        })
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the encounter by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> Result<EncounterSnapshot, EncounterError> {
        self.cancel_requested = false;
        self.process_commands();

        self.machine.update(&mut self.context, DT)?;
        let events = self.machine.take_events();
        for event in &events {
            self.react(*event);
        }

        self.context.clear_momentary_inputs();
        self.time.advance();
        Ok(self.build_snapshot(events))
    }

    /// The active phase.
    pub fn phase(&self) -> Phase {
        self.context.phase
    }

    /// Seconds spent in the active phase.
    pub fn time_in_phase(&self) -> f32 {
        self.context.time_in_phase
    }

    /// Read-only view of the shared context.
    pub fn context(&self) -> &EncounterContext {
        &self.context
    }

    /// Caller-driven override: jump straight to a phase, running the
    /// current phase's exit exactly once.
    pub fn force_transition(&mut self, phase: Phase) -> Result<(), EncounterError> {
        self.machine.transition_to(phase, &mut self.context)
    }

    /// Abort the encounter and restore the context for a fresh attempt.
    pub fn reset_to_idle(&mut self) -> Result<(), EncounterError> {
        self.machine.transition_to(Phase::Idle, &mut self.context)?;
        self.context.reset_for_attempt();
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::PressCast => {
                self.context.cast_pressed = true;
            }
            InputCommand::PressSlack => {
                self.context.slack_pressed = true;
            }
            InputCommand::PressCancel => {
                // Only honored while idle; anywhere else the encounter
                // must play out or be force-reset by the host.
                if self.context.phase == Phase::Idle {
                    self.context.cancel_pressed = true;
                    self.cancel_requested = true;
                } else {
                    log::debug!("cancel ignored in phase {}", self.context.phase);
                }
            }
            InputCommand::SetReelHeld { held } => {
                self.context.reel_held = held;
            }
            InputCommand::SetFacing { direction } => {
                self.context.cast_direction = direction;
            }
            InputCommand::SetLureKinematics { position, velocity } => {
                self.context.lure_position = position;
                self.context.lure_velocity = velocity;
            }
            InputCommand::SetLineTension { tension } => {
                self.context.set_line_tension(tension);
            }
            InputCommand::SetZone {
                zone_id,
                bite_modifier,
            } => {
                self.context.set_zone(zone_id, bite_modifier);
            }
            InputCommand::SetAvailableFish { fish } => {
                if let Some(err) = fish.iter().find_map(|f| f.validate().err()) {
                    log::warn!("rejecting fish list: {err}");
                    return;
                }
                self.context.available_fish = fish;
            }
        }
    }

    /// Orchestration reactions to phase transitions.
    fn react(&mut self, event: PhaseChanged) {
        match event.next {
            Phase::HookOpportunity => {
                let roll = self.context.uniform();
                let picked = select_fish(&self.context.available_fish, roll).cloned();
                if let Some(fish) = &picked {
                    log::debug!("bite confirmed: {} ({})", fish.display_name, fish.id);
                }
                self.context.selected_fish = picked;
            }
            Phase::Hooked => {
                // Mirror the fish-AI decision: rarer fish fight harder.
                if let Some((id, struggle)) = self
                    .context
                    .selected_fish
                    .as_ref()
                    .map(|f| (f.id.clone(), clamp01(1.0 - f.rarity_base)))
                {
                    self.context.set_hooked_fish(id, struggle);
                }
            }
            Phase::Idle => {
                if event.previous.is_some_and(|p| p.is_terminal()) {
                    self.context.reset_for_attempt();
                }
            }
            Phase::Lost => {
                log::debug!("fish lost: {:?}", self.context.lost_reason);
            }
            _ => {}
        }
    }

    fn build_snapshot(&self, phase_events: Vec<PhaseChanged>) -> EncounterSnapshot {
        EncounterSnapshot {
            time: self.time,
            phase: self.context.phase,
            time_in_phase: self.context.time_in_phase,
            lure_position: self.context.lure_position,
            lure_velocity: self.context.lure_velocity,
            line_tension: self.context.line_tension,
            has_fish_interest: self.context.has_fish_interest,
            has_hooked_fish: self.context.has_hooked_fish,
            hooked_fish_id: self.context.hooked_fish_id.clone(),
            struggle_intensity: self.context.struggle_intensity,
            selected_fish_id: self.context.selected_fish.as_ref().map(|f| f.id.clone()),
            zone_id: self.context.zone_id.clone(),
            lost_reason: self.context.lost_reason,
            cancel_requested: self.cancel_requested,
            phase_events,
        }
    }
}
