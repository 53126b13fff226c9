//! The encounter state machine orchestrator.
//!
//! Owns the phase registry and the active phase, runs the
//! enter/update/exit/transition protocol, and buffers phase-changed
//! notifications for the driver to drain.

use std::collections::HashMap;

use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::events::PhaseChanged;

use crate::behavior::PhaseBehavior;

/// Fatal wiring errors. All of these signal a configuration defect at
/// startup, not a recoverable runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("phase {0} already has a registered behavior")]
    DuplicatePhase(Phase),
    #[error("no behavior registered for phase {0}")]
    UnregisteredPhase(Phase),
    #[error("state machine is already initialized")]
    AlreadyInitialized,
    #[error("state machine has not been initialized")]
    NotInitialized,
}

/// The encounter-phase state machine.
pub struct EncounterMachine {
    behaviors: HashMap<Phase, Box<dyn PhaseBehavior>>,
    current: Option<Phase>,
    initialized: bool,
    events: Vec<PhaseChanged>,
}

impl EncounterMachine {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            current: None,
            initialized: false,
            events: Vec::new(),
        }
    }

    /// Register a behavior for a phase. Each phase may be registered
    /// exactly once.
    pub fn register(
        &mut self,
        phase: Phase,
        behavior: Box<dyn PhaseBehavior>,
    ) -> Result<(), EncounterError> {
        if self.behaviors.contains_key(&phase) {
            return Err(EncounterError::DuplicatePhase(phase));
        }
        self.behaviors.insert(phase, behavior);
        Ok(())
    }

    /// Enter the start phase and emit the initial phase-changed
    /// notification (previous = `None`).
    pub fn initialize(
        &mut self,
        start: Phase,
        ctx: &mut EncounterContext,
    ) -> Result<(), EncounterError> {
        if self.initialized {
            return Err(EncounterError::AlreadyInitialized);
        }
        if !self.behaviors.contains_key(&start) {
            return Err(EncounterError::UnregisteredPhase(start));
        }
        self.initialized = true;
        self.transition_to(start, ctx)
    }

    /// Advance the active phase by one tick, then transition if the
    /// phase asks for it.
    pub fn update(&mut self, ctx: &mut EncounterContext, dt: f32) -> Result<(), EncounterError> {
        if !self.initialized {
            return Err(EncounterError::NotInitialized);
        }
        let current = self.current.ok_or(EncounterError::NotInitialized)?;

        ctx.time_in_phase += dt;
        let behavior = self
            .behaviors
            .get_mut(&current)
            .ok_or(EncounterError::UnregisteredPhase(current))?;
        behavior.update(ctx, dt);

        if let Some(next) = behavior.next(ctx) {
            if next != current {
                self.transition_to(next, ctx)?;
            }
        }
        Ok(())
    }

    /// Exit the current phase (if any), enter `phase`, and emit a
    /// phase-changed notification. Transitioning to the phase that is
    /// already current is a no-op: no exit, no enter, no notification.
    pub fn transition_to(
        &mut self,
        phase: Phase,
        ctx: &mut EncounterContext,
    ) -> Result<(), EncounterError> {
        if !self.behaviors.contains_key(&phase) {
            return Err(EncounterError::UnregisteredPhase(phase));
        }
        if self.current == Some(phase) {
            return Ok(());
        }

        let previous = self.current;
        if let Some(prev) = previous {
            if let Some(behavior) = self.behaviors.get_mut(&prev) {
                behavior.exit(ctx);
            }
        }

        self.current = Some(phase);
        ctx.phase = phase;
        ctx.time_in_phase = 0.0;

        if self.initialized {
            if let Some(behavior) = self.behaviors.get_mut(&phase) {
                behavior.enter(ctx);
            }
        }

        log::debug!(
            "phase transition: {} -> {}",
            previous.map(|p| p.name()).unwrap_or("(none)"),
            phase.name()
        );
        self.events.push(PhaseChanged {
            previous,
            next: phase,
        });
        Ok(())
    }

    /// Exit the current phase and clear the initialized flag. Safe to
    /// call when already reset.
    pub fn reset(&mut self, ctx: &mut EncounterContext) {
        if self.initialized {
            if let Some(current) = self.current {
                if let Some(behavior) = self.behaviors.get_mut(&current) {
                    behavior.exit(ctx);
                }
            }
        }
        self.current = None;
        self.initialized = false;
    }

    /// The active phase, if initialized.
    pub fn current_phase(&self) -> Option<Phase> {
        self.current
    }

    /// Whether `initialize` has run (and `reset` has not).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Drain the buffered phase-changed notifications.
    pub fn take_events(&mut self) -> Vec<PhaseChanged> {
        std::mem::take(&mut self.events)
    }
}

impl Default for EncounterMachine {
    fn default() -> Self {
        Self::new()
    }
}
