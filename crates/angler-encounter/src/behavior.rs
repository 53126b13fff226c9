//! The capability surface every phase behavior implements.

use angler_core::context::EncounterContext;
use angler_core::enums::Phase;

/// One phase's behavior, driven by the state machine.
///
/// Behavior instances are registered once and reused across repeated
/// visits to their phase, so `enter` must fully reset all transient
/// fields to their initial values. All reads and writes of shared state
/// go through the context; behaviors own only their own timers and flags.
pub trait PhaseBehavior {
    /// Called when the machine transitions into this phase.
    fn enter(&mut self, ctx: &mut EncounterContext);

    /// Called once per tick while this phase is active.
    fn update(&mut self, ctx: &mut EncounterContext, dt: f32);

    /// Called when the machine transitions out of this phase.
    fn exit(&mut self, _ctx: &mut EncounterContext) {}

    /// Queried after `update`; returning a different phase triggers a
    /// transition. Returning the current phase (or `None`) is a no-op.
    ///
    /// Takes the context mutably because some phases resolve their exit
    /// with a fresh randomness draw.
    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase>;
}
