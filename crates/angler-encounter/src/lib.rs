//! Encounter state machine for the fishing minigame.
//!
//! Implements the phase graph from cast to caught-or-lost: the machine
//! orchestrator, the twelve phase behaviors, and weighted fish selection.
//! Pure simulation logic — no rendering, audio, or input polling.

pub mod behavior;
pub mod machine;
pub mod phases;
pub mod selector;

pub use angler_core as core;
pub use machine::{EncounterError, EncounterMachine};
