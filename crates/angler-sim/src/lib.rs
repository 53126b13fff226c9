//! Headless driver for the fishing encounter.
//!
//! Owns the shared context and the state machine, runs them at a fixed
//! tick rate with a seeded RNG, and produces `EncounterSnapshot`s for
//! the host. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod rng;

pub use angler_core as core;
pub use engine::{EncounterConfig, EncounterEngine};
