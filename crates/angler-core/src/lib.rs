//! Core types and definitions for the fishing encounter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! phases, the shared encounter context, fish descriptors, commands,
//! state snapshots, events, and constants. It has no dependency on any
//! runtime framework.

pub mod commands;
pub mod constants;
pub mod context;
pub mod enums;
pub mod events;
pub mod fish;
pub mod rng;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
