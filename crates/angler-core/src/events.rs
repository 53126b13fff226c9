//! Events emitted by the encounter for the orchestration layer.

use serde::{Deserialize, Serialize};

use crate::enums::Phase;

/// Notification fired on every initialize/transition of the state
/// machine. `previous` is `None` only on the very first initialize.
///
/// The state machine buffers these; the driver drains them each tick and
/// forwards them to whatever notification channel the host uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChanged {
    pub previous: Option<Phase>,
    pub next: Phase,
}

impl PhaseChanged {
    /// Display name of the previous phase, if any.
    pub fn previous_name(&self) -> Option<&'static str> {
        self.previous.map(|p| p.name())
    }

    /// Display name of the new phase.
    pub fn next_name(&self) -> &'static str {
        self.next.name()
    }
}
