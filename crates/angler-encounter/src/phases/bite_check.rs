//! BiteCheck — rolling whether a fish bites.

use angler_core::constants::*;
use angler_core::context::EncounterContext;
use angler_core::enums::Phase;
use angler_core::types::clamp01;

use crate::behavior::PhaseBehavior;

#[derive(Debug, Clone, Copy)]
pub struct BiteCheckConfig {
    /// Base probability that a bite occurs, before the zone modifier.
    pub base_probability: f32,
    /// Time into the check at which the single bite roll happens.
    pub check_duration: f32,
    /// Chance a failed check returns to stillness instead of idle.
    pub no_bite_return_chance: f32,
    /// Hard timeout for the whole check.
    pub timeout: f32,
}

impl Default for BiteCheckConfig {
    fn default() -> Self {
        Self {
            base_probability: BITE_BASE_PROBABILITY,
            check_duration: BITE_CHECK_DURATION_SECS,
            no_bite_return_chance: BITE_NO_BITE_RETURN_CHANCE,
            timeout: BITE_CHECK_TIMEOUT_SECS,
        }
    }
}

/// Performs one bite roll against the zone-modified probability.
///
/// The final probability is `clamp01(base * (1 + modifier))`, so a large
/// positive modifier saturates at a guaranteed bite and a negative one
/// (written directly into the context, bypassing the zone setter's
/// clamp) scales the chance down.
pub struct BiteCheckPhase {
    config: BiteCheckConfig,
    elapsed: f32,
    bite_occurred: bool,
    check_complete: bool,
}

impl BiteCheckPhase {
    pub fn new(config: BiteCheckConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            bite_occurred: false,
            check_complete: false,
        }
    }

    pub fn bite_occurred(&self) -> bool {
        self.bite_occurred
    }
}

impl Default for BiteCheckPhase {
    fn default() -> Self {
        Self::new(BiteCheckConfig::default())
    }
}

impl PhaseBehavior for BiteCheckPhase {
    fn enter(&mut self, _ctx: &mut EncounterContext) {
        self.elapsed = 0.0;
        self.bite_occurred = false;
        self.check_complete = false;
    }

    fn update(&mut self, ctx: &mut EncounterContext, dt: f32) {
        self.elapsed += dt;
        if !self.check_complete && self.elapsed >= self.config.check_duration {
            let final_prob =
                clamp01(self.config.base_probability * (1.0 + ctx.bite_probability_modifier));
            self.bite_occurred = ctx.uniform() < final_prob;
            self.check_complete = true;
            if self.bite_occurred {
                ctx.has_fish_interest = true;
            }
        }
    }

    fn next(&mut self, ctx: &mut EncounterContext) -> Option<Phase> {
        if self.bite_occurred {
            return Some(Phase::HookOpportunity);
        }
        // Timeout overrides the return-to-stillness roll.
        if self.elapsed >= self.config.timeout {
            return Some(Phase::Idle);
        }
        if !self.check_complete {
            return None;
        }
        // No bite: a fresh draw decides whether to settle back into
        // stillness or wind the encounter down.
        if ctx.uniform() < self.config.no_bite_return_chance {
            Some(Phase::Stillness)
        } else {
            Some(Phase::Idle)
        }
    }
}
