//! Encounter constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Casting ---

/// Time from cast input to lure touchdown (seconds).
pub const CAST_DURATION_SECS: f32 = 0.5;

/// Minimum allowed cast duration after clamping (seconds).
pub const CAST_DURATION_FLOOR_SECS: f32 = 0.1;

/// Shortest cast landing distance (world units).
pub const CAST_MIN_DISTANCE: f32 = 2.0;

/// Longest cast landing distance (world units).
pub const CAST_MAX_DISTANCE: f32 = 8.0;

// --- Lure drift ---

/// Lure speed below which the lure counts as settled (units/s).
pub const DRIFT_VELOCITY_THRESHOLD: f32 = 0.1;

/// Minimum time the lure must drift before settling (seconds).
pub const DRIFT_MIN_TIME_SECS: f32 = 0.5;

// --- Stillness / twitch ---

/// Quiet time required before a bite check starts (seconds).
pub const STILLNESS_THRESHOLD_SECS: f32 = 3.0;

/// Duration of a micro-twitch of the lure (seconds).
pub const TWITCH_DURATION_SECS: f32 = 0.2;

/// Minimum allowed twitch duration after clamping (seconds).
pub const TWITCH_DURATION_FLOOR_SECS: f32 = 0.05;

// --- Bite check ---

/// Base probability that a bite occurs during a check.
pub const BITE_BASE_PROBABILITY: f32 = 0.5;

/// Time into the check at which the bite roll happens (seconds).
pub const BITE_CHECK_DURATION_SECS: f32 = 0.3;

/// Chance that a failed check returns to stillness instead of idle.
pub const BITE_NO_BITE_RETURN_CHANCE: f32 = 0.5;

/// Hard timeout for the whole check (seconds).
pub const BITE_CHECK_TIMEOUT_SECS: f32 = 2.0;

// --- Hook window ---

/// Length of the window during which a hook-set input is valid (seconds).
pub const HOOK_WINDOW_DURATION_SECS: f32 = 0.8;

/// Input earlier than this into the window counts as too early (seconds).
pub const HOOK_EARLY_PENALTY_WINDOW_SECS: f32 = 0.1;

/// Hook-set animation duration before reeling starts (seconds).
pub const HOOK_SET_DURATION_SECS: f32 = 0.3;

// --- Reeling ---

/// Tension gained per second while reeling (before struggle scaling).
pub const REEL_TENSION_UP_RATE: f32 = 0.35;

/// Tension shed per second while the reel is released.
pub const REEL_TENSION_DOWN_RATE: f32 = 0.5;

/// Tension at which the line snaps.
pub const REEL_MAX_TENSION: f32 = 1.0;

/// Fraction of max tension the line starts at when reeling begins.
pub const REEL_START_TENSION_FRACTION: f32 = 0.3;

/// Catch progress gained per second of reeling.
pub const REEL_PROGRESS_RATE: f32 = 0.25;

/// Chance per slack interval that the fish throws slack into the line.
pub const REEL_SLACK_CHANCE: f32 = 0.3;

/// Seconds between slack re-rolls while reeling.
pub const REEL_SLACK_INTERVAL_SECS: f32 = 1.5;

/// Tension gain multiplier while reeling through slack.
pub const REEL_SLACK_TENSION_MULTIPLIER: f32 = 2.0;

/// Per-tick escape chance while the line is slack and tension is low.
pub const REEL_ESCAPE_THRESHOLD: f32 = 0.02;

/// Fraction of max tension below which the fish can slip the hook.
pub const REEL_LOW_TENSION_FRACTION: f32 = 0.15;

// --- Slack event ---

/// Continuous release time needed to clear a slack event (seconds).
pub const SLACK_REQUIRED_RELEASE_SECS: f32 = 0.3;

/// Holding the reel this long during a slack event snaps the line (seconds).
pub const SLACK_MAX_HOLD_SECS: f32 = 1.5;

// --- Terminal display phases ---

/// How long the caught celebration lingers (seconds).
pub const CAUGHT_DISPLAY_SECS: f32 = 2.0;

/// How long the lost notice lingers (seconds).
pub const LOST_DISPLAY_SECS: f32 = 1.5;

// --- Fish ---

/// Rarity weight below which a species counts as rare.
pub const RARE_RARITY_THRESHOLD: f32 = 0.3;
