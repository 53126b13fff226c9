//! Tests for the core vocabulary: descriptors, curves, context, randomness.

use glam::Vec2;

use crate::context::EncounterContext;
use crate::enums::{LostReason, Phase};
use crate::fish::{BiteWindowCurve, FishConfigError, FishDescriptor};
use crate::rng::{RandomSource, ScriptedRandom};

fn descriptor(id: &str, rarity: f32) -> FishDescriptor {
    FishDescriptor {
        id: id.to_string(),
        display_name: format!("{id} (display)"),
        bite_window_curve: BiteWindowCurve::default(),
        min_wait_time: 1.0,
        max_wait_time: 4.0,
        rarity_base: rarity,
    }
}

fn context_with(values: Vec<f32>) -> EncounterContext {
    EncounterContext::new(Box::new(ScriptedRandom::new(values)))
}

// ---- Fish descriptors ----

#[test]
fn test_valid_descriptor_passes() {
    assert!(descriptor("perch", 0.8).validate().is_ok());
}

#[test]
fn test_empty_id_rejected() {
    let mut fish = descriptor("perch", 0.8);
    fish.id.clear();
    assert_eq!(fish.validate(), Err(FishConfigError::EmptyId));
}

#[test]
fn test_empty_display_name_rejected() {
    let mut fish = descriptor("perch", 0.8);
    fish.display_name.clear();
    assert!(matches!(
        fish.validate(),
        Err(FishConfigError::EmptyDisplayName { .. })
    ));
}

#[test]
fn test_inverted_wait_range_rejected() {
    let mut fish = descriptor("perch", 0.8);
    fish.min_wait_time = 5.0;
    fish.max_wait_time = 2.0;
    assert!(matches!(
        fish.validate(),
        Err(FishConfigError::InvertedWaitRange { .. })
    ));
}

#[test]
fn test_negative_wait_time_rejected() {
    let mut fish = descriptor("perch", 0.8);
    fish.min_wait_time = -0.5;
    assert!(matches!(
        fish.validate(),
        Err(FishConfigError::NegativeWaitTime { .. })
    ));
}

#[test]
fn test_rarity_classifier() {
    assert!(descriptor("golden-koi", 0.05).is_rare());
    assert!(!descriptor("perch", 0.8).is_rare());
    // Threshold is exclusive.
    assert!(!descriptor("trout", 0.3).is_rare());
}

#[test]
fn test_wait_time_roll_stays_in_range() {
    let fish = descriptor("perch", 0.8);
    let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 0.999]);
    for _ in 0..3 {
        let wait = fish.roll_wait_time(&mut rng);
        assert!((fish.min_wait_time..=fish.max_wait_time).contains(&wait));
    }
}

// ---- Bite window curves ----

#[test]
fn test_curve_evaluation_clamps_time() {
    let curve = BiteWindowCurve::Linear {
        start: 0.0,
        end: 1.0,
    };
    assert_eq!(curve.evaluate(-2.0), 0.0);
    assert_eq!(curve.evaluate(3.0), 1.0);
    assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn test_peaked_curve_shape() {
    let curve = BiteWindowCurve::Peaked {
        peak_at: 0.5,
        peak_value: 1.0,
    };
    assert!((curve.evaluate(0.5) - 1.0).abs() < 1e-6);
    assert!((curve.evaluate(0.25) - 0.5).abs() < 1e-6);
    assert!((curve.evaluate(0.75) - 0.5).abs() < 1e-6);
    assert!(curve.evaluate(0.0).abs() < 1e-6);
    assert!(curve.evaluate(1.0).abs() < 1e-6);
}

// ---- Context ----

#[test]
fn test_zone_setter_clamps_modifier_non_negative() {
    let mut ctx = context_with(vec![0.5]);
    ctx.set_zone("pier", -0.4);
    assert_eq!(ctx.bite_probability_modifier, 0.0);
    ctx.set_zone("reef", 0.25);
    assert_eq!(ctx.bite_probability_modifier, 0.25);
    assert_eq!(ctx.zone_id, "reef");
}

#[test]
fn test_line_tension_setter_clamps() {
    let mut ctx = context_with(vec![0.5]);
    ctx.set_line_tension(1.8);
    assert_eq!(ctx.line_tension, 1.0);
    ctx.set_line_tension(-0.3);
    assert_eq!(ctx.line_tension, 0.0);
}

#[test]
fn test_hooked_fish_mirroring() {
    let mut ctx = context_with(vec![0.5]);
    ctx.set_hooked_fish("perch", 1.7);
    assert!(ctx.has_hooked_fish);
    assert_eq!(ctx.hooked_fish_id.as_deref(), Some("perch"));
    assert_eq!(ctx.struggle_intensity, 1.0);

    ctx.clear_hooked_fish();
    assert!(!ctx.has_hooked_fish);
    assert!(ctx.hooked_fish_id.is_none());
    assert_eq!(ctx.struggle_intensity, 0.0);
}

#[test]
fn test_momentary_flags_cleared_held_flag_kept() {
    let mut ctx = context_with(vec![0.5]);
    ctx.cast_pressed = true;
    ctx.slack_pressed = true;
    ctx.cancel_pressed = true;
    ctx.reel_held = true;

    ctx.clear_momentary_inputs();
    assert!(!ctx.cast_pressed);
    assert!(!ctx.slack_pressed);
    assert!(!ctx.cancel_pressed);
    assert!(ctx.reel_held, "held flag is driver-managed");
}

#[test]
fn test_attempt_reset_keeps_zone_and_fish_list() {
    let mut ctx = context_with(vec![0.5]);
    ctx.set_zone("reef", 0.1);
    ctx.available_fish = vec![descriptor("perch", 0.8)];
    ctx.phase = Phase::Lost;
    ctx.set_hooked_fish("perch", 0.5);
    ctx.has_fish_interest = true;
    ctx.selected_fish = Some(descriptor("perch", 0.8));
    ctx.lost_reason = LostReason::LineSnapped;
    ctx.lure_velocity = Vec2::new(1.0, 0.0);

    ctx.reset_for_attempt();
    assert_eq!(ctx.zone_id, "reef");
    assert_eq!(ctx.available_fish.len(), 1);
    assert!(!ctx.has_fish_interest);
    assert!(!ctx.has_hooked_fish);
    assert!(ctx.selected_fish.is_none());
    assert_eq!(ctx.lost_reason, LostReason::Unknown);
    assert_eq!(ctx.lure_velocity, Vec2::ZERO);
}

// ---- Scripted randomness ----

#[test]
fn test_scripted_random_cycles() {
    let mut rng = ScriptedRandom::new(vec![0.1, 0.9]);
    assert_eq!(rng.uniform(), 0.1);
    assert_eq!(rng.uniform(), 0.9);
    assert_eq!(rng.uniform(), 0.1);
}

#[test]
fn test_scripted_range_maps_into_interval() {
    let mut rng = ScriptedRandom::constant(0.5);
    assert!((rng.range(2.0, 8.0) - 5.0).abs() < 1e-6);
    // Empty range degrades to min.
    assert_eq!(rng.range(3.0, 3.0), 3.0);
}

#[test]
fn test_snapshot_and_descriptor_json_round_trip() {
    let fish = descriptor("perch", 0.8);
    let json = serde_json::to_string(&fish).unwrap();
    let back: FishDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, "perch");
    assert_eq!(back.rarity_base, 0.8);

    let snapshot = crate::state::EncounterSnapshot {
        phase: Phase::Reeling,
        line_tension: 0.4,
        ..Default::default()
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: crate::state::EncounterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, Phase::Reeling);
    assert_eq!(back.line_tension, 0.4);
}

#[test]
fn test_phase_names_are_stable() {
    assert_eq!(Phase::HookOpportunity.name(), "HookOpportunity");
    assert_eq!(Phase::ALL.len(), 12);
    assert!(Phase::Caught.is_terminal());
    assert!(Phase::Lost.is_terminal());
    assert!(!Phase::Reeling.is_terminal());
}
