//! Weighted fish selection, invoked when a bite is confirmed.

use angler_core::fish::FishDescriptor;

/// Pick one species from `candidates` using `roll01`, a uniform draw in
/// `[0, 1)` supplied by the caller.
///
/// Selection is proportional to `rarity_base` in stable order: the roll
/// is scaled by the total weight and walked against cumulative weights.
/// An empty list yields `None`; a non-positive total weight falls back
/// to the first candidate; rounding that leaves no match falls back to
/// the last.
pub fn select_fish(candidates: &[FishDescriptor], roll01: f32) -> Option<&FishDescriptor> {
    if candidates.is_empty() {
        return None;
    }

    let total_weight: f32 = candidates.iter().map(|f| f.rarity_base).sum();
    if total_weight <= 0.0 {
        return candidates.first();
    }

    let roll = roll01 * total_weight;
    let mut cumulative = 0.0;
    for fish in candidates {
        cumulative += fish.rarity_base;
        if cumulative >= roll {
            return Some(fish);
        }
    }

    // Floating-point rounding left the roll above every cumulative sum.
    candidates.last()
}
